//! Bus station locator and fare estimator.
//!
//! Ranks stations by distance from the rider's location, lists the buses
//! boarding at a chosen station, and prices each trip from a banded
//! distance fare table.

pub mod arrivals;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod fares;
pub mod geo;
pub mod location;
pub mod ranking;
pub mod web;
