//! Domain types for the bus locator.
//!
//! This module contains the core domain model types: coordinates, stations
//! and scheduled bus routes. Types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod coordinate;
mod error;
mod route;
mod station;

pub use coordinate::{Coordinate, CoordinateField, InvalidCoordinate};
pub use error::EngineError;
pub use route::{BusRoute, RouteId};
pub use station::{MapPlatform, Station, StationId};
