//! Web layer for the bus locator.
//!
//! Provides JSON endpoints for nearby stations, station arrivals and fares.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
