//! Engine error types.
//!
//! These errors represent invalid inputs and catalog inconsistencies
//! surfaced by the ranking and arrivals operations.

use super::{InvalidCoordinate, RouteId, StationId};
use crate::fares::FareError;

/// Errors returned by the ranking and fare engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A latitude or longitude was out of range
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    /// Fare lookup failed (negative distance)
    #[error(transparent)]
    Fare(#[from] FareError),

    /// A route names a destination that is not in the station catalog
    #[error("route {route} has unresolved destination {destination:?}")]
    UnresolvedDestination { route: RouteId, destination: String },

    /// No station with this id exists in the catalog
    #[error("unknown station {0}")]
    UnknownStation(StationId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::UnresolvedDestination {
            route: RouteId(4),
            destination: "Nowhere".into(),
        };
        assert_eq!(
            err.to_string(),
            "route 4 has unresolved destination \"Nowhere\""
        );

        let err = EngineError::UnknownStation(StationId(99));
        assert_eq!(err.to_string(), "unknown station 99");

        let err = EngineError::from(FareError::InvalidDistance(-1.0));
        assert_eq!(err.to_string(), "invalid distance: -1 km");

        let err = EngineError::from(crate::domain::Coordinate::new(0.0, 200.0).unwrap_err());
        assert_eq!(
            err.to_string(),
            "invalid coordinate: longitude 200 is out of range"
        );
    }
}
