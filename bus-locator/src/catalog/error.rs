//! Catalog error types.

use crate::domain::{RouteId, StationId};

/// Errors that can occur when loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the expected shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Two stations share an id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// Two routes share an id
    #[error("duplicate route id {0}")]
    DuplicateRoute(RouteId),

    /// A station has an empty name
    #[error("station {0} has an empty name")]
    EmptyStationName(StationId),

    /// A route boards at a station that is not in the catalog
    #[error("route {route} boards at unknown station {station}")]
    UnknownOrigin { route: RouteId, station: StationId },

    /// A route's destination does not match any station
    #[error("route {route} has unresolved destination {destination:?}")]
    UnresolvedDestination { route: RouteId, destination: String },
}
