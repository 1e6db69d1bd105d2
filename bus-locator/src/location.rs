//! Device location collaborator.
//!
//! The engine never acquires a location itself. Callers obtain an origin
//! from a [`LocationProvider`] and fall back to a default origin when the
//! user denies permission or no fix is available.

use tracing::warn;

use crate::domain::Coordinate;

/// Origin used when no device location is available (Soweto).
pub const DEFAULT_ORIGIN: (f64, f64) = (-26.2618, 27.8689);

/// Result of asking the user for foreground location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Errors from a location provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The user refused location access
    #[error("location permission denied")]
    PermissionDenied,

    /// No location fix could be obtained
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
}

/// Source of the device's current coordinate.
pub trait LocationProvider {
    /// Ask for foreground location access.
    fn request_foreground_permission(&self) -> Permission;

    /// A single location fix.
    fn current_coordinate(&self) -> Result<Coordinate, LocationError>;
}

/// The default origin as a coordinate.
pub fn default_origin() -> Coordinate {
    let (lat, lon) = DEFAULT_ORIGIN;
    Coordinate::new(lat, lon).unwrap_or_else(|e| unreachable!("default origin is valid: {e}"))
}

/// Request permission, then take one fix.
pub fn resolve_origin(provider: &dyn LocationProvider) -> Result<Coordinate, LocationError> {
    match provider.request_foreground_permission() {
        Permission::Granted => provider.current_coordinate(),
        Permission::Denied => Err(LocationError::PermissionDenied),
    }
}

/// Resolve the device origin, falling back to [`DEFAULT_ORIGIN`].
pub fn origin_or_default(provider: &dyn LocationProvider) -> Coordinate {
    resolve_origin(provider).unwrap_or_else(|e| {
        warn!(error = %e, "using default origin");
        default_origin()
    })
}

/// A provider that always reports the same answer.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLocation {
    result: Result<Coordinate, LocationError>,
}

impl FixedLocation {
    /// Permission granted; every fix returns `coordinate`.
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            result: Ok(coordinate),
        }
    }

    /// Permission denied.
    pub fn denied() -> Self {
        Self {
            result: Err(LocationError::PermissionDenied),
        }
    }

    /// Permission granted but no fix available.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            result: Err(LocationError::LocationUnavailable(reason.into())),
        }
    }
}

impl LocationProvider for FixedLocation {
    fn request_foreground_permission(&self) -> Permission {
        match self.result {
            Err(LocationError::PermissionDenied) => Permission::Denied,
            _ => Permission::Granted,
        }
    }

    fn current_coordinate(&self) -> Result<Coordinate, LocationError> {
        self.result.clone()
    }
}
