//! Great-circle distance between coordinates.
//!
//! Uses the spherical law of cosines, converting the central angle to
//! statute miles (60 nautical miles per degree, 1.1515 statute miles per
//! nautical mile) and then to kilometres.

use crate::domain::{Coordinate, InvalidCoordinate};

/// Statute miles per nautical mile.
const MILES_PER_NAUTICAL_MILE: f64 = 1.1515;

/// Kilometres per statute mile.
const KM_PER_MILE: f64 = 1.609344;

/// Distance between two coordinates in kilometres, at full precision.
///
/// # Examples
///
/// ```
/// use bus_locator::domain::Coordinate;
/// use bus_locator::geo::distance_km;
///
/// let a = Coordinate::new(-26.2044, 28.0444).unwrap();
/// assert_eq!(distance_km(a, a), 0.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let delta_lon = (a.longitude() - b.longitude()).to_radians();

    // Rounding can push this just past 1.0 for nearly identical points
    let cos_angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos())
        .clamp(-1.0, 1.0);

    let angle_deg = cos_angle.acos().to_degrees();
    angle_deg * 60.0 * MILES_PER_NAUTICAL_MILE * KM_PER_MILE
}

/// Distance between two raw latitude/longitude pairs.
///
/// Fails if any value is outside its valid range.
pub fn distance_between(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<f64, InvalidCoordinate> {
    let a = Coordinate::new(lat1, lon1)?;
    let b = Coordinate::new(lat2, lon2)?;
    Ok(distance_km(a, b))
}

/// Round a distance to 2 decimal places for display.
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
