//! Station ranking by distance from an origin.
//!
//! Ranks every station in a catalog by straight-line distance so the
//! closest stations are presented first.

use serde::Serialize;

use crate::domain::{Coordinate, Station};
use crate::geo::{distance_km, round_km};

/// A station paired with its distance from the ranking origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStation {
    pub station: Station,

    /// Full-precision distance in kilometres.
    pub distance_km: f64,
}

impl RankedStation {
    /// Distance rounded to 2 decimal places, for display.
    pub fn display_distance_km(&self) -> f64 {
        round_km(self.distance_km)
    }
}

/// Rank stations by distance from `origin`.
///
/// Stations are sorted nearest-first. The sort is stable, so stations at
/// equal distance keep their catalog order. The catalog is not modified.
pub fn rank_stations(origin: Coordinate, catalog: &[Station]) -> Vec<RankedStation> {
    let mut ranked: Vec<RankedStation> = catalog
        .iter()
        .map(|station| RankedStation {
            station: station.clone(),
            distance_km: distance_km(origin, station.location),
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    ranked
}

/// The `limit` stations nearest to `origin`.
pub fn nearest_stations(origin: Coordinate, catalog: &[Station], limit: usize) -> Vec<RankedStation> {
    let mut ranked = rank_stations(origin, catalog);
    ranked.truncate(limit);
    ranked
}

/// Stations within `radius_km` of `origin`, nearest first.
pub fn stations_within(origin: Coordinate, catalog: &[Station], radius_km: f64) -> Vec<RankedStation> {
    rank_stations(origin, catalog)
        .into_iter()
        .take_while(|r| r.distance_km <= radius_km)
        .collect()
}
