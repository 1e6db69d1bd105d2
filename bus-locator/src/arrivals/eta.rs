//! Arrival time estimators.
//!
//! There is no live bus telemetry, so how many minutes away a bus is
//! comes from an injected estimator. Tests use deterministic estimators;
//! the service can use the timetable hint or a simulated draw.

use rand::Rng;

use crate::domain::{BusRoute, Station};

/// Shortest estimate ever reported, in minutes.
pub const MIN_ETA_MINUTES: u32 = 1;

/// Longest estimate ever reported, in minutes.
pub const MAX_ETA_MINUTES: u32 = 30;

/// Supplies an arrival estimate for a route at a station.
pub trait EtaEstimator: Send + Sync {
    /// Minutes until `route` arrives at `station`.
    ///
    /// Callers clamp the result into `[MIN_ETA_MINUTES, MAX_ETA_MINUTES]`.
    fn estimate(&self, station: &Station, route: &BusRoute) -> u32;
}

impl<F> EtaEstimator for F
where
    F: Fn(&Station, &BusRoute) -> u32 + Send + Sync,
{
    fn estimate(&self, station: &Station, route: &BusRoute) -> u32 {
        self(station, route)
    }
}

/// Clamp an estimate into the reportable range.
pub fn clamp_eta(minutes: u32) -> u32 {
    minutes.clamp(MIN_ETA_MINUTES, MAX_ETA_MINUTES)
}

/// Always reports the same estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEta(pub u32);

impl EtaEstimator for FixedEta {
    fn estimate(&self, _station: &Station, _route: &BusRoute) -> u32 {
        self.0
    }
}

/// Simulated estimate drawn uniformly from the reportable range.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEta;

impl EtaEstimator for RandomEta {
    fn estimate(&self, _station: &Station, _route: &BusRoute) -> u32 {
        rand::rng().random_range(MIN_ETA_MINUTES..=MAX_ETA_MINUTES)
    }
}

/// Reads the minutes out of the route's timetable hint
/// ("Arrival in 10 mins"), deferring to `fallback` when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct HintEta<E> {
    fallback: E,
}

impl<E: EtaEstimator> HintEta<E> {
    pub fn new(fallback: E) -> Self {
        Self { fallback }
    }
}

impl<E: EtaEstimator> EtaEstimator for HintEta<E> {
    fn estimate(&self, station: &Station, route: &BusRoute) -> u32 {
        route
            .hinted_minutes()
            .unwrap_or_else(|| self.fallback.estimate(station, route))
    }
}
