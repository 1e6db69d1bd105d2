//! Ranking and fare engine.
//!
//! Composes distance ranking, arrivals resolution and fare lookup over an
//! immutable catalog supplied at construction time. The engine holds no
//! mutable state; to change catalogs, build a new engine.

use rust_decimal::Decimal;
use tracing::debug;

use crate::arrivals::{Arrival, EtaEstimator, arrivals_for_station};
use crate::catalog::Catalog;
use crate::domain::{Coordinate, EngineError, Station, StationId};
use crate::fares::FareTable;
use crate::geo::distance_km;
use crate::ranking::{RankedStation, nearest_stations, rank_stations, stations_within};

/// Station locator and fare estimator over a fixed catalog.
pub struct Engine {
    catalog: Catalog,
    estimator: Box<dyn EtaEstimator>,
}

impl Engine {
    /// Create an engine over `catalog` using `estimator` for arrival times.
    pub fn new(catalog: Catalog, estimator: impl EtaEstimator + 'static) -> Self {
        Self {
            catalog,
            estimator: Box::new(estimator),
        }
    }

    /// Create an engine with a different fare table.
    pub fn with_fares(
        catalog: Catalog,
        fares: FareTable,
        estimator: impl EtaEstimator + 'static,
    ) -> Self {
        Self::new(catalog.with_fares(fares), estimator)
    }

    /// All stations ranked nearest-first from `origin`.
    pub fn locate_nearby_stations(&self, origin: Coordinate) -> Vec<RankedStation> {
        let ranked = rank_stations(origin, self.catalog.stations());
        log_ranking(origin, &ranked);
        ranked
    }

    /// The `limit` stations nearest to `origin`.
    pub fn locate_nearest_stations(&self, origin: Coordinate, limit: usize) -> Vec<RankedStation> {
        let ranked = nearest_stations(origin, self.catalog.stations(), limit);
        log_ranking(origin, &ranked);
        ranked
    }

    /// Stations within `radius_km` of `origin`, nearest first.
    pub fn locate_stations_within(&self, origin: Coordinate, radius_km: f64) -> Vec<RankedStation> {
        let ranked = stations_within(origin, self.catalog.stations(), radius_km);
        log_ranking(origin, &ranked);
        ranked
    }

    /// Buses boarding at `station`, with fares and arrival estimates.
    pub fn select_station(&self, station: &Station) -> Result<Vec<Arrival>, EngineError> {
        let arrivals = arrivals_for_station(
            station,
            self.catalog.routes(),
            self.catalog.stations(),
            self.catalog.fares(),
            self.estimator.as_ref(),
        )?;
        debug!(%station, arrivals = arrivals.len(), "resolved arrivals");
        Ok(arrivals)
    }

    /// Like [`Engine::select_station`], looking the station up by id.
    pub fn select_station_by_id(&self, id: StationId) -> Result<Vec<Arrival>, EngineError> {
        let station = self.catalog.require_station(id)?;
        self.select_station(station)
    }

    /// Fare between two catalog stations.
    pub fn quote_fare(&self, from: StationId, to: StationId) -> Result<Decimal, EngineError> {
        let from = self.catalog.require_station(from)?;
        let to = self.catalog.require_station(to)?;
        let fare = self
            .catalog
            .fares()
            .fare_for(distance_km(from.location, to.location))?;
        Ok(fare)
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.catalog.station(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn fares(&self) -> &FareTable {
        self.catalog.fares()
    }
}

fn log_ranking(origin: Coordinate, ranked: &[RankedStation]) {
    debug!(
        %origin,
        stations = ranked.len(),
        nearest = ranked.first().map(|r| r.station.name.as_str()),
        "ranked stations"
    );
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("stations", &self.catalog.len())
            .field("routes", &self.catalog.routes().len())
            .finish_non_exhaustive()
    }
}
