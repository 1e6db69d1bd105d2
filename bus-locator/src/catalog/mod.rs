//! Station and route catalogs.
//!
//! A catalog is loaded once at startup, validated, and then treated as
//! immutable. Validation pins every route's destination to a station id,
//! so later lookups never depend on (possibly duplicated) station names.

mod error;
mod file;
mod rea_vaya;

use std::collections::{HashMap, HashSet};

use crate::arrivals::resolve_destination;
use crate::domain::{BusRoute, EngineError, Station, StationId};
use crate::fares::FareTable;

pub use error::CatalogError;
pub use file::CatalogFile;

/// Validated station catalog, route catalog and fare table.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    stations: Vec<Station>,
    routes: Vec<BusRoute>,
    fares: FareTable,
    /// Map from station id -> index into `stations`.
    index: HashMap<StationId, usize>,
}

impl Catalog {
    /// Validate stations and routes into a catalog using the standard fares.
    ///
    /// Checks that station and route ids are unique, station names are
    /// non-empty, every route boards at a known station, and every
    /// destination resolves. A route that already names a `destination_id`
    /// must agree with that station's name.
    pub fn new(stations: Vec<Station>, routes: Vec<BusRoute>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if station.name.trim().is_empty() {
                return Err(CatalogError::EmptyStationName(station.id));
            }
            if index.insert(station.id, i).is_some() {
                return Err(CatalogError::DuplicateStation(station.id));
            }
        }

        let mut route_ids = HashSet::with_capacity(routes.len());
        let mut pinned = Vec::with_capacity(routes.len());
        for route in routes {
            if !route_ids.insert(route.id) {
                return Err(CatalogError::DuplicateRoute(route.id));
            }
            if !index.contains_key(&route.origin_station_id) {
                return Err(CatalogError::UnknownOrigin {
                    route: route.id,
                    station: route.origin_station_id,
                });
            }

            let destination = resolve_destination(&route, &stations).map_err(|_| {
                CatalogError::UnresolvedDestination {
                    route: route.id,
                    destination: route.destination_name.clone(),
                }
            })?;
            let destination_id = destination.id;
            pinned.push(route.with_destination_id(destination_id));
        }

        Ok(Self {
            stations,
            routes: pinned,
            fares: FareTable::standard(),
            index,
        })
    }

    /// Replace the fare table.
    pub fn with_fares(mut self, fares: FareTable) -> Self {
        self.fares = fares;
        self
    }

    /// Stations in catalog order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Routes in catalog order, each with a pinned destination id.
    pub fn routes(&self) -> &[BusRoute] {
        &self.routes
    }

    pub fn fares(&self) -> &FareTable {
        &self.fares
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.index.get(&id).map(|&i| &self.stations[i])
    }

    /// Look up a station by id, failing with `UnknownStation`.
    pub fn require_station(&self, id: StationId) -> Result<&Station, EngineError> {
        self.station(id).ok_or(EngineError::UnknownStation(id))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the catalog has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
