//! Buses serving a selected station, with fares and arrival estimates.
//!
//! Given a station, finds every route that boards there, resolves each
//! route's destination in the station catalog, and prices the trip from
//! the straight-line distance using the fare table.

mod eta;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::domain::{BusRoute, EngineError, Station};
use crate::fares::FareTable;
use crate::geo::distance_km;

pub use eta::{EtaEstimator, FixedEta, HintEta, MAX_ETA_MINUTES, MIN_ETA_MINUTES, RandomEta, clamp_eta};

/// A bus arriving at the selected station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrival {
    pub route: BusRoute,

    /// Resolved destination station.
    pub destination: Station,

    /// Distance from the selected station to the destination (km).
    pub distance_km: f64,

    pub fare: Decimal,

    /// Minutes until the bus arrives, within `[1, 30]`.
    pub eta_minutes: u32,
}

/// Resolve a route's destination station.
///
/// A pinned `destination_id` wins; otherwise the first station whose name
/// matches exactly, in catalog order. A pinned station must carry the
/// route's destination name.
pub fn resolve_destination<'a>(
    route: &BusRoute,
    station_catalog: &'a [Station],
) -> Result<&'a Station, EngineError> {
    let found = match route.destination_id {
        Some(id) => station_catalog
            .iter()
            .find(|s| s.id == id)
            .filter(|s| s.name == route.destination_name),
        None => station_catalog
            .iter()
            .find(|s| s.name == route.destination_name),
    };

    found.ok_or_else(|| EngineError::UnresolvedDestination {
        route: route.id,
        destination: route.destination_name.clone(),
    })
}

/// Arrivals at `station`, in bus catalog order.
///
/// Fails on the first route whose destination is missing from the station
/// catalog. A station with no routes yields an empty list.
pub fn arrivals_for_station(
    station: &Station,
    bus_catalog: &[BusRoute],
    station_catalog: &[Station],
    fares: &FareTable,
    estimator: &dyn EtaEstimator,
) -> Result<Vec<Arrival>, EngineError> {
    bus_catalog
        .iter()
        .filter(|route| route.origin_station_id == station.id)
        .map(|route| -> Result<Arrival, EngineError> {
            let destination = resolve_destination(route, station_catalog).inspect_err(|e| {
                warn!(station = %station, error = %e, "failed to resolve destination");
            })?;

            let distance = distance_km(station.location, destination.location);
            let fare = fares.fare_for(distance)?;

            Ok(Arrival {
                route: route.clone(),
                destination: destination.clone(),
                distance_km: distance,
                fare,
                eta_minutes: clamp_eta(estimator.estimate(station, route)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{Coordinate, RouteId, StationId};

    fn station(id: u32, name: &str, lat: f64, lon: f64) -> Station {
        Station::new(StationId(id), name, Coordinate::new(lat, lon).unwrap())
    }

    fn route(id: u32, label: &str, dest: &str, origin: u32) -> BusRoute {
        BusRoute::new(RouteId(id), label, dest, StationId(origin), "")
    }

    fn stations() -> Vec<Station> {
        vec![
            station(1, "Thokoza Park Station", -26.2557, 27.908),
            station(2, "Ellis Park East Station", -26.1973, 28.0603),
            station(3, "Carlton Station", -26.1974, 28.0567),
            station(4, "Quiet Stop", -26.25, 27.9),
        ]
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn no_routes_is_empty() {
        let stations = stations();
        let routes = vec![route(1, "T1", "Carlton Station", 1)];

        let arrivals = arrivals_for_station(
            &stations[3],
            &routes,
            &stations,
            &FareTable::standard(),
            &FixedEta(5),
        )
        .unwrap();
        assert!(arrivals.is_empty());
    }

    #[test]
    fn filters_by_origin_and_keeps_order() {
        let stations = stations();
        let routes = vec![
            route(1, "T1", "Ellis Park East Station", 1),
            route(2, "T1", "Thokoza Park Station", 2),
            route(3, "XT1", "Carlton Station", 1),
        ];

        let arrivals = arrivals_for_station(
            &stations[0],
            &routes,
            &stations,
            &FareTable::standard(),
            &FixedEta(12),
        )
        .unwrap();

        let ids: Vec<_> = arrivals.iter().map(|a| a.route.id).collect();
        assert_eq!(ids, vec![RouteId(1), RouteId(3)]);
        assert!(arrivals.iter().all(|a| a.eta_minutes == 12));
        assert_eq!(arrivals[0].destination.id, StationId(2));
    }

    #[test]
    fn fare_from_distance_to_destination() {
        let stations = stations();
        let routes = vec![route(1, "T1", "Ellis Park East Station", 1)];

        let arrivals = arrivals_for_station(
            &stations[0],
            &routes,
            &stations,
            &FareTable::standard(),
            &FixedEta(1),
        )
        .unwrap();

        // Thokoza Park to Ellis Park East is roughly 17 km
        let a = &arrivals[0];
        assert!(a.distance_km > 15.0 && a.distance_km <= 25.0, "got {}", a.distance_km);
        assert_eq!(a.fare, dec("17.0"));
    }

    #[test]
    fn unresolved_destination_fails() {
        let stations = stations();
        let routes = vec![
            route(1, "T1", "Carlton Station", 1),
            route(2, "T9", "Atlantis", 1),
        ];

        let err = arrivals_for_station(
            &stations[0],
            &routes,
            &stations,
            &FareTable::standard(),
            &FixedEta(1),
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::UnresolvedDestination {
                route: RouteId(2),
                destination: "Atlantis".into(),
            }
        );
    }

    #[test]
    fn unresolved_destination_on_other_station_is_ignored() {
        let stations = stations();
        let routes = vec![
            route(1, "T1", "Carlton Station", 1),
            route(2, "T9", "Atlantis", 2),
        ];

        let arrivals = arrivals_for_station(
            &stations[0],
            &routes,
            &stations,
            &FareTable::standard(),
            &FixedEta(1),
        )
        .unwrap();
        assert_eq!(arrivals.len(), 1);
    }

    #[test]
    fn eta_is_clamped() {
        let stations = stations();
        let routes = vec![route(1, "T1", "Carlton Station", 1)];
        let table = FareTable::standard();

        let low = arrivals_for_station(&stations[0], &routes, &stations, &table, &FixedEta(0)).unwrap();
        assert_eq!(low[0].eta_minutes, 1);

        let high = arrivals_for_station(&stations[0], &routes, &stations, &table, &FixedEta(90)).unwrap();
        assert_eq!(high[0].eta_minutes, 30);
    }

    #[test]
    fn estimator_sees_station_and_route() {
        let stations = stations();
        let routes = vec![
            route(7, "T2", "Carlton Station", 1),
            route(8, "T3", "Ellis Park East Station", 1),
        ];
        let by_route = |s: &Station, r: &BusRoute| s.id.0 + r.id.0;

        let arrivals =
            arrivals_for_station(&stations[0], &routes, &stations, &FareTable::standard(), &by_route)
                .unwrap();
        assert_eq!(arrivals[0].eta_minutes, 8);
        assert_eq!(arrivals[1].eta_minutes, 9);
    }

    #[test]
    fn destination_id_wins_over_name() {
        let stations = vec![
            station(5, "Library Gardens Station", -26.2044, 28.0444),
            station(29, "Library Gardens Station", -26.3, 28.1),
            station(1, "Origin", -26.2, 28.0),
        ];

        let by_name = route(1, "T3", "Library Gardens Station", 1);
        assert_eq!(resolve_destination(&by_name, &stations).unwrap().id, StationId(5));

        let pinned = by_name.clone().with_destination_id(StationId(29));
        assert_eq!(resolve_destination(&pinned, &stations).unwrap().id, StationId(29));

        let dangling = by_name.with_destination_id(StationId(404));
        assert!(resolve_destination(&dangling, &stations).is_err());
    }

    #[test]
    fn pinned_station_must_match_name() {
        let stations = stations();
        let mislabelled = route(1, "T9", "Atlantis", 1).with_destination_id(StationId(2));

        assert_eq!(
            resolve_destination(&mislabelled, &stations),
            Err(EngineError::UnresolvedDestination {
                route: RouteId(1),
                destination: "Atlantis".into(),
            })
        );
    }

    #[test]
    fn rea_vaya_thokoza_park() {
        let catalog = Catalog::rea_vaya();
        let thokoza = catalog.station(StationId(1)).unwrap();

        let arrivals = arrivals_for_station(
            thokoza,
            catalog.routes(),
            catalog.stations(),
            &FareTable::standard(),
            &HintEta::new(FixedEta(15)),
        )
        .unwrap();

        let labels: Vec<_> = arrivals.iter().map(|a| a.route.route_label.as_str()).collect();
        assert_eq!(labels, vec!["T1", "XT1", "T2", "T3", "T3 Express", "T2"]);
        assert_eq!(arrivals[0].eta_minutes, 10);
        assert!(arrivals.iter().all(|a| a.fare >= dec("10")));
    }
}
