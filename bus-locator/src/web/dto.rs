//! Data transfer objects for web requests and responses.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arrivals::Arrival;
use crate::domain::{Coordinate, MapPlatform, Station};
use crate::geo::round_km;
use crate::ranking::RankedStation;

/// Request for stations near a location.
#[derive(Debug, Default, Deserialize)]
pub struct NearbyRequest {
    /// Latitude of the origin (defaults to the fallback origin)
    pub lat: Option<f64>,

    /// Longitude of the origin (defaults to the fallback origin)
    pub lon: Option<f64>,

    /// Maximum number of stations to return
    pub limit: Option<usize>,

    /// Only return stations within this distance (km)
    pub radius_km: Option<f64>,
}

/// A point in responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateResult {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for CoordinateResult {
    fn from(c: Coordinate) -> Self {
        Self {
            latitude: c.latitude(),
            longitude: c.longitude(),
        }
    }
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResult {
    pub id: u32,
    pub name: String,
    pub location: CoordinateResult,
}

impl From<&Station> for StationResult {
    fn from(s: &Station) -> Self {
        Self {
            id: s.id.get(),
            name: s.name.clone(),
            location: s.location.into(),
        }
    }
}

/// A ranked station in a nearby listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyStationResult {
    #[serde(flatten)]
    pub station: StationResult,

    /// Distance from the origin, rounded to 2 decimal places
    pub distance_km: f64,
}

impl From<&RankedStation> for NearbyStationResult {
    fn from(r: &RankedStation) -> Self {
        Self {
            station: StationResult::from(&r.station),
            distance_km: r.display_distance_km(),
        }
    }
}

/// Response for a nearby listing.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    /// Origin the stations were ranked from
    pub origin: CoordinateResult,

    /// Stations, nearest first
    pub stations: Vec<NearbyStationResult>,
}

/// A bus arriving at the selected station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrivalResult {
    pub route_id: u32,

    /// Route label (e.g. "T1")
    pub route: String,

    pub destination: StationResult,

    /// Distance to the destination, rounded to 2 decimal places
    pub distance_km: f64,

    pub fare: Decimal,

    /// Minutes until arrival
    pub eta_minutes: u32,

    /// Wall-clock arrival time (HH:MM)
    pub expected_at: String,
}

impl ArrivalResult {
    /// Build from an arrival, stamping `expected_at` relative to `now`.
    pub fn from_arrival(arrival: &Arrival, now: NaiveTime) -> Self {
        let (expected, _) =
            now.overflowing_add_signed(chrono::Duration::minutes(i64::from(arrival.eta_minutes)));

        Self {
            route_id: arrival.route.id.0,
            route: arrival.route.route_label.clone(),
            destination: StationResult::from(&arrival.destination),
            distance_km: round_km(arrival.distance_km),
            fare: arrival.fare,
            eta_minutes: arrival.eta_minutes,
            expected_at: expected.format("%H:%M").to_string(),
        }
    }
}

/// Response for a station's arrivals.
#[derive(Debug, Serialize)]
pub struct ArrivalsResponse {
    pub station: StationResult,
    pub arrivals: Vec<ArrivalResult>,
}

/// Request for a fare quote.
#[derive(Debug, Deserialize)]
pub struct FareRequest {
    pub distance_km: f64,
}

/// Response for a fare quote.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    pub distance_km: f64,
    pub fare: Decimal,
}

/// Request for a map link.
#[derive(Debug, Default, Deserialize)]
pub struct MapLinkRequest {
    #[serde(default)]
    pub platform: MapPlatform,
}

/// Response for a map link.
#[derive(Debug, Serialize)]
pub struct MapLinkResponse {
    pub url: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusRoute, RouteId, StationId};

    fn station(id: u32, name: &str) -> Station {
        Station::new(StationId(id), name, Coordinate::new(-26.25, 27.9).unwrap())
    }

    #[test]
    fn nearby_station_flattens() {
        let ranked = RankedStation {
            station: station(19, "Mofolo"),
            distance_km: 2.456_7,
        };
        let json = serde_json::to_value(NearbyStationResult::from(&ranked)).unwrap();

        assert_eq!(json["id"], 19);
        assert_eq!(json["name"], "Mofolo");
        assert_eq!(json["location"]["latitude"], -26.25);
        assert_eq!(json["distance_km"], 2.46);
    }

    #[test]
    fn arrival_expected_at() {
        let arrival = Arrival {
            route: BusRoute::new(RouteId(4), "T2", "B", StationId(1), ""),
            destination: station(2, "B"),
            distance_km: 3.141_59,
            fare: Decimal::new(100, 1),
            eta_minutes: 25,
        };

        let now = NaiveTime::from_hms_opt(23, 50, 0).unwrap();
        let result = ArrivalResult::from_arrival(&arrival, now);

        assert_eq!(result.route, "T2");
        assert_eq!(result.route_id, 4);
        assert_eq!(result.distance_km, 3.14);
        assert_eq!(result.expected_at, "00:15");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fare"], "10.0");
    }
}
