//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use tracing::{error, info, warn};

use crate::domain::{Coordinate, EngineError, StationId};
use crate::fares::FareError;
use crate::location::default_origin;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/nearby", get(nearby_stations))
        .route("/api/stations/:id/arrivals", get(station_arrivals))
        .route("/api/stations/:id/map", get(station_map_link))
        .route("/api/fares", get(fare_quote))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Stations ranked by distance from the given (or default) origin.
async fn nearby_stations(
    State(state): State<AppState>,
    query: Result<Query<NearbyRequest>, QueryRejection>,
) -> Result<Json<NearbyResponse>, AppError> {
    let Query(req) = query?;

    let origin = match (req.lat, req.lon) {
        (Some(lat), Some(lon)) => Coordinate::new(lat, lon).map_err(EngineError::from)?,
        (None, None) => default_origin(),
        _ => {
            return Err(AppError::BadRequest {
                message: "lat and lon must be given together".to_string(),
            });
        }
    };

    let limit = req
        .limit
        .unwrap_or(state.config.nearby_limit)
        .min(state.config.max_nearby_limit);

    let ranked = match req.radius_km {
        Some(radius) if !radius.is_finite() || radius < 0.0 => {
            return Err(AppError::BadRequest {
                message: format!("invalid radius: {radius} km"),
            });
        }
        Some(radius) => {
            let mut within = state.engine.locate_stations_within(origin, radius);
            within.truncate(limit);
            within
        }
        None => state.engine.locate_nearest_stations(origin, limit),
    };

    let stations = ranked.iter().map(NearbyStationResult::from).collect();

    Ok(Json(NearbyResponse {
        origin: origin.into(),
        stations,
    }))
}

/// Buses arriving at a station, with fares and arrival estimates.
async fn station_arrivals(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ArrivalsResponse>, AppError> {
    let id = StationId(id);
    let station = state
        .engine
        .station(id)
        .ok_or(EngineError::UnknownStation(id))?;

    let arrivals = state.engine.select_station(station)?;
    info!(%station, arrivals = arrivals.len(), "station selected");

    let now = Local::now().time();
    Ok(Json(ArrivalsResponse {
        station: StationResult::from(station),
        arrivals: arrivals
            .iter()
            .map(|a| ArrivalResult::from_arrival(a, now))
            .collect(),
    }))
}

/// Link that opens the device's map app at a station.
async fn station_map_link(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    query: Result<Query<MapLinkRequest>, QueryRejection>,
) -> Result<Json<MapLinkResponse>, AppError> {
    let Query(req) = query?;
    let id = StationId(id);
    let station = state
        .engine
        .station(id)
        .ok_or(EngineError::UnknownStation(id))?;

    Ok(Json(MapLinkResponse {
        url: station.map_link(req.platform),
    }))
}

/// Fare for a distance under the configured fare table.
async fn fare_quote(
    State(state): State<AppState>,
    query: Result<Query<FareRequest>, QueryRejection>,
) -> Result<Json<FareResponse>, AppError> {
    let Query(req) = query?;
    let fare = state
        .engine
        .fares()
        .fare_for(req.distance_km)
        .map_err(EngineError::from)?;

    Ok(Json(FareResponse {
        distance_km: req.distance_km,
        fare,
    }))
}

/// Application error type.
#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        let message = e.to_string();
        match e {
            EngineError::InvalidCoordinate(_) | EngineError::Fare(FareError::InvalidDistance(_)) => {
                AppError::BadRequest { message }
            }
            EngineError::UnknownStation(_) => AppError::NotFound { message },
            EngineError::UnresolvedDestination { .. } | EngineError::Fare(_) => {
                AppError::Internal { message }
            }
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrivals::FixedEta;
    use crate::catalog::Catalog;
    use crate::config::ServerConfig;
    use crate::domain::{BusRoute, MapPlatform, RouteId, Station};
    use crate::engine::Engine;
    use rust_decimal::Decimal;

    fn state() -> AppState {
        AppState::new(
            Engine::new(Catalog::rea_vaya(), FixedEta(6)),
            ServerConfig::default(),
        )
    }

    fn nearby(
        lat: Option<f64>,
        lon: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Query<NearbyRequest>, QueryRejection> {
        Ok(Query(NearbyRequest {
            lat,
            lon,
            limit,
            radius_km: None,
        }))
    }

    fn query<T: serde::de::DeserializeOwned>(uri: &str) -> Result<Query<T>, QueryRejection> {
        Query::try_from_uri(&uri.parse().unwrap())
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn nearby_defaults_to_fallback_origin() {
        let Json(resp) = nearby_stations(State(state()), nearby(None, None, None))
            .await
            .unwrap();

        assert_eq!(resp.origin.latitude, -26.2618);
        assert_eq!(resp.origin.longitude, 27.8689);
        assert_eq!(resp.stations.len(), 10);
        assert!(
            resp.stations
                .windows(2)
                .all(|w| w[0].distance_km <= w[1].distance_km)
        );
    }

    #[tokio::test]
    async fn nearby_respects_limits() {
        let Json(resp) = nearby_stations(
            State(state()),
            nearby(Some(-26.2044), Some(28.0444), Some(2)),
        )
        .await
        .unwrap();

        assert_eq!(resp.stations.len(), 2);
        assert_eq!(resp.stations[0].station.name, "Library Gardens Station");
        assert_eq!(resp.stations[0].distance_km, 0.0);
        assert_eq!(resp.stations[1].station.id, 29);

        let Json(resp) = nearby_stations(State(state()), nearby(None, None, Some(1000)))
            .await
            .unwrap();
        assert_eq!(resp.stations.len(), 29);
    }

    #[tokio::test]
    async fn nearby_rejects_bad_coordinates() {
        let err = nearby_stations(State(state()), nearby(Some(-120.0), Some(28.0), None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = nearby_stations(State(state()), nearby(Some(-26.0), None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn nearby_within_radius() {
        let Json(resp) = nearby_stations(
            State(state()),
            query("/api/stations/nearby?radius_km=5&limit=50"),
        )
        .await
        .unwrap();

        assert!(!resp.stations.is_empty());
        assert!(resp.stations.len() < 29);
        assert!(resp.stations.iter().all(|s| s.distance_km <= 5.0));

        let Json(resp) = nearby_stations(
            State(state()),
            query("/api/stations/nearby?radius_km=5&limit=1"),
        )
        .await
        .unwrap();
        assert_eq!(resp.stations.len(), 1);

        let err = nearby_stations(State(state()), query("/api/stations/nearby?radius_km=-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn malformed_query_is_bad_request() {
        let err = nearby_stations(State(state()), query("/api/stations/nearby?limit=-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = fare_quote(State(state()), query("/api/fares"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = station_map_link(State(state()), Path(1), query("/api/stations/1/map?platform=nokia"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let Json(resp) = fare_quote(State(state()), query("/api/fares?distance_km=20"))
            .await
            .unwrap();
        assert_eq!(resp.fare, Decimal::new(170, 1));
    }

    #[tokio::test]
    async fn rejection_renders_json_error() {
        let err = fare_quote(State(state()), query("/api/fares?distance_km=far"))
            .await
            .unwrap_err();
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("query string"));
    }

    #[tokio::test]
    async fn arrivals_for_known_station() {
        let Json(resp) = station_arrivals(State(state()), Path(1)).await.unwrap();

        assert_eq!(resp.station.name, "Thokoza Park Station");
        assert_eq!(resp.arrivals.len(), 6);
        assert!(resp.arrivals.iter().all(|a| a.eta_minutes == 6));
        assert_eq!(resp.arrivals[0].route, "T1");
        assert_eq!(resp.arrivals[0].destination.name, "Ellis Park East Station");
        assert_eq!(resp.arrivals[0].fare, Decimal::new(170, 1));
        assert_eq!(resp.arrivals[0].expected_at.len(), 5);
    }

    #[tokio::test]
    async fn arrivals_for_station_without_routes() {
        let Json(resp) = station_arrivals(State(state()), Path(3)).await.unwrap();
        assert!(resp.arrivals.is_empty());
    }

    #[tokio::test]
    async fn arrivals_for_unknown_station() {
        let err = station_arrivals(State(state()), Path(404)).await.unwrap_err();
        assert_eq!(
            err,
            AppError::NotFound {
                message: "unknown station 404".to_string()
            }
        );
    }

    #[tokio::test]
    async fn map_link() {
        let Json(resp) = station_map_link(
            State(state()),
            Path(19),
            Ok(Query(MapLinkRequest {
                platform: MapPlatform::Ios,
            })),
        )
        .await
        .unwrap();
        assert_eq!(resp.url, "maps:0,0?q=-26.2536,27.891");

        let err = station_map_link(State(state()), Path(0), Ok(Query(MapLinkRequest::default())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn fare_quotes() {
        let Json(resp) = fare_quote(State(state()), Ok(Query(FareRequest { distance_km: 5.1 })))
            .await
            .unwrap();
        assert_eq!(resp.fare, Decimal::new(125, 1));

        let err = fare_quote(State(state()), Ok(Query(FareRequest { distance_km: -1.0 })))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn error_mapping() {
        let unresolved = EngineError::UnresolvedDestination {
            route: RouteId(1),
            destination: "Nowhere".into(),
        };
        assert!(matches!(AppError::from(unresolved), AppError::Internal { .. }));

        let table = EngineError::Fare(FareError::InvalidTable("no bands"));
        assert!(matches!(AppError::from(table), AppError::Internal { .. }));
    }

    #[test]
    fn error_status_codes() {
        let resp = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::Internal {
            message: "boom".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn route_back_to_boarding_station() {
        let catalog = Catalog::new(
            vec![Station::new(
                StationId(1),
                "A",
                Coordinate::new(-26.0, 28.0).unwrap(),
            )],
            vec![BusRoute::new(RouteId(1), "X", "A", StationId(1), "")],
        )
        .unwrap();
        let engine = Engine::new(catalog, FixedEta(1));
        let state = AppState::new(engine, ServerConfig::default());

        let Json(resp) = station_arrivals(State(state), Path(1)).await.unwrap();
        assert_eq!(resp.arrivals.len(), 1);
        assert_eq!(resp.arrivals[0].distance_km, 0.0);
    }
}
