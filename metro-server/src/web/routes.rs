//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::planner::PlanError;
use crate::stats::NetworkStats;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/network", get(network))
        .route("/api/stats", get(stats))
        .route("/api/route", get(plan_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with route form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate::from_network(&state.network, &state.stats)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    query: Result<Query<StationSearchRequest>, QueryRejection>,
) -> Result<Json<StationSearchResponse>, AppError> {
    let Query(req) = query.map_err(|e| AppError::from_query(e, false))?;
    let stations = state
        .planner()
        .search_stations(&req.q, req.limit)
        .into_iter()
        .map(StationResult::from_station)
        .collect();

    Ok(Json(StationSearchResponse { stations }))
}

/// The whole network, for map rendering.
async fn network(State(state): State<AppState>) -> Json<NetworkResponse> {
    Json(NetworkResponse::from_network(&state.network))
}

/// Network statistics.
async fn stats(State(state): State<AppState>) -> Json<NetworkStats> {
    Json(state.stats.as_ref().clone())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<RouteRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);
    let Query(req) = query.map_err(|e| AppError::from_query(e, html))?;

    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "both from and to stations are required".to_string(),
            html,
        });
    }

    let itinerary = state
        .planner()
        .plan(&req.from, &req.to)
        .map_err(|e| AppError::from_plan(e, html))?;

    info!(
        from = %req.from.trim(),
        to = %req.to.trim(),
        hops = itinerary.hops,
        "route planned"
    );

    // Return HTML or JSON based on Accept header
    if html {
        let template = RouteTemplate {
            route: RouteView::from_itinerary(&itinerary, &state.network),
        };
        let body = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(body).into_response())
    } else {
        Ok(Json(ItineraryResult::from_itinerary(&itinerary, &state.network)).into_response())
    }
}

/// Application error type.
///
/// Client errors remember whether the caller wanted HTML so they can be
/// shown as an error page instead of JSON.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String, html: bool },
    NotFound { message: String, html: bool },
    Internal { message: String },
}

impl AppError {
    /// A query string that does not deserialize is a bad request.
    fn from_query(e: QueryRejection, html: bool) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
            html,
        }
    }

    fn from_plan(e: PlanError, html: bool) -> Self {
        match e {
            PlanError::StationNotFound(_) | PlanError::NoRoute { .. } => AppError::NotFound {
                message: e.to_string(),
                html,
            },
            PlanError::EmptyRoute | PlanError::NotConnected { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, html) = match self {
            AppError::BadRequest { message, html } => (StatusCode::BAD_REQUEST, message, html),
            AppError::NotFound { message, html } => (StatusCode::NOT_FOUND, message, html),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, false),
        };

        warn!(status = %status, error = %message, "request failed");

        if html {
            let page = ErrorTemplate {
                title: status
                    .canonical_reason()
                    .unwrap_or("Error")
                    .to_string(),
                message: message.clone(),
            };
            if let Ok(body) = page.render() {
                return (status, Html(body)).into_response();
            }
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::{HeaderValue, Uri};

    use super::*;
    use crate::lines::ankara;
    use crate::network::Network;
    use crate::planner::PlannerConfig;

    fn state() -> AppState {
        AppState::new(
            Network::from_lines(&ankara()).unwrap(),
            PlannerConfig::default(),
        )
    }

    fn route_request(from: &str, to: &str) -> Result<Query<RouteRequest>, QueryRejection> {
        Ok(Query(RouteRequest {
            from: from.to_string(),
            to: to.to_string(),
        }))
    }

    /// Run the query extractor over a request URI.
    fn query<T: serde::de::DeserializeOwned>(uri: &str) -> Result<Query<T>, QueryRejection> {
        Query::try_from_uri(&uri.parse::<Uri>().unwrap())
    }

    fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers
    }

    fn expect_err(result: Result<Response, AppError>) -> AppError {
        match result {
            Ok(response) => panic!("expected an error, got {}", response.status()),
            Err(e) => e,
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn accepts_html_detection() {
        assert!(accepts_html(&html_headers()));
        assert!(!accepts_html(&HeaderMap::new()));

        let mut json = HeaderMap::new();
        json.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(!accepts_html(&json));
    }

    #[tokio::test]
    async fn plan_route_json() {
        let response = plan_route(
            State(state()),
            HeaderMap::new(),
            route_request("AŞTİ", "KORU"),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["hops"], 18);
        assert_eq!(json["transfers"], 1);
        assert_eq!(json["instructions"][1]["text"], "Transfer at KIZILAY to M2 line");
    }

    #[tokio::test]
    async fn plan_route_html() {
        let response = plan_route(
            State(state()),
            html_headers(),
            route_request("KIZILAY", "OSTİM"),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Transfer at HASTANE to M3 line"));
        assert!(body.contains("10 stops, 1 change"));
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let err = expect_err(
            plan_route(
                State(state()),
                HeaderMap::new(),
                route_request("KIZILAY", "ATLANTIS"),
            )
            .await,
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"], "station not found: ATLANTIS");
    }

    #[tokio::test]
    async fn unknown_station_html_page() {
        let err = expect_err(
            plan_route(
                State(state()),
                html_headers(),
                route_request("ATLANTIS", "KIZILAY"),
            )
            .await,
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("station not found: ATLANTIS"));
    }

    #[tokio::test]
    async fn blank_station_is_bad_request() {
        let err = expect_err(
            plan_route(State(state()), HeaderMap::new(), route_request(" ", "ULUS")).await,
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_endpoint() {
        let Json(response) = search_stations(
            State(state()),
            query("/api/stations/search?q=eryaman"),
        )
        .await
        .unwrap();

        let names: Vec<_> = response.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ERYAMAN 1-2", "ERYAMAN 5"]);
    }

    #[tokio::test]
    async fn network_endpoint() {
        let Json(response) = network(State(state())).await;
        assert_eq!(response.stations.len(), 52);
        assert_eq!(response.connections.len(), 51);
    }

    #[tokio::test]
    async fn missing_route_parameter_is_json_bad_request() {
        let err = expect_err(
            plan_route(
                State(state()),
                HeaderMap::new(),
                query("/api/route?from=ULUS"),
            )
            .await,
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["error"].as_str().unwrap().contains("missing field `to`"));
    }

    #[tokio::test]
    async fn missing_route_parameter_html_page() {
        let err = expect_err(
            plan_route(
                State(state()),
                html_headers(),
                query("/api/route?to=ULUS"),
            )
            .await,
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains("missing field"));
    }

    #[tokio::test]
    async fn malformed_search_limit_is_json_bad_request() {
        let result = search_stations(State(state()), query("/api/stations/search?q=a&limit=x")).await;
        let Err(err) = result else {
            panic!("expected an error");
        };

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn stats_endpoint_uses_startup_stats() {
        let state = state();
        let Json(response) = stats(State(state.clone())).await;
        assert_eq!(response, *state.stats);
        assert_eq!(response.stations, 52);
    }

    #[test]
    fn plan_error_status_mapping() {
        let not_found = AppError::from_plan(PlanError::StationNotFound("X".into()), false);
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let internal = AppError::from_plan(PlanError::EmptyRoute, false);
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
