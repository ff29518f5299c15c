use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, instrument};

use crate::state::AppState;

pub fn maps_routes() -> Router<AppState> {
    Router::new().route("/maps/api/:service", get(maps_proxy))
}

fn upstream_url(base: &str, service: &str) -> String {
    format!("{}/maps/api/{}/json", base.trim_end_matches('/'), service)
}

fn proxy_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error with Google Maps API Proxy".into(),
    )
}

/// GET /maps/api/:service
///
/// Forwards the query string plus the server-held API key to the mapping
/// provider and relays the JSON body unchanged. Upstream errors embedded in
/// a 200 payload pass through; transport failures collapse to a generic 500.
#[instrument(skip(state, params))]
pub async fn maps_proxy(
    State(state): State<AppState>,
    Path(service): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let url = upstream_url(&state.config.maps_base_url, &service);

    let response = state
        .http
        .get(&url)
        .query(&params)
        .query(&[("key", state.config.maps_api_key.as_str())])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            error!(error = %e, %service, "maps proxy request failed");
            proxy_error()
        })?;

    let body = response.json::<serde_json::Value>().await.map_err(|e| {
        error!(error = %e, %service, "maps proxy response was not JSON");
        proxy_error()
    })?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_url() {
        assert_eq!(
            upstream_url("https://maps.googleapis.com", "geocode"),
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
    }

    #[test]
    fn test_upstream_url_trailing_slash() {
        assert_eq!(
            upstream_url("http://localhost:9090/", "directions"),
            "http://localhost:9090/maps/api/directions/json"
        );
    }

    #[test]
    fn test_proxy_error_is_generic_500() {
        let (status, body) = proxy_error();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error with Google Maps API Proxy");
    }
}
