// file: src/server.rs
// description: HTTP surface exposing the search contract to the UI layer
// reference: https://docs.rs/axum

use crate::engine::SearchEngine;
use crate::error::{Result, SearchError};
use crate::service::{SearchRequest, SearchService};
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Build the API router. Routes:
/// - `POST /api/search` — `{query, limit?, page?}` in, `{results, totalResults}` out
/// - `GET /health` — engine reachability
pub fn router<E: SearchEngine + 'static>(service: Arc<SearchService<E>>) -> Router {
    Router::new()
        .route("/api/search", post(handle_search::<E>))
        .route("/health", get(handle_health::<E>))
        .with_state(service)
}

/// Bind and serve until shutdown.
pub async fn serve<E: SearchEngine + 'static>(service: SearchService<E>, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Search API listening on {}", bind);

    axum::serve(listener, router(Arc::new(service)))
        .await
        .map_err(SearchError::Io)
}

/// Failures are surfaced as one generic error toward the caller; the detail
/// is logged server-side only. A failed engine call is never reported as an
/// empty result set.
async fn handle_search<E: SearchEngine + 'static>(
    State(service): State<Arc<SearchService<E>>>,
    Json(request): Json<SearchRequest>,
) -> Response {
    match service.search(&request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Search failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Search failed"})),
            )
                .into_response()
        }
    }
}

async fn handle_health<E: SearchEngine + 'static>(
    State(service): State<Arc<SearchService<E>>>,
) -> Response {
    match service.health().await {
        Ok(true) => (StatusCode::OK, Json(json!({"status": "ok"}))).into_response(),
        Ok(false) | Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "unavailable"})),
        )
            .into_response(),
    }
}
