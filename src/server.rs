//! HTTP serving boundary.
//!
//! # Routes
//!
//! - `GET /?urls=a,b,c` - Analyze up to `urls_limit` articles; returns a JSON
//!   array of `{url, status, score, word_count}`
//! - `GET /health` - Liveness probe
//!
//! Individual article failures never fail the request; they come back as
//! results with a non-OK status. Only malformed requests (400) and fatal
//! batch faults (500) produce an `{"error": "..."}` body.

use crate::config::Timeouts;
use crate::error::{Error, Result};
use crate::models::Batch;
use crate::pipeline::Analyzer;
use crate::utils::split_urls;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub timeouts: Timeouts,
    pub urls_limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    urls: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(analyze))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
#[instrument(level = "info", skip_all, fields(%addr))]
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        urls_limit = state.urls_limit,
        connection_timeout = ?state.timeouts.connection,
        analysis_timeout = ?state.timeouts.analysis,
        "Listening"
    );
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

async fn analyze(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<Batch>> {
    let urls = split_urls(query.urls.as_deref().unwrap_or_default());
    if urls.is_empty() {
        return Err(Error::MissingUrls);
    }
    if urls.len() > state.urls_limit {
        warn!(count = urls.len(), limit = state.urls_limit, "Rejected request with too many urls");
        return Err(Error::TooManyUrls {
            limit: state.urls_limit,
        });
    }

    match state.analyzer.process(&urls, state.timeouts).await {
        Ok(batch) => Ok(Json(batch)),
        Err(e) => {
            error!(error = %e, "Batch failed");
            Err(e)
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
