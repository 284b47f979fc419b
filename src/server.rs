//! HTTP surface for the summarization service.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::service::SummarizationService;

pub const SUMMARIZATION_FAILED: &str = "Summarization failed";
pub const INVALID_REQUEST: &str = "Invalid request";

/// Body of `POST /summarize`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizeRequest {
    pub url: String,
    #[serde(default)]
    pub max_words: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// Error returned from a handler, rendered as an [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, error: &str, details: String) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.to_string(),
                details,
            },
        }
    }
}

impl From<crate::Error> for ApiError {
    fn from(e: crate::Error) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, SUMMARIZATION_FAILED, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, INVALID_REQUEST, e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn router(service: SummarizationService) -> Router {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .with_state(service)
}

/// Bind to `addr` and serve until the process is stopped
pub async fn serve(addr: &str, service: SummarizationService) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(service)).await
}

async fn summarize(
    State(service): State<SummarizationService>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(req) = payload.inspect_err(|e| warn!("Rejected request body: {e}"))?;

    let summary = service
        .summarize(&req.url, req.max_words)
        .await
        .inspect_err(|e| warn!("Summarization of {} failed: {e}", req.url))?;

    Ok(Json(SummaryResponse { summary }))
}

async fn health() -> &'static str {
    "ok"
}
