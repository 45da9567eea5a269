// Handlers module
// HTTP handlers for the REST API

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Body returned by `GET /v1/health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: u16,
    pub timestamp: String,
}

/// Health check handler
/// GET /v1/health
pub async fn health_check() -> impl IntoResponse {
    let response = HealthCheckResponse {
        status: StatusCode::OK.as_u16(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    info!("Health check accessed at {}", response.timestamp);
    (StatusCode::OK, Json(response))
}
