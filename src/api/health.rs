//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Number of equipment records, None when the store is unreachable
    pub equipos: Option<i64>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<crate::AppState>) -> Json<HealthResponse> {
    let equipos = match state.services.equipment.count().await {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!("Health check could not reach the store: {}", e);
            None
        }
    };

    Json(HealthResponse {
        status: if equipos.is_some() { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        equipos,
    })
}
