/// Health check endpoint
///
/// Liveness check: answers `OK` whenever the process is up. Store
/// reachability is reported alongside but never changes the status.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "message": "Server is running",
///   "version": "0.1.0",
///   "database": "connected"
/// }
/// ```

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest the health check waits on the store before reporting it disconnected
const STORE_PING_TIMEOUT: Duration = Duration::from_secs(1);

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `OK`
    pub status: String,

    pub message: String,

    /// Application version
    pub version: String,

    /// `connected` or `disconnected`
    pub database: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachable = tokio::time::timeout(STORE_PING_TIMEOUT, state.employees.store_reachable())
        .await
        .unwrap_or_else(|_| {
            tracing::warn!("Store ping timed out after {:?}", STORE_PING_TIMEOUT);
            false
        });

    let database = if reachable { "connected" } else { "disconnected" };

    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
