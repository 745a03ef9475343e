//! Storefront JSON API Health Handlers

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extensions::*;

/// Liveness response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LivenessResponse {
    /// Always `success`
    pub status: String,
    pub message: String,

    /// RFC 3339 server time
    pub timestamp: String,

    /// Deployment environment name
    pub environment: String,
}

/// Per-dependency health
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServicesHealth {
    pub api: String,
    pub database: String,
}

/// Detailed health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// `success` when every dependency is reachable, `error` otherwise
    pub status: String,
    pub timestamp: String,
    pub services: ServicesHealth,
    pub version: String,
}

/// Liveness handler
#[endpoint(tags("health"), summary = "Liveness probe")]
pub(crate) async fn liveness(depot: &mut Depot) -> Result<Json<LivenessResponse>, StatusError> {
    let state = depot.state()?;

    Ok(Json(LivenessResponse {
        status: "success".to_string(),
        message: "API is running".to_string(),
        timestamp: Timestamp::now().to_string(),
        environment: state.environment.clone(),
    }))
}

/// Detailed health handler
///
/// Pings the database and answers 503 when it is unreachable.
#[endpoint(
    tags("health"),
    summary = "Detailed health check",
    responses(
        (status_code = StatusCode::OK, description = "All dependencies reachable"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Database unreachable"),
    ),
)]
pub(crate) async fn detailed_health(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state()?;

    let (status, database) = match state.app.health.database().await {
        Ok(()) => ("success", "connected"),
        Err(error) => {
            warn!("database health check failed: {error}");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            ("error", "disconnected")
        }
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        timestamp: Timestamp::now().to_string(),
        services: ServicesHealth {
            api: "running".to_string(),
            database: database.to_string(),
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
