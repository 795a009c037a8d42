use std::time::Duration;

use chrono::Utc;
use mongodb::Database;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the document store answers, "degraded" otherwise
    pub status: String,
    /// "up" or "down"
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn from_database_state(database_up: bool) -> Self {
        let (status, database) = if database_up {
            ("healthy", "up")
        } else {
            ("degraded", "down")
        };

        Self {
            status: status.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health API for monitoring and infrastructure checks
pub struct HealthApi {
    database: Database,
    ping_timeout: Duration,
}

impl HealthApi {
    pub fn new(database: Database, ping_timeout: Duration) -> Self {
        Self {
            database,
            ping_timeout,
        }
    }

    async fn database_up(&self) -> bool {
        let ping = persistence::db::ping(&self.database);
        match tokio::time::timeout(self.ping_timeout, ping).await {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "Health check ping failed");
                false
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.ping_timeout, "Health check ping timed out");
                false
            }
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Pings the document store within the operation timeout. Always answers
    /// 200; a failed or late ping is reported as `degraded` in the body.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse::from_database_state(self.database_up().await))
    }
}
