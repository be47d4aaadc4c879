use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Backend holding the favorites: file, postgres or memory
    pub storage: String,
}

pub struct Api {
    storage: String,
}

impl Api {
    pub fn new(storage: impl Into<String>) -> Self {
        Self {
            storage: storage.into(),
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports that the service is up and which favorites backend it uses.
    /// Does not call the recipe catalog.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: self.storage.clone(),
        })
    }
}
