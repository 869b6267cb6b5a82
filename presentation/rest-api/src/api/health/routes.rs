use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use persistence::supervisor::ConnectionSupervisor;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Database currently serving queries: "primary" or "fallback"
    pub database: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    supervisor: Arc<ConnectionSupervisor>,
}

impl Api {
    pub fn new(supervisor: Arc<ConnectionSupervisor>) -> Self {
        Self { supervisor }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports liveness and which database connection is active.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `database`: Active connection role
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: self.supervisor.role().await.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::db::{DatabaseConfig, create_postgres_pool};
    use persistence::supervisor::ConnectionRole;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_active_database_role() {
        let config = DatabaseConfig::new("postgres://catalog@127.0.0.1:1/catalog".to_string());
        let pool = create_postgres_pool(&config.connection_string, &config).unwrap();
        let supervisor = Arc::new(ConnectionSupervisor::from_pools(
            pool.clone(),
            Some(pool),
            ConnectionRole::Fallback,
        ));
        let api_service = OpenApiService::new(Api::new(supervisor), "health", "test");
        let cli = TestClient::new(Route::new().nest("/", api_service));

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("status").assert_string("healthy");
        body.get("database").assert_string("fallback");
    }
}
