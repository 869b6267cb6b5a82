use std::env;
use std::sync::Arc;
use std::time::Duration;

use persistence::db::DatabaseConfig;
use persistence::supervisor::ConnectionSupervisor;

use super::app_config::{ConfigError, parse_var};

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_FALLBACK_URL: Secondary connection string (optional)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_HEALTH_PROBE_SECS: Probe interval in seconds (default: 30)
/// - DATABASE_MIGRATIONS_PATH: Migrations directory
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub connection: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let mut connection =
            DatabaseConfig::new(url).with_fallback(env::var("DATABASE_FALLBACK_URL").ok());
        connection.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 5)?;
        connection.health_probe_interval =
            Duration::from_secs(parse_var("DATABASE_HEALTH_PROBE_SECS", 30)?);

        let migrations_path = env::var("DATABASE_MIGRATIONS_PATH")
            .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            connection,
            migrations_path,
        })
    }
}

/// Connects the supervisor, migrates every reachable database and starts the
/// health probe.
///
/// # Errors
/// Returns error if neither database is reachable or migrations fail
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<Arc<ConnectionSupervisor>> {
    let supervisor = ConnectionSupervisor::connect(&settings.connection)
        .await?
        .with_migrations(settings.migrations_path.clone());
    supervisor.migrate().await?;
    let supervisor = Arc::new(supervisor);

    supervisor
        .clone()
        .spawn_health_probe(settings.connection.health_probe_interval);

    Ok(supervisor)
}
