use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connections
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub fallback_connection_string: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub health_probe_interval: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            fallback_connection_string: None,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            health_probe_interval: Duration::from_secs(30),
        }
    }

    pub fn with_fallback(mut self, fallback: Option<String>) -> Self {
        self.fallback_connection_string = fallback.filter(|url| !url.trim().is_empty());
        self
    }
}

/// Creates a PostgreSQL connection pool without opening a connection.
///
/// Connections are established on first use, so an unreachable server only
/// surfaces when the pool is pinged or queried.
pub fn create_postgres_pool(
    connection_string: &str,
    config: &DatabaseConfig,
) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(connection_string)
        .map_err(|e| {
            tracing::error!(error = %e, "Invalid database connection string");
            DatabaseError::ConnectionError
        })
}

/// Returns true when the pool can serve a trivial query.
pub async fn ping(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!(path = migrations_path, "Migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Migration failed");
            DatabaseError::MigrationError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_created() {
        let config = DatabaseConfig::new("postgres://localhost/catalog".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.health_probe_interval, Duration::from_secs(30));
        assert!(config.fallback_connection_string.is_none());
    }

    #[test]
    fn should_ignore_blank_fallback() {
        let config = DatabaseConfig::new("postgres://localhost/catalog".to_string())
            .with_fallback(Some("  ".to_string()));

        assert!(config.fallback_connection_string.is_none());
    }

    #[tokio::test]
    async fn should_reject_malformed_connection_string() {
        let config = DatabaseConfig::new("not a url".to_string());

        let result = create_postgres_pool(&config.connection_string, &config);

        assert!(matches!(result, Err(DatabaseError::ConnectionError)));
    }

    #[tokio::test]
    async fn should_fail_migrations_when_directory_is_missing() {
        let config = DatabaseConfig::new("postgres://localhost:1/catalog".to_string());
        let pool = create_postgres_pool(&config.connection_string, &config).unwrap();

        let result = run_migrations(&pool, "/definitely/not/here").await;

        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }
}
