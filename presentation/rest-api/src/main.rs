use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server, telemetry};

/// Product catalog service entry point
///
/// - config/: Environment-driven configuration (server, CORS, database, cache)
/// - setup/: Dependency injection, metrics and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Install the Prometheus recorder
    let metrics = telemetry::init_metrics()?;

    // 3. Load environment variables
    dotenv().ok();

    // 4. Load configuration
    let config = AppConfig::from_env()?;

    // 5. Wire dependencies (database supervisor, cache, use cases)
    let container = DependencyContainer::new(&config).await?;

    // 6. Run server
    Server::run(config, container, metrics).await?;

    Ok(())
}
