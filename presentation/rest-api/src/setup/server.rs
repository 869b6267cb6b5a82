use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use metrics_exporter_prometheus::PrometheusHandle;
use poem_openapi::OpenApiService;

use crate::config::app_config::AppConfig;
use crate::setup::{dependency_injection::DependencyContainer, telemetry::metrics_endpoint};

pub struct Server;

impl Server {
    pub async fn run(
        config: AppConfig,
        container: DependencyContainer,
        metrics: PrometheusHandle,
    ) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let mount = config.server.mount_path().to_string();
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}{}", addr, config.server.base_path));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest(&mount, api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .at("/metrics", metrics_endpoint(metrics))
            .with(config.cors)
            .with(Tracing);

        tracing::info!(address = %addr, base_path = %mount, "Server running");
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        tracing::info!("Prometheus metrics at http://{}/metrics", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
