use std::sync::Once;

use business::application::product::telemetry::{
    METRIC_CACHE_HITS_TOTAL, METRIC_CACHE_MISSES_TOTAL, METRIC_OPERATION_DURATION_SECONDS,
    METRIC_OPERATIONS_TOTAL,
};
use metrics::{Unit, describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use poem::{Endpoint, EndpointExt, Response, handler, web::Data};

static METRIC_DESCRIPTIONS: Once = Once::new();

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Installs the global Prometheus recorder and returns the handle used to
/// render the scrape output.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    Ok(handle)
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            METRIC_OPERATIONS_TOTAL,
            Unit::Count,
            "Total number of catalog operations by outcome."
        );
        describe_histogram!(
            METRIC_OPERATION_DURATION_SECONDS,
            Unit::Seconds,
            "Duration of catalog operations in seconds."
        );
        describe_counter!(
            METRIC_CACHE_HITS_TOTAL,
            Unit::Count,
            "Total number of catalog cache hits."
        );
        describe_counter!(
            METRIC_CACHE_MISSES_TOTAL,
            Unit::Count,
            "Total number of catalog cache misses."
        );
    });
}

#[handler]
fn render(Data(handle): Data<&PrometheusHandle>) -> Response {
    Response::builder()
        .content_type(PROMETHEUS_CONTENT_TYPE)
        .body(handle.render())
}

/// Scrape endpoint in the Prometheus text format.
pub fn metrics_endpoint(handle: PrometheusHandle) -> impl Endpoint {
    render.data(handle)
}
