use std::future::Future;
use std::time::Instant;

use metrics::{counter, histogram};

use crate::domain::product::errors::ProductError;

pub const METRIC_OPERATIONS_TOTAL: &str = "product_operations_total";
pub const METRIC_OPERATION_DURATION_SECONDS: &str = "product_operation_duration_seconds";
pub const METRIC_CACHE_HITS_TOTAL: &str = "product_cache_hits_total";
pub const METRIC_CACHE_MISSES_TOTAL: &str = "product_cache_misses_total";

/// Runs a use-case future, counting its outcome and recording its duration
/// under `operation`.
pub async fn observe<T, F>(operation: &'static str, future: F) -> Result<T, ProductError>
where
    F: Future<Output = Result<T, ProductError>>,
{
    let started_at = Instant::now();
    let result = future.await;

    let status = if result.is_ok() { "success" } else { "failure" };
    counter!(METRIC_OPERATIONS_TOTAL, "operation" => operation, "status" => status).increment(1);
    histogram!(METRIC_OPERATION_DURATION_SECONDS, "operation" => operation)
        .record(started_at.elapsed().as_secs_f64());

    result
}

pub(crate) fn record_cache_lookup(hit: bool) {
    let name = if hit {
        METRIC_CACHE_HITS_TOTAL
    } else {
        METRIC_CACHE_MISSES_TOTAL
    };
    counter!(name).increment(1);
}
