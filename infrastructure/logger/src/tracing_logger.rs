use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] backed by `tracing`, tagging each event with the emitting component.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("catalog")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_catalog", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_catalog", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_catalog", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_catalog", component = self.component, "{}", message);
    }
}
