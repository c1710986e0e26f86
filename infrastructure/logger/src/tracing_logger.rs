use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to the `tracing` subscriber under one target.
pub struct TracingLogger;

const TARGET: &str = "Storefront -- ";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
