use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under the `product_api::use_case` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_api::use_case", "{message}");
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_api::use_case", "{message}");
    }
    fn error(&self, message: &str) {
        error!(target: "product_api::use_case", "{message}");
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_api::use_case", "{message}");
    }
}
