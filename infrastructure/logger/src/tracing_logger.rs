use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Production Logger adapter emitting through the tracing facade.
/// The embedding application owns subscriber setup.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Inventory -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Inventory -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Inventory -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Inventory -- ", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn should_serve_as_logger_port_object() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
        logger.debug("debug line");
    }
}
