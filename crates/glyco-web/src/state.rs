//! Application state for the web server.

use glyco::prelude::{HealthMonitor, Predictor};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    predictor: Arc<dyn Predictor>,
    monitor: Arc<HealthMonitor>,
    /// Reject vitals outside the accepted input ranges.
    pub strict_validation: bool,
}

impl AppState {
    /// Create the state and start polling the predictor's health.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(predictor: Arc<dyn Predictor>, health_interval: Duration) -> Self {
        let monitor = HealthMonitor::spawn(predictor.clone(), health_interval);
        Self {
            predictor,
            monitor: Arc::new(monitor),
            strict_validation: false,
        }
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn predictor(&self) -> &dyn Predictor {
        self.predictor.as_ref()
    }

    /// Latest result of the background health poll.
    pub fn predictor_reachable(&self) -> bool {
        self.monitor.is_healthy()
    }
}
