//! Periodic predictor health polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::backend::Predictor;

/// Shortest accepted poll interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Polls a predictor's health check on an interval and publishes the latest
/// result.
///
/// Starts out unhealthy until the first check completes. Polling stops when
/// the monitor is dropped.
pub struct HealthMonitor {
    rx: watch::Receiver<bool>,
    handle: JoinHandle<()>,
}

impl HealthMonitor {
    /// Start polling. Must be called from within a tokio runtime.
    pub fn spawn(predictor: Arc<dyn Predictor>, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(false);
        let interval = interval.max(MIN_POLL_INTERVAL);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let healthy = predictor.health_check().await;
                debug!(predictor = predictor.name(), healthy, "health check");

                let changed = tx.send_if_modified(|current| {
                    if *current != healthy {
                        *current = healthy;
                        true
                    } else {
                        false
                    }
                });
                if changed {
                    info!(predictor = predictor.name(), healthy, "predictor health changed");
                }
            }
        });

        Self { rx, handle }
    }

    /// Latest published health.
    pub fn is_healthy(&self) -> bool {
        *self.rx.borrow()
    }

    /// A receiver notified on every health change.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }

    /// Stop polling. The last published value stays readable.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
