//! Window Reset Scheduler
//!
//! Periodic background task that zeroes the admission counter every
//! window. Timing is wall-clock based, independent of any in-flight
//! submission.

use super::controller::AdmissionController;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Owned periodic reset task for an [`AdmissionController`]
///
/// Started explicitly and stopped either via [`stop()`](Self::stop) or
/// on drop, so the scheduler's lifetime is caller-controlled rather than
/// tied to an implicit shared timer pool. If never stopped it runs for
/// the life of the process.
#[derive(Debug)]
pub struct WindowScheduler {
    handle: Option<JoinHandle<()>>,
}

impl WindowScheduler {
    /// Spawn the reset loop
    ///
    /// The first tick fires immediately, a no-op reset on an
    /// already-empty counter, then every `window` thereafter. A tick
    /// cannot fail (`reset_window` has no failure modes), so the loop
    /// never stops on its own.
    pub fn start(controller: Arc<AdmissionController>, window: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(window);

            loop {
                interval.tick().await;
                controller.reset_window();
            }
        });

        tracing::debug!(?window, "window scheduler started");

        Self {
            handle: Some(handle),
        }
    }

    /// Stop the reset loop and release the timer
    ///
    /// Idempotent. Blocked acquirers are not woken by stopping; orderly
    /// shutdown closes the controller separately.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("window scheduler stopped");
        }
    }

    /// Whether the reset loop is still running
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for WindowScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
