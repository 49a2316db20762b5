//! Submission Client
//!
//! The public entry point: `submit()` wraps one transport call in an
//! acquire/release pair on the shared admission controller. The quota
//! slot is held for the full duration of the outbound call and released
//! on every exit path, success or failure.

use crate::admission::{AdmissionController, WindowScheduler};
use crate::config::{ConfigError, SubmissionConfig};
use crate::document::{Document, SubmissionRequest};
use crate::error::SubmissionError;
use crate::transport::Transport;
use std::sync::Arc;

/// Rate-limited client for registry submissions
///
/// Owns the admission controller, the running window scheduler, and the
/// transport. Created once at system start; the scheduler runs until
/// [`shutdown()`](Self::shutdown) or drop.
///
/// # Example
///
/// ```ignore
/// use crpt_api::{Document, HttpTransport, SubmissionClient, SubmissionConfig};
/// use std::time::Duration;
///
/// let config = SubmissionConfig::new(10, Duration::from_secs(60))?;
/// let client = SubmissionClient::new(config, HttpTransport::new())?;
/// client.submit(document, "signature").await?;
/// ```
pub struct SubmissionClient<T: Transport> {
    /// Shared quota gate
    controller: Arc<AdmissionController>,

    /// Periodic window-reset task
    scheduler: WindowScheduler,

    /// Serialization/transport collaborator
    transport: T,
}

impl<T: Transport> SubmissionClient<T> {
    /// Create a client and start its window scheduler
    ///
    /// The first window reset fires immediately, a no-op on the empty
    /// counter, then every `config.window()` thereafter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid. The
    /// config is re-validated here because deserialized configs never
    /// pass through [`SubmissionConfig::new`]; a zero capacity must be
    /// rejected rather than silently blocking every `submit()`.
    pub fn new(config: SubmissionConfig, transport: T) -> Result<Self, ConfigError> {
        config.validate()?;

        let controller = Arc::new(AdmissionController::new(config.capacity()));
        let scheduler = WindowScheduler::start(Arc::clone(&controller), config.window());

        tracing::info!(
            capacity = config.capacity(),
            window = ?config.window(),
            "submission client started"
        );

        Ok(Self {
            controller,
            scheduler,
            transport,
        })
    }

    /// Submit a signed document to the registry
    ///
    /// Blocks while the quota is exhausted, until a slot frees or the
    /// window resets. Exactly one network call is made per successful
    /// admission; the slot is held for the whole call and released on
    /// every exit path (the permit is an RAII guard).
    ///
    /// # Errors
    ///
    /// * [`SubmissionError::AdmissionInterrupted`] - client shut down
    ///   while this call waited for a slot; no slot was taken
    /// * [`SubmissionError::Serialization`] - the request could not be
    ///   encoded; no network call was attempted
    /// * [`SubmissionError::Transport`] - non-2xx registry status or
    ///   outright network failure
    pub async fn submit(
        &self,
        document: Document,
        signature: impl Into<String>,
    ) -> Result<(), SubmissionError> {
        // May block; holds the slot until _permit drops at function exit.
        let _permit = self
            .controller
            .acquire()
            .await
            .map_err(|e| SubmissionError::AdmissionInterrupted(e.to_string()))?;

        let request = SubmissionRequest::new(document, signature.into());
        let body = serde_json::to_string(&request)?;

        let outcome = self.transport.post_document(body).await?;

        if outcome.is_success() {
            tracing::debug!(status = outcome.status, "document accepted by registry");
            Ok(())
        } else {
            Err(SubmissionError::Transport(format!(
                "registry rejected submission with status {}: {}",
                outcome.status, outcome.body
            )))
        }
    }

    /// Stop the scheduler and close the admission gate
    ///
    /// Callers blocked in `submit()` wake with
    /// [`SubmissionError::AdmissionInterrupted`]; in-flight calls keep
    /// their slots until they finish.
    pub fn shutdown(&mut self) {
        self.scheduler.stop();
        self.controller.close();
        tracing::info!("submission client shut down");
    }

    /// The shared admission controller (for inspection in tests)
    pub fn controller(&self) -> &Arc<AdmissionController> {
        &self.controller
    }

    /// The transport collaborator (for inspection in tests)
    pub fn transport_ref(&self) -> &T {
        &self.transport
    }
}
