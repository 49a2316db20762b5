//! Submission Error Types
//!
//! This module defines all error types that can surface from `submit()`.

/// Error types for registry submissions
///
/// None of these are retried internally; every failure surfaces to the
/// direct caller. The admission slot is released on all of these paths.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The caller was interrupted while blocked in acquire (client
    /// shutdown). The slot was never taken.
    #[error("admission interrupted: {0}")]
    AdmissionInterrupted(String),

    /// The request body could not be encoded. Surfaced before any
    /// network call is attempted.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The registry returned a non-2xx status, or the network call
    /// failed outright.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}
