//! CRPT Registry Submission Client
//!
//! This library provides a rate-limited client for submitting signed
//! documents to the Chestny ZNAK (CRPT) product registry. At most
//! `capacity` submissions are admitted per quota window; callers over the
//! limit block until a slot frees or the window resets.

pub mod admission;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod transport;

pub use admission::{AdmissionController, AdmissionPermit, WindowScheduler};
pub use client::SubmissionClient;
pub use config::{ConfigError, SubmissionConfig};
pub use document::{Document, SubmissionRequest};
pub use error::SubmissionError;
pub use transport::{HttpTransport, Transport, TransportOutcome};
