//! Admission Control Module
//!
//! This module gates concurrent access to the registry quota. It has two
//! parts:
//!
//! 1. **Controller** (`controller`): the shared `in_flight` counter with
//!    a blocking acquire/release protocol
//! 2. **Scheduler** (`scheduler`): the periodic window-reset task
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  acquire/release  ┌─────────────────────┐
//! │ submit() x N │ ────────────────► │ AdmissionController │
//! └──────────────┘                   │  in_flight / notify │
//! ┌──────────────┐   reset_window    └─────────────────────┘
//! │ Scheduler    │ ────────────────►          ▲
//! └──────────────┘     every window           │ wake all, re-check
//! ```
//!
//! A slot is held from `acquire()` until the returned permit is dropped,
//! i.e. for the full duration of the outbound call. Combined with the
//! periodic reset this behaves as a bounded-concurrency gate with window
//! forgiveness, not a token bucket.

pub mod controller;
pub mod scheduler;

pub use controller::{AcquireInterrupted, AdmissionController, AdmissionPermit};
pub use scheduler::WindowScheduler;
