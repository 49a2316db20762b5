//! Admission Controller
//!
//! The quota gate: a shared `in_flight` counter behind a mutex, with a
//! [`tokio::sync::Notify`] wakeup channel. `acquire()` blocks until
//! `in_flight < capacity`, re-checking the predicate after every wakeup;
//! `release()` and `reset_window()` wake all blocked waiters.

use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Error returned when the controller is closed while a caller waits
///
/// Closing happens only during orderly shutdown; the waiting caller
/// never takes a slot on this path.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("admission controller closed while waiting for a slot")]
pub struct AcquireInterrupted;

#[derive(Debug)]
struct WindowState {
    in_flight: u32,
    closed: bool,
}

/// Gate for quota-limited access to the registry
///
/// Owns the only shared mutable state in the system: the `in_flight`
/// counter. All reads and writes happen under its mutex, so no caller
/// can observe a torn update. The controller itself has no failure
/// modes; `acquire()` either blocks or proceeds (or reports shutdown).
#[derive(Debug)]
pub struct AdmissionController {
    /// Maximum concurrent admissions per window
    capacity: u32,

    /// Counter state, exclusively behind this mutex
    state: Mutex<WindowState>,

    /// Wakes all blocked acquirers on release/reset/close
    wakeup: Notify,
}

impl AdmissionController {
    /// Create a controller admitting at most `capacity` calls per window
    ///
    /// Capacity validation belongs to [`crate::SubmissionConfig`]; a
    /// zero capacity here makes every `acquire()` block until close.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            state: Mutex::new(WindowState {
                in_flight: 0,
                closed: false,
            }),
            wakeup: Notify::new(),
        }
    }

    /// Block until a slot is free, then take it
    ///
    /// Loops on a predicate-checked wait: after every wakeup the
    /// `in_flight < capacity` condition is re-tested, so spurious or
    /// raced wakeups never over-admit. The returned permit releases the
    /// slot when dropped.
    ///
    /// There is no timeout; short of [`close()`](Self::close), a caller
    /// that never gets capacity waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`AcquireInterrupted`] if the controller is closed before
    /// a slot is taken.
    pub async fn acquire(self: &Arc<Self>) -> Result<AdmissionPermit, AcquireInterrupted> {
        loop {
            if let Some(permit) = self.try_acquire()? {
                return Ok(permit);
            }

            // Register as a waiter before re-checking, so a release or
            // reset that lands between the check and the await still
            // wakes us (enable() makes notify_waiters() see this task).
            let notified = self.wakeup.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(permit) = self.try_acquire()? {
                return Ok(permit);
            }

            notified.await;
        }
    }

    /// Take a slot if one is free, without blocking
    fn try_acquire(self: &Arc<Self>) -> Result<Option<AdmissionPermit>, AcquireInterrupted> {
        let mut state = self.state.lock().unwrap();
        if state.closed {
            return Err(AcquireInterrupted);
        }
        if state.in_flight < self.capacity {
            state.in_flight += 1;
            tracing::debug!(in_flight = state.in_flight, "admission granted");
            Ok(Some(AdmissionPermit {
                controller: Arc::clone(self),
            }))
        } else {
            Ok(None)
        }
    }

    /// Return a slot and wake all blocked waiters
    ///
    /// Saturates at zero: a holder releasing after a window reset must
    /// not drive the counter negative. Called from permit drop.
    fn release(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.in_flight = state.in_flight.saturating_sub(1);
            tracing::debug!(in_flight = state.in_flight, "admission released");
        }
        self.wakeup.notify_waiters();
    }

    /// Zero the counter and wake all blocked waiters
    ///
    /// The window boundary forgives all prior admissions, regardless of
    /// any outstanding holders; each woken waiter re-contends for the
    /// now-empty capacity. Applied atomically with respect to
    /// acquire/release; if it races with them, reset wins.
    pub fn reset_window(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.in_flight = 0;
        }
        tracing::debug!("admission window reset");
        self.wakeup.notify_waiters();
    }

    /// Shut the gate: all pending and future acquires fail
    ///
    /// Blocked callers wake and return [`AcquireInterrupted`] without
    /// taking a slot. Slots already held stay valid until their permits
    /// drop.
    pub fn close(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.closed = true;
        }
        self.wakeup.notify_waiters();
    }

    /// Current number of admitted, unreleased calls
    pub fn in_flight(&self) -> u32 {
        self.state.lock().unwrap().in_flight
    }

    /// Configured capacity
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// One unit of admitted capacity
///
/// Held from `acquire()` until drop; dropping releases the slot and
/// wakes blocked waiters. This is what guarantees release on every exit
/// path of `submit()`, including errors.
#[derive(Debug)]
pub struct AdmissionPermit {
    controller: Arc<AdmissionController>,
}

impl Drop for AdmissionPermit {
    fn drop(&mut self) {
        self.controller.release();
    }
}
