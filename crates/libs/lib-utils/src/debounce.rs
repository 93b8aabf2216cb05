//! # Debounce
//!
//! Quiet-period gate for coalescing bursts of repeated work, such as
//! back-to-back refreshes of the same upstream resource.

use std::time::{Duration, Instant};

/// Tracks when an action last fired and only lets it fire again after a
/// quiet period has elapsed.
#[derive(Debug)]
pub struct Debounce {
    wait: Duration,
    last: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self { wait, last: None }
    }

    /// Returns `true` if the quiet period has elapsed since the last
    /// accepted fire (or nothing has fired yet), and marks this instant as
    /// the new fire time.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(last) if now.duration_since(last) < self.wait => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Forget the last fire time so the next `ready()` passes immediately.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
