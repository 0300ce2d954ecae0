//! Single-slot cancellable delayed action.
//!
//! Scheduling always replaces whatever was pending, so at most one action is
//! ever waiting. Time is supplied by the caller; the front end polls on its
//! tick with `Instant::now()` and tests pass synthetic instants.

use std::time::Instant;

#[derive(Debug)]
pub struct Deferred<T> {
    pending: Option<(Instant, T)>,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Deferred<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrange for `value` to fire at `at`, cancelling any pending action.
    pub fn schedule(&mut self, value: T, at: Instant) {
        self.pending = Some((at, value));
    }

    /// Drop the pending action, if any. Returns `true` if one was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending action is due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    /// Fire the pending action if `now` has reached its deadline.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|at| now >= at) {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }
}
