//! Copy-button feedback: a short spinner, then a check mark, then back to
//! the plain label.
//!
//! Both stages share one [`Deferred`] slot, so starting a new copy while a
//! previous one is still showing cancels whatever step was pending and starts
//! the sequence over.

use std::time::{Duration, Instant};

use crate::timer::Deferred;

/// How long the spinner shows before the check mark.
pub const DEFAULT_SPINNER: Duration = Duration::from_millis(300);

/// How long the check mark shows before reverting.
pub const DEFAULT_CONFIRM: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copying,
    Copied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    EndSpinner,
    Revert,
}

#[derive(Debug)]
pub struct CopyFeedback {
    state: CopyState,
    spinner: Duration,
    confirm: Duration,
    next: Deferred<Step>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_SPINNER, DEFAULT_CONFIRM)
    }
}

impl CopyFeedback {
    pub fn new(spinner: Duration, confirm: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            spinner,
            confirm,
            next: Deferred::new(),
        }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    /// `true` from the moment a copy starts until the check mark reverts.
    pub fn in_flight(&self) -> bool {
        self.state != CopyState::Idle
    }

    /// Begin the feedback sequence for a copy that just happened.
    pub fn start(&mut self, now: Instant) {
        if self.next.cancel() {
            tracing::debug!("copy feedback restarted; pending step cancelled");
        }
        self.state = CopyState::Copying;
        self.next.schedule(Step::EndSpinner, now + self.spinner);
    }

    /// Advance through any steps that are due. Returns `true` if the visible
    /// state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.state;
        loop {
            let due = self.next.deadline();
            let Some(step) = self.next.poll(now) else {
                break;
            };
            match step {
                Step::EndSpinner => {
                    self.state = CopyState::Copied;
                    let fired_at = due.unwrap_or(now);
                    self.next.schedule(Step::Revert, fired_at + self.confirm);
                }
                Step::Revert => self.state = CopyState::Idle,
            }
        }
        self.state != before
    }

    /// Text for the copy button in the current state.
    pub fn label(&self) -> &'static str {
        match self.state {
            CopyState::Idle => "Copy",
            CopyState::Copying => "…",
            CopyState::Copied => "✓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_idle() {
        let fb = CopyFeedback::default();
        assert_eq!(fb.state(), CopyState::Idle);
        assert!(!fb.in_flight());
        assert_eq!(fb.label(), "Copy");
    }

    #[test]
    fn runs_spinner_then_check_then_idle() {
        let t0 = Instant::now();
        let mut fb = CopyFeedback::default();
        fb.start(t0);
        assert_eq!(fb.state(), CopyState::Copying);
        assert!(fb.in_flight());

        assert!(!fb.tick(t0 + ms(299)));
        assert!(fb.tick(t0 + ms(300)));
        assert_eq!(fb.state(), CopyState::Copied);
        assert_eq!(fb.label(), "✓");

        assert!(!fb.tick(t0 + ms(1299)));
        assert!(fb.tick(t0 + ms(1300)));
        assert_eq!(fb.state(), CopyState::Idle);
        assert!(!fb.in_flight());
    }

    #[test]
    fn late_tick_skips_straight_to_idle() {
        let t0 = Instant::now();
        let mut fb = CopyFeedback::default();
        fb.start(t0);
        assert!(fb.tick(t0 + ms(5000)));
        assert_eq!(fb.state(), CopyState::Idle);
    }

    #[test]
    fn restart_cancels_pending_revert() {
        let t0 = Instant::now();
        let mut fb = CopyFeedback::default();
        fb.start(t0);
        fb.tick(t0 + ms(300));
        assert_eq!(fb.state(), CopyState::Copied);

        // A second copy while the check mark shows starts over.
        fb.start(t0 + ms(800));
        assert_eq!(fb.state(), CopyState::Copying);

        // The first sequence's revert (t0 + 1300) must not fire.
        fb.tick(t0 + ms(1099));
        assert_eq!(fb.state(), CopyState::Copying);
        fb.tick(t0 + ms(1100));
        assert_eq!(fb.state(), CopyState::Copied);
        fb.tick(t0 + ms(1300));
        assert_eq!(fb.state(), CopyState::Copied);
        fb.tick(t0 + ms(2100));
        assert_eq!(fb.state(), CopyState::Idle);
    }

    #[test]
    fn custom_delays() {
        let t0 = Instant::now();
        let mut fb = CopyFeedback::new(ms(10), ms(20));
        fb.start(t0);
        fb.tick(t0 + ms(10));
        assert_eq!(fb.state(), CopyState::Copied);
        fb.tick(t0 + ms(30));
        assert_eq!(fb.state(), CopyState::Idle);
    }
}
