//! Transient "copied" indicator for copy-to-clipboard buttons.
//!
//! Each successful copy re-arms a single reset timer, so a second copy
//! inside the window extends it instead of reverting early. The timer slot
//! is generic over the timer handle; dropping a displaced handle is what
//! cancels it.

#[cfg(test)]
#[path = "copy_feedback_test.rs"]
mod copy_feedback_test;

/// How long the indicator stays in its copied state.
pub const COPIED_RESET_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CopyFeedback {
    copied: bool,
    reset_at_ms: Option<f64>,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Deadline of the pending reset, if any.
    pub fn reset_at_ms(&self) -> Option<f64> {
        self.reset_at_ms
    }

    /// Show the indicator and (re)arm the reset deadline from `now_ms`.
    pub fn mark_copied(&mut self, now_ms: f64) {
        self.copied = true;
        self.reset_at_ms = Some(now_ms + f64::from(COPIED_RESET_MS));
    }

    /// Apply a clipboard write outcome. A failed write changes nothing.
    /// Returns `true` when a reset timer must be armed.
    pub fn record<E>(&mut self, outcome: &Result<(), E>, now_ms: f64) -> bool {
        if outcome.is_err() {
            return false;
        }
        self.mark_copied(now_ms);
        true
    }

    /// Revert to the base state. Called when the latest reset timer fires;
    /// the clock is not consulted again.
    pub fn reset(&mut self) {
        self.copied = false;
        self.reset_at_ms = None;
    }
}

/// Holds the one pending reset timer of a copy button.
#[derive(Debug)]
pub struct PendingReset<T> {
    timer: Option<T>,
}

impl<T> Default for PendingReset<T> {
    fn default() -> Self {
        Self { timer: None }
    }
}

impl<T> PendingReset<T> {
    /// Store `timer` and hand back the one it displaces.
    #[must_use = "drop the displaced timer to cancel it"]
    pub fn arm(&mut self, timer: T) -> Option<T> {
        self.timer.replace(timer)
    }
}
