use std::time::{Duration, Instant};

/// How long the previous card lingers while the no-match message fades in.
pub const GHOST_DURATION: Duration = Duration::from_millis(400);

/// A single cancellable deadline. Scheduling replaces any pending deadline.
#[derive(Debug, Clone, Default)]
pub struct GhostTimer {
    deadline: Option<Instant>,
}

impl GhostTimer {
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before expiry; `None` when nothing is pending or the deadline has passed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let deadline = self.deadline?;
        let left = deadline.saturating_duration_since(now);
        (!left.is_zero()).then_some(left)
    }

    /// Clears the deadline and returns true once `now` has reached it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
