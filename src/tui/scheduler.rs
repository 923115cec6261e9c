//! # Tick Scheduler
//!
//! Host side of the game's self-renewing tick chain. Holds at most one
//! pending tick; arming again replaces it. The event loop asks how long it
//! may block and collects the tick once its deadline has passed.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Option<(Instant, u64)>,
}

impl TickScheduler {
    pub fn arm(&mut self, epoch: u64, deadline: Instant) {
        self.pending = Some((deadline, epoch));
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// How long the loop may wait before the pending tick is due.
    /// `None` when nothing is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }

    /// Take the pending tick's epoch if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<u64> {
        match self.pending {
            Some((deadline, epoch)) if deadline <= now => {
                self.pending = None;
                Some(epoch)
            }
            _ => None,
        }
    }
}
