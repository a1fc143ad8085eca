//! Fixed-cadence, cancelable tick timer.
//!
//! The ticker never sleeps or spawns anything. The caller passes `now` in and
//! asks whether a tick is due, which keeps it deterministic under test and
//! lets an event loop use [`Ticker::time_until_due`] as its poll timeout.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// A stopped ticker with the given period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start counting from `now`. No effect if already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Drop any pending deadline and count a full period from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Cancel the pending deadline. A stopped ticker never fires.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Time left before the next tick; zero if overdue, `None` if stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Consume one due tick.
    ///
    /// At most one tick fires per call. After a stall longer than a period
    /// the schedule re-anchors on `now` instead of bursting.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + self.interval;
        self.next_due = Some(if next <= now { now + self.interval } else { next });
        true
    }
}
