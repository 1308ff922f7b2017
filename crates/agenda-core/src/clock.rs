//! Injectable "now" provider.
//!
//! `Scheduler::suggest_time` defaults its reference time to the current
//! wall-clock time. That default goes through a [`Clock`] rather than a
//! direct system call, so callers can substitute [`FixedClock`] and get
//! deterministic suggestions in tests.

use chrono::NaiveDateTime;

/// Source of the current naive local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The real system clock (naive local time).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
