//! Wall-clock hour source for time-based policies.

use chrono::{Local, Timelike};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of the current local hour (0-23).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Clock: Send + Sync {
    fn current_hour(&self) -> u32;
}

/// Reads the hour from the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock pinned to a single hour.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}
