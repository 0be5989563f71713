//! The clock collaborator.
//!
//! The engine reads the wall clock exactly once per match, at start time,
//! and uses it only for summary tie-breaking. [`SystemClock`] is the
//! production source; [`ManualClock`] gives tests full control over the
//! timestamps a manager hands out.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Source of match-start timestamps.
///
/// Implementations must be monotonically non-decreasing across calls.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Cloning shares the underlying instant, so a test can keep a handle and
/// advance time between manager calls. Millisecond resolution.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    #[must_use]
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.millis.store(to.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.millis
            .fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        DateTime::from_timestamp_millis(millis).expect("manual clock millis in range")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_holds_still_until_advanced() {
        let start = DateTime::from_timestamp_millis(1_735_732_800_000).unwrap();
        let clock = ManualClock::at(start);
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(15));
        assert_eq!(clock.now(), start + Duration::minutes(15));
    }

    #[test]
    fn manual_clock_clones_share_the_instant() {
        let start = DateTime::from_timestamp_millis(0).unwrap();
        let clock = ManualClock::at(start);
        let handle = clock.clone();

        handle.set(start + Duration::hours(1));
        assert_eq!(clock.now(), start + Duration::hours(1));
    }
}
