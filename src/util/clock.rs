use std::cell::Cell;
use std::rc::Rc;
use chrono::{DateTime, Duration, Utc};

/// Source of the current instant for substitution arithmetic and log timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A hand-driven clock. Clones share the same reading, so a test can keep one
/// handle while the engine owns another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    pub fn advance_millis(&self, millis: i64) {
        self.now.set(self.now.get() + Duration::milliseconds(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_reading() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        handle.advance_millis(90_000);
        assert_eq!((clock.now() - DateTime::<Utc>::UNIX_EPOCH).num_milliseconds(), 90_000);
        handle.advance_millis(-30_000);
        assert_eq!((clock.now() - DateTime::<Utc>::UNIX_EPOCH).num_milliseconds(), 60_000);
    }
}
