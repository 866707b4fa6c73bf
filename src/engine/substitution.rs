use chrono::{DateTime, Utc};

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// On-court state for one player. Minutes only grow when a stint is closed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubstitutionClock {
    active_since: Option<DateTime<Utc>>,
    minutes: f64,
}

impl SubstitutionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a stint at `now`. Returns false, leaving the open stint untouched, if already on court.
    pub fn sub_in(&mut self, now: DateTime<Utc>) -> bool {
        if self.active_since.is_some() {
            return false;
        }
        self.active_since = Some(now);
        true
    }

    /// Closes the open stint and returns its length in minutes, or `None` if off court.
    /// A clock that ran backwards yields a negative stint, which is folded in as-is.
    pub fn sub_out(&mut self, now: DateTime<Utc>) -> Option<f64> {
        let since = self.active_since.take()?;
        let elapsed = elapsed_minutes(since, now);
        self.minutes += elapsed;
        Some(elapsed)
    }

    pub fn is_active(&self) -> bool {
        self.active_since.is_some()
    }

    pub fn active_since(&self) -> Option<DateTime<Utc>> {
        self.active_since
    }

    /// Completed stints only.
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Completed stints plus the open one, without closing it.
    pub fn live_minutes(&self, now: DateTime<Utc>) -> f64 {
        self.minutes + self.active_since.map_or(0.0, |since| elapsed_minutes(since, now))
    }
}

fn elapsed_minutes(since: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - since).num_milliseconds() as f64 / MILLIS_PER_MINUTE
}
