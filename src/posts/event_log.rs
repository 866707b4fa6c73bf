use std::fmt::{Display, Formatter};
use crate::engine::log::{EventLog, LogEntry};

#[derive(Clone)]
pub struct EventLogPost {
    entries: Vec<LogEntry>,
}

impl EventLogPost {
    pub fn new(log: &EventLog) -> Self {
        Self { entries: log.to_vec() }
    }

    /// Only the `limit` most recent entries.
    pub fn recent(log: &EventLog, limit: usize) -> Self {
        Self {
            entries: log.iter().take(limit).cloned().collect(),
        }
    }
}

impl Display for EventLogPost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "## Event Log")?;
        for LogEntry { player, event, time, .. } in &self.entries {
            writeln!(f, "⏱ {time} - **{player}**: {event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::util::clock::ManualClock;
    use crate::util::time::TimestampFormat;
    use chrono_tz::Tz;

    #[test]
    fn newest_first_with_names_captured_at_record_time() {
        let clock = ManualClock::default();
        let mut engine = Engine::with_players(clock.clone(), TimestampFormat::new(Tz::UTC, "%H:%M:%S"), 1);
        engine.record_stat(0, "Assist");
        clock.advance_millis(1_000);
        engine.rename_player(0, "Nash");
        engine.record_stat(0, "FT Made");

        assert_eq!(
            EventLogPost::new(engine.log()).to_string(),
            "## Event Log\n⏱ 00:00:01 - **Nash**: FT Made\n⏱ 00:00:00 - **Player 1**: Assist\n"
        );
        assert_eq!(
            EventLogPost::recent(engine.log(), 1).to_string(),
            "## Event Log\n⏱ 00:00:01 - **Nash**: FT Made\n"
        );
    }
}
