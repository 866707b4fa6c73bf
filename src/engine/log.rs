use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use serde::{Serialize, Serializer};
use crate::engine::player::{Player, PlayerId};
use crate::util::tenths;

#[derive(Clone, Debug, PartialEq)]
pub enum LogEvent {
    Stat(String),
    SubIn,
    SubOut { minutes: f64 },
}

impl Display for LogEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stat(label) => write!(f, "{label}"),
            Self::SubIn => write!(f, "Sub In"),
            Self::SubOut { minutes } => write!(f, "Sub Out (+{} min)", tenths(*minutes)),
        }
    }
}

impl Serialize for LogEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One recorded mutation. The name is captured when the entry is written, so a
/// later rename leaves history alone.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogEntry {
    pub player_id: PlayerId,
    pub player: String,
    pub event: LogEvent,
    pub time: String,
}

impl LogEntry {
    pub fn new(player: &Player, event: LogEvent, time: String) -> Self {
        Self {
            player_id: player.id(),
            player: player.name().to_owned(),
            event,
            time,
        }
    }

    pub fn label(&self) -> String {
        self.event.to_string()
    }
}

/// Append-only, newest first.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: &str, event: LogEvent) -> LogEntry {
        LogEntry {
            player_id: PlayerId::new(0),
            player: player.to_owned(),
            event,
            time: "12:00:00 PM".to_owned(),
        }
    }

    #[test]
    fn labels() {
        assert_eq!(LogEvent::Stat("FG Made".to_owned()).to_string(), "FG Made");
        assert_eq!(LogEvent::SubIn.to_string(), "Sub In");
        assert_eq!(LogEvent::SubOut { minutes: 2.34 }.to_string(), "Sub Out (+2.3 min)");
        assert_eq!(LogEvent::SubOut { minutes: 1.5 }.to_string(), "Sub Out (+1.5 min)");
        assert_eq!(LogEvent::SubOut { minutes: -1.0 }.to_string(), "Sub Out (+-1.0 min)");
    }

    #[test]
    fn sub_out_label_rounds_quarter_minutes_up() {
        assert_eq!(LogEvent::SubOut { minutes: 0.25 }.to_string(), "Sub Out (+0.3 min)");
        assert_eq!(LogEvent::SubOut { minutes: 0.75 }.to_string(), "Sub Out (+0.8 min)");
        assert_eq!(LogEvent::SubOut { minutes: -0.25 }.to_string(), "Sub Out (+-0.3 min)");
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut log = EventLog::new();
        log.push(entry("Player 1", LogEvent::SubIn));
        log.push(entry("Player 2", LogEvent::Stat("Foul".to_owned())));
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(LogEntry::label).as_deref(), Some("Foul"));
        assert_eq!(log.get(1).map(|entry| entry.player.as_str()), Some("Player 1"));
    }

    #[test]
    fn serializes_the_label() {
        let json = serde_json::to_value(entry("Player 1", LogEvent::SubOut { minutes: 1.5 })).unwrap();
        assert_eq!(json["event"], "Sub Out (+1.5 min)");
        assert_eq!(json["player_id"], 0);
    }
}
