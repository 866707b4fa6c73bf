//! Live basketball scorekeeping: per-player counters with derived scoring,
//! substitution-driven playing time, and a newest-first event log.

pub mod command;
pub mod config;
pub mod engine;
pub mod posts;
pub mod util;

pub use crate::engine::Engine;
pub use crate::engine::log::{EventLog, LogEntry, LogEvent};
pub use crate::engine::player::PlayerId;
pub use crate::engine::snapshot::{PlayerSnapshot, RosterSnapshot};
pub use crate::util::clock::{Clock, ManualClock, SystemClock};
pub use crate::util::stat::StatKind;
pub use crate::util::time::TimestampFormat;
