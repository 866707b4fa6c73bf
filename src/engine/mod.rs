use ::log::{debug, info, trace};
use crate::engine::log::{EventLog, LogEntry, LogEvent};
use crate::engine::roster::Roster;
use crate::engine::snapshot::RosterSnapshot;
use crate::util::clock::Clock;
use crate::util::stat::StatKind;
use crate::util::tenths;
use crate::util::time::TimestampFormat;

pub mod ledger;
pub mod log;
pub mod player;
pub mod roster;
pub mod snapshot;
pub mod substitution;

/// The session's game state. Every operation addresses a player by roster
/// position; positions that don't exist are ignored rather than reported.
/// Stat records and actual substitutions each write one log entry; roster
/// edits write none.
pub struct Engine<C: Clock> {
    roster: Roster,
    log: EventLog,
    clock: C,
    format: TimestampFormat,
}

impl<C: Clock> Engine<C> {
    pub fn new(clock: C, format: TimestampFormat) -> Self {
        Self {
            roster: Roster::new(),
            log: EventLog::new(),
            clock,
            format,
        }
    }

    /// Starts with `count` default-named players, the way a fresh session opens.
    pub fn with_players(clock: C, format: TimestampFormat, count: usize) -> Self {
        let mut engine = Self::new(clock, format);
        for _ in 0..count {
            engine.roster.add();
        }
        engine
    }

    pub fn add_player(&mut self) -> RosterSnapshot {
        let player = self.roster.add();
        info!("Added {} ({})", player.name(), player.id());
        self.snapshot()
    }

    pub fn remove_player(&mut self, index: usize) -> RosterSnapshot {
        match self.roster.remove(index) {
            Some(player) => info!("Removed {} ({})", player.name(), player.id()),
            None => trace!("Ignoring removal of missing position {index}"),
        }
        self.snapshot()
    }

    pub fn rename_player(&mut self, index: usize, name: impl Into<String>) -> RosterSnapshot {
        let name = name.into();
        match self.roster.rename(index, name.clone()) {
            Some(old) => info!("Renamed {old} to {name}"),
            None => trace!("Ignoring rename of missing position {index}"),
        }
        self.snapshot()
    }

    /// Counts `label` for the player. Derived counters such as Points only move
    /// through the rule table, so recording one directly is ignored.
    pub fn record_stat(&mut self, index: usize, label: &str) -> RosterSnapshot {
        if StatKind::from_label(label).is_some_and(StatKind::is_derived) {
            trace!("Ignoring direct write to derived counter {label}");
            return self.snapshot();
        }
        let now = self.clock.now();
        let Some(player) = self.roster.get_mut(index) else {
            trace!("Ignoring {label} for missing position {index}");
            return self.snapshot();
        };
        player.ledger_mut().record(label);
        debug!("{} {label} -> {}", player.name(), player.ledger().get(label));
        self.log.push(LogEntry::new(player, LogEvent::Stat(label.to_owned()), self.format.format(now)));
        self.snapshot()
    }

    pub fn sub_in(&mut self, index: usize) -> RosterSnapshot {
        let now = self.clock.now();
        let Some(player) = self.roster.get_mut(index) else {
            trace!("Ignoring sub in for missing position {index}");
            return self.snapshot();
        };
        if player.clock_mut().sub_in(now) {
            info!("{} subbed in", player.name());
            self.log.push(LogEntry::new(player, LogEvent::SubIn, self.format.format(now)));
        } else {
            trace!("{} is already on court", player.name());
        }
        self.snapshot()
    }

    pub fn sub_out(&mut self, index: usize) -> RosterSnapshot {
        let now = self.clock.now();
        let Some(player) = self.roster.get_mut(index) else {
            trace!("Ignoring sub out for missing position {index}");
            return self.snapshot();
        };
        match player.clock_mut().sub_out(now) {
            Some(minutes) => {
                info!("{} subbed out after {} min", player.name(), tenths(minutes));
                self.log.push(LogEntry::new(player, LogEvent::SubOut { minutes }, self.format.format(now)));
            }
            None => trace!("{} is not on court", player.name()),
        }
        self.snapshot()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot::from_roster(&self.roster)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Minutes per player including any stint still open, for display. Nothing is folded in.
    pub fn live_minutes(&self) -> Vec<f64> {
        let now = self.clock.now();
        self.roster.iter().map(|player| player.clock().live_minutes(now)).collect()
    }

}
