use std::fmt::{Debug, Formatter};
use crate::engine::log::{LogEntry, LogEvent};
use crate::engine::snapshot::PlayerSnapshot;
use crate::util::stat::StatKind;
use crate::util::tenths;

/// Card announcing a substitution, with the player's line when they leave the floor.
#[derive(Clone)]
pub struct Substitution {
    name: String,
    time: String,
    kind: SubstitutionKind,
}

#[derive(Clone)]
enum SubstitutionKind {
    In,
    Out {
        stint: f64,
        total: f64,
        points: u32,
        rebounds: u32,
        assists: u32,
        fouls: u32,
    },
}

impl Substitution {
    /// `None` unless `entry` records a substitution.
    pub fn from_entry(entry: &LogEntry, player: &PlayerSnapshot) -> Option<Self> {
        let kind = match entry.event {
            LogEvent::SubIn => SubstitutionKind::In,
            LogEvent::SubOut { minutes } => SubstitutionKind::Out {
                stint: minutes,
                total: player.minutes,
                points: player.stat_kind(StatKind::Points),
                rebounds: player.stat_kind(StatKind::Rebound),
                assists: player.stat_kind(StatKind::Assist),
                fouls: player.stat_kind(StatKind::Foul),
            },
            LogEvent::Stat(_) => return None,
        };

        Some(Self {
            name: entry.player.clone(),
            time: entry.time.clone(),
            kind,
        })
    }
}

impl Debug for Substitution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { name, time, kind } = self;
        match kind {
            SubstitutionKind::In => writeln!(f, "### [Sub In] | {name} checks in ({time})")?,
            SubstitutionKind::Out { stint, total, points, rebounds, assists, fouls } => {
                writeln!(f, "### [Sub Out] | {name} heads to the bench after **{stint}** min ({time})", stint = tenths(*stint))?;
                write!(f, "__{name}'s Line__:")?;
                writeln!(f, "\n> **{total}** MIN | **{points}** PTS | **{rebounds}** REB | **{assists}** AST | **{fouls}** PF", total = tenths(*total))?;
            }
        }

        Ok(())
    }
}
