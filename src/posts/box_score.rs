use std::fmt::{Display, Formatter};
use crate::engine::snapshot::{PlayerSnapshot, RosterSnapshot};
use crate::util::stat::StatKind;
use crate::util::tenths;

#[derive(Clone)]
pub struct BoxScore {
    lines: Vec<BoxScoreLine>,
}

impl BoxScore {
    /// `live_minutes` replaces the completed-stint minutes when given, one per player.
    pub fn new(snapshot: &RosterSnapshot, live_minutes: Option<&[f64]>) -> Self {
        Self {
            lines: snapshot
                .iter()
                .enumerate()
                .map(|(idx, player)| BoxScoreLine::new(idx + 1, player, live_minutes.and_then(|minutes| minutes.get(idx).copied())))
                .collect(),
        }
    }
}

impl Display for BoxScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "## Box Score")?;
        if self.lines.is_empty() {
            writeln!(f, "*No players*")?;
        }
        for line in &self.lines {
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[derive(Clone)]
struct BoxScoreLine {
    ordinal: usize,
    name: String,
    active: bool,
    shooting: [(StatKind, u32, u32); 3],
    points: u32,
    minutes: f64,
    others: Vec<(String, u32)>,
}

impl BoxScoreLine {
    fn new(ordinal: usize, player: &PlayerSnapshot, live_minutes: Option<f64>) -> Self {
        let shooting = StatKind::SHOOTING_PAIRS.map(|(made, attempt)| (made, player.stat_kind(made), player.stat_kind(attempt)));
        let others = player
            .stats
            .iter()
            .filter(|(label, _)| {
                StatKind::from_label(label).map_or(true, |kind| {
                    kind != StatKind::Points && !StatKind::SHOOTING_PAIRS.iter().any(|&(made, attempt)| kind == made || kind == attempt)
                })
            })
            .map(|(label, &count)| (label.clone(), count))
            .collect();

        Self {
            ordinal,
            name: player.name.clone(),
            active: player.is_active,
            shooting,
            points: player.stat_kind(StatKind::Points),
            minutes: live_minutes.unwrap_or(player.minutes),
            others,
        }
    }
}

impl Display for BoxScoreLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { ordinal, name, active, shooting, points, minutes, others } = self;
        writeln!(f, "### `{ordinal}` {name}{court}", court = if *active { " :green_circle:" } else { "" })?;
        let shooting = shooting
            .iter()
            .map(|(made, makes, attempts)| format!("{prefix}: **{makes}**/{attempts}", prefix = shooting_prefix(*made)))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(f, "> {shooting} | **{points}** PTS | **{minutes}** MIN", minutes = tenths(*minutes))?;
        if !others.is_empty() {
            let others = others.iter().map(|(label, count)| format!("{label}: **{count}**")).collect::<Vec<_>>().join(" | ");
            writeln!(f, "> {others}")?;
        }
        Ok(())
    }
}

fn shooting_prefix(made: StatKind) -> &'static str {
    match made {
        StatKind::ThreeMade => "3PT",
        StatKind::FtMade => "FT",
        _ => "FG",
    }
}
