use std::collections::BTreeMap;
use serde::Serialize;
use crate::engine::player::{Player, PlayerId};
use crate::engine::roster::Roster;
use crate::util::stat::StatKind;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub stats: BTreeMap<String, u32>,
    pub is_active: bool,
    pub minutes: f64,
}

impl PlayerSnapshot {
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_owned(),
            stats: player.ledger().iter().map(|(label, count)| (label.to_owned(), count)).collect(),
            is_active: player.clock().is_active(),
            minutes: player.clock().minutes(),
        }
    }

    pub fn stat(&self, label: &str) -> u32 {
        self.stats.get(label).copied().unwrap_or(0)
    }

    pub fn stat_kind(&self, kind: StatKind) -> u32 {
        self.stat(kind.label())
    }
}

/// Read-only roster state in display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RosterSnapshot {
    players: Vec<PlayerSnapshot>,
}

impl RosterSnapshot {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            players: roster.iter().map(PlayerSnapshot::from_player).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&PlayerSnapshot> {
        self.players.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerSnapshot> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
