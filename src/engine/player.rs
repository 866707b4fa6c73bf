use std::fmt::{Display, Formatter};
use serde::Serialize;
use crate::engine::ledger::StatLedger;
use crate::engine::substitution::SubstitutionClock;

/// Stable identity, independent of display name and roster position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    ledger: StatLedger,
    clock: SubstitutionClock,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            ledger: StatLedger::new(),
            clock: SubstitutionClock::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) -> String {
        std::mem::replace(&mut self.name, name)
    }

    pub fn ledger(&self) -> &StatLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut StatLedger {
        &mut self.ledger
    }

    pub fn clock(&self) -> &SubstitutionClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SubstitutionClock {
        &mut self.clock
    }
}
