use core::str::FromStr;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown stat kind '{0}'")]
pub struct UnknownStat(pub String);

/// A recognized kind of countable event. Anything outside this set is still
/// recordable by its raw label, it just never triggers derived counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    FgAttempt,
    FgMade,
    ThreeAttempt,
    ThreeMade,
    FtAttempt,
    FtMade,
    Rebound,
    Assist,
    Steal,
    Block,
    Foul,
    Points,
}

impl StatKind {
    pub const MAX_LABEL_WIDTH: usize = 11;

    /// The kinds offered as buttons, in display order. `Points` is derived and never offered.
    pub const BUTTONS: [Self; 11] = [
        Self::FgAttempt,
        Self::FgMade,
        Self::ThreeAttempt,
        Self::ThreeMade,
        Self::FtAttempt,
        Self::FtMade,
        Self::Rebound,
        Self::Assist,
        Self::Steal,
        Self::Block,
        Self::Foul,
    ];

    pub const ALL: [Self; 12] = [
        Self::FgAttempt,
        Self::FgMade,
        Self::ThreeAttempt,
        Self::ThreeMade,
        Self::FtAttempt,
        Self::FtMade,
        Self::Rebound,
        Self::Assist,
        Self::Steal,
        Self::Block,
        Self::Foul,
        Self::Points,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::FgAttempt => "FG Attempt",
            Self::FgMade => "FG Made",
            Self::ThreeAttempt => "3PT Attempt",
            Self::ThreeMade => "3PT Made",
            Self::FtAttempt => "FT Attempt",
            Self::FtMade => "FT Made",
            Self::Rebound => "Rebound",
            Self::Assist => "Assist",
            Self::Steal => "Steal",
            Self::Block => "Block",
            Self::Foul => "Foul",
            Self::Points => "Points",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::FgAttempt => "FGA",
            Self::FgMade => "FGM",
            Self::ThreeAttempt => "3PA",
            Self::ThreeMade => "3PM",
            Self::FtAttempt => "FTA",
            Self::FtMade => "FTM",
            Self::Rebound => "REB",
            Self::Assist => "AST",
            Self::Steal => "STL",
            Self::Block => "BLK",
            Self::Foul => "PF",
            Self::Points => "PTS",
        }
    }

    /// Exact label match, the way the ledger keys its counters.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Counters that only the rule table may write.
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Points)
    }

    /// The (made, attempt) shooting pairs, in box score order.
    pub const SHOOTING_PAIRS: [(Self, Self); 3] = [
        (Self::FgMade, Self::FgAttempt),
        (Self::ThreeMade, Self::ThreeAttempt),
        (Self::FtMade, Self::FtAttempt),
    ];
}

impl FromStr for StatKind {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s) || kind.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStat(s.to_owned()))
    }
}

impl Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
