use crate::util::stat::StatKind;

/// What a "made" shot also counts toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DerivedRule {
    pub made: StatKind,
    pub secondary: &'static [(StatKind, u32)],
}

/// The complete scoring ruleset. Nothing else writes to `Points`, and nothing
/// else writes an attempt as a side effect.
pub const RULE_TABLE: [DerivedRule; 3] = [
    DerivedRule {
        made: StatKind::FgMade,
        secondary: &[(StatKind::FgAttempt, 1), (StatKind::Points, 2)],
    },
    DerivedRule {
        made: StatKind::ThreeMade,
        secondary: &[(StatKind::ThreeAttempt, 1), (StatKind::Points, 3)],
    },
    DerivedRule {
        made: StatKind::FtMade,
        secondary: &[(StatKind::FtAttempt, 1), (StatKind::Points, 1)],
    },
];

pub fn secondary_increments(kind: StatKind) -> &'static [(StatKind, u32)] {
    RULE_TABLE
        .iter()
        .find(|rule| rule.made == kind)
        .map(|rule| rule.secondary)
        .unwrap_or(&[])
}

/// Points implied by the made counters, independent of the stored `Points` counter.
pub fn expected_points(count: impl Fn(StatKind) -> u32) -> u32 {
    RULE_TABLE
        .iter()
        .map(|rule| {
            let per_make = rule
                .secondary
                .iter()
                .filter(|(kind, _)| *kind == StatKind::Points)
                .map(|(_, amount)| *amount)
                .sum::<u32>();
            count(rule.made) * per_make
        })
        .sum()
}
