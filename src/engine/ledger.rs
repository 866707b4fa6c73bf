use fxhash::FxHashMap;
use crate::util::rules::secondary_increments;
use crate::util::stat::StatKind;

/// Per-player counters keyed by stat label. Keys appear on first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatLedger {
    counts: FxHashMap<String, u32>,
}

impl StatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `label`, then whatever the rule table derives from it.
    pub fn record(&mut self, label: &str) {
        self.bump(label, 1);
        if let Some(kind) = StatKind::from_label(label) {
            for &(secondary, amount) in secondary_increments(kind) {
                self.bump(secondary.label(), amount);
            }
        }
    }

    fn bump(&mut self, label: &str, amount: u32) {
        match self.counts.get_mut(label) {
            Some(count) => *count += amount,
            None => {
                self.counts.insert(label.to_owned(), amount);
            }
        }
    }

    pub fn get(&self, label: &str) -> u32 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn get_kind(&self, kind: StatKind) -> u32 {
        self.get(kind.label())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::rules::expected_points;
    use proptest::prelude::*;

    #[test]
    fn field_goal_made_derives_attempt_and_two_points() {
        let mut ledger = StatLedger::new();
        ledger.record("FG Made");
        assert_eq!(ledger.get("FG Made"), 1);
        assert_eq!(ledger.get("FG Attempt"), 1);
        assert_eq!(ledger.get("Points"), 2);
    }

    #[test]
    fn three_made_derives_attempt_and_three_points() {
        let mut ledger = StatLedger::new();
        ledger.record("3PT Made");
        assert_eq!(ledger.get_kind(StatKind::ThreeMade), 1);
        assert_eq!(ledger.get_kind(StatKind::ThreeAttempt), 1);
        assert_eq!(ledger.get_kind(StatKind::Points), 3);
    }

    #[test]
    fn free_throw_made_derives_attempt_and_one_point() {
        let mut ledger = StatLedger::new();
        ledger.record("FT Made");
        assert_eq!(ledger.get_kind(StatKind::FtMade), 1);
        assert_eq!(ledger.get_kind(StatKind::FtAttempt), 1);
        assert_eq!(ledger.get_kind(StatKind::Points), 1);
    }

    #[test]
    fn plain_counters_touch_only_themselves() {
        let mut ledger = StatLedger::new();
        ledger.record("Rebound");
        ledger.record("FG Attempt");
        ledger.record("Rebound");
        assert_eq!(ledger.get("Rebound"), 2);
        assert_eq!(ledger.get("FG Attempt"), 1);
        assert!(ledger.iter().all(|(label, _)| label != "Points" && label != "FG Made"));
    }

    #[test]
    fn unknown_labels_are_counted_verbatim() {
        let mut ledger = StatLedger::new();
        ledger.record("Charge Taken");
        ledger.record("fg made");
        assert_eq!(ledger.get("Charge Taken"), 1);
        assert_eq!(ledger.get("fg made"), 1);
        let mut labels = ledger.iter().map(|(label, _)| label).collect::<Vec<_>>();
        labels.sort_unstable();
        assert_eq!(labels, ["Charge Taken", "fg made"]);
    }

    fn any_label() -> impl Strategy<Value = String> {
        prop_oneof![
            proptest::sample::select(StatKind::BUTTONS.to_vec()).prop_map(|kind| kind.label().to_owned()),
            "[A-Za-z ]{1,12}",
        ]
    }

    proptest! {
        #[test]
        fn prop_attempts_never_trail_makes(labels in proptest::collection::vec(any_label(), 0..64)) {
            let mut ledger = StatLedger::new();
            for label in &labels {
                ledger.record(label);
                for (made, attempt) in StatKind::SHOOTING_PAIRS {
                    prop_assert!(ledger.get_kind(attempt) >= ledger.get_kind(made));
                }
            }
        }

        #[test]
        fn prop_points_follow_the_formula(labels in proptest::collection::vec(any_label(), 0..64)) {
            let mut ledger = StatLedger::new();
            for label in labels.iter().filter(|label| label.as_str() != "Points") {
                ledger.record(label);
            }
            prop_assert_eq!(ledger.get_kind(StatKind::Points), expected_points(|kind| ledger.get_kind(kind)));
        }

        #[test]
        fn prop_repeated_field_goals(n in 0_u32..200) {
            let mut ledger = StatLedger::new();
            for _ in 0..n {
                ledger.record("FG Made");
            }
            prop_assert_eq!(ledger.get("FG Made"), n);
            prop_assert!(ledger.get("FG Attempt") >= n);
            prop_assert_eq!(ledger.get("Points"), 2 * n);
        }
    }
}
