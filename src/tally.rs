//! Per-category occurrence counts
//!
//! A tally is owned by the pass that fills it. Iteration follows insertion
//! order: vocabulary order for seeded tallies, first-seen order otherwise.

use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningTally {
    counts: IndexMap<String, usize>,
}

impl RunningTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start every term at zero so totals follow the vocabulary order
    pub fn seeded<'a>(terms: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            counts: terms.into_iter().map(|t| (t.clone(), 0)).collect(),
        }
    }

    pub fn record(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Terms with a non-zero count, in iteration order
    pub fn nonzero(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .filter(|(_, &c)| c > 0)
            .map(|(t, &c)| (t.as_str(), c))
    }

    /// The highest count; on a tie the earliest entry wins
    pub fn most_mentioned(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (term, count) in self.nonzero() {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((term, count));
            }
        }
        best
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut tally = RunningTally::new();
        tally.record("10");
        tally.record("10");
        tally.record("20");
        assert_eq!(tally.count("10"), 2);
        assert_eq!(tally.count("20"), 1);
        assert_eq!(tally.count("30"), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_most_mentioned_first_wins_ties() {
        let mut tally = RunningTally::new();
        for value in ["2019", "50", "50", "2019", "7"] {
            tally.record(value);
        }
        assert_eq!(tally.most_mentioned(), Some(("2019", 2)));
    }

    #[test]
    fn test_most_mentioned_later_strictly_greater_wins() {
        let mut tally = RunningTally::new();
        for value in ["a", "b", "b"] {
            tally.record(value);
        }
        assert_eq!(tally.most_mentioned(), Some(("b", 2)));
    }

    #[test]
    fn test_seeded_tally_skips_zero_counts() {
        let terms = vec!["armagh".to_string(), "belfast".to_string(), "newry".to_string()];
        let mut tally = RunningTally::seeded(&terms);
        tally.record("newry");
        tally.record("armagh");

        let nonzero: Vec<(&str, usize)> = tally.nonzero().collect();
        assert_eq!(nonzero, vec![("armagh", 1), ("newry", 1)]);
    }

    #[test]
    fn test_empty_tally() {
        let tally = RunningTally::seeded(&["belfast".to_string()]);
        assert!(tally.is_empty());
        assert_eq!(tally.most_mentioned(), None);
        assert_eq!(tally.nonzero().count(), 0);
    }
}
