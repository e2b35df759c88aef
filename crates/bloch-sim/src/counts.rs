//! Measurement histograms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Measurement counts: bitstring to number of times observed.
///
/// Bitstrings have one character per qubit, qubit 0 first. Outcomes that were
/// never observed are absent. Keys iterate in lexicographic order, which keeps
/// serialized output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: BTreeMap<String, u32>,
}

impl Counts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` more observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u32) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Number of times `bitstring` was observed.
    pub fn get(&self, bitstring: &str) -> u32 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of shots.
    pub fn total_shots(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` in bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u32)> {
        self.counts.iter()
    }

    /// Outcomes sorted by descending count, ties broken by bitstring.
    pub fn sorted(&self) -> Vec<(&String, &u32)> {
        let mut sorted: Vec<_> = self.counts.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }

    /// The most frequent outcome.
    pub fn most_frequent(&self) -> Option<(&String, &u32)> {
        self.sorted().into_iter().next()
    }

    /// Empirical probability of each observed outcome.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        let total = f64::from(self.total_shots());
        self.counts
            .iter()
            .map(|(k, &v)| (k.clone(), f64::from(v) / total))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a String, &'a u32);
    type IntoIter = std::collections::btree_map::Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl FromIterator<(String, u32)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates() {
        let mut counts = Counts::new();
        counts.insert("01", 3);
        counts.insert("01", 2);
        counts.insert("10", 1);
        assert_eq!(counts.get("01"), 5);
        assert_eq!(counts.get("11"), 0);
        assert_eq!(counts.total_shots(), 6);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_sorted_and_most_frequent() {
        let counts: Counts = [("00".to_string(), 4), ("11".to_string(), 4), ("01".to_string(), 9)]
            .into_iter()
            .collect();
        let sorted = counts.sorted();
        let order: Vec<&str> = sorted.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["01", "00", "11"]);
        assert_eq!(counts.most_frequent(), Some((&"01".to_string(), &9)));
        assert!(Counts::new().most_frequent().is_none());
    }

    #[test]
    fn test_probabilities() {
        let counts: Counts = [("0".to_string(), 1), ("1".to_string(), 3)].into_iter().collect();
        let probs = counts.probabilities();
        assert!((probs["0"] - 0.25).abs() < 1e-12);
        assert!((probs["1"] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let counts: Counts = [("11".to_string(), 2), ("00".to_string(), 3)].into_iter().collect();
        assert_eq!(serde_json::to_string(&counts).unwrap(), r#"{"00":3,"11":2}"#);
        let back: Counts = serde_json::from_str(r#"{"00":3,"11":2}"#).unwrap();
        assert_eq!(back, counts);
    }
}
