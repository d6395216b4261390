//! Occurrence counting and threshold partitions.

use std::collections::{BTreeMap, BTreeSet};

/// Count occurrences of each distinct value.
#[must_use]
pub fn frequency_counts<S: AsRef<str>>(values: &[S]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Keys whose count is strictly below `threshold`.
#[must_use]
pub fn below(counts: &BTreeMap<String, u64>, threshold: u64) -> BTreeSet<String> {
    counts.iter().filter(|&(_, &c)| c < threshold).map(|(k, _)| k.clone()).collect()
}

/// Keys whose count lies in `[low, high)`.
#[must_use]
pub fn in_range(counts: &BTreeMap<String, u64>, low: u64, high: u64) -> BTreeSet<String> {
    counts.iter().filter(|&(_, &c)| low <= c && c < high).map(|(k, _)| k.clone()).collect()
}

/// The `n` most frequent keys.
///
/// Ranked by count descending; equal counts are ranked alphabetically, so the
/// selection at the boundary is deterministic.
#[must_use]
pub fn top_n(counts: &BTreeMap<String, u64>, n: usize) -> BTreeSet<String> {
    let mut ranked: Vec<(&String, u64)> = counts.iter().map(|(k, &c)| (k, c)).collect();
    // BTreeMap iteration is already alphabetical and the sort is stable.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(k, _)| k.clone()).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn counts_include_unknown() {
        let result = frequency_counts(&["nike", "unknown", "nike", "unknown", "acme"]);
        assert_eq!(result, counts(&[("acme", 1), ("nike", 2), ("unknown", 2)]));
    }

    #[test]
    fn counts_empty() {
        assert!(frequency_counts::<&str>(&[]).is_empty());
    }

    #[test]
    fn partition_thresholds() {
        let c =
            counts(&[("rare", 5), ("mid", 30), ("freq", 100), ("edge_low", 10), ("edge_mid", 50)]);
        let low = below(&c, 10);
        let mid = in_range(&c, 10, 50);

        assert!(low.contains("rare"));
        assert!(mid.contains("mid"));
        assert!(mid.contains("edge_low"));
        assert!(!low.contains("freq") && !mid.contains("freq"));
        assert!(!mid.contains("edge_mid"));
        assert!(low.is_disjoint(&mid));
    }

    #[test]
    fn inverted_thresholds_leave_mid_empty() {
        let c = counts(&[("a", 5), ("b", 30)]);
        assert!(in_range(&c, 50, 10).is_empty());
    }

    #[rstest]
    #[case(0, &[])]
    #[case(1, &["b"])]
    #[case(2, &["b", "a"])]
    #[case(3, &["b", "a", "c"])]
    #[case(10, &["a", "b", "c", "d"])]
    fn top_n_by_count(#[case] n: usize, #[case] expected: &[&str]) {
        let c = counts(&[("a", 5), ("b", 9), ("c", 5), ("d", 1)]);
        let expected: BTreeSet<String> = expected.iter().map(|s| (*s).to_string()).collect();
        assert_eq!(top_n(&c, n), expected);
    }

    #[test]
    fn top_n_ties_are_alphabetical() {
        let c = counts(&[("zara", 3), ("adidas", 3), ("mango", 3), ("nike", 7)]);
        let top = top_n(&c, 2);
        assert!(top.contains("nike"));
        assert!(top.contains("adidas"));
        assert!(!top.contains("mango"));
        assert!(!top.contains("zara"));
    }
}
