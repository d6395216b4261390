//! Medians over valid prices.

use std::collections::BTreeMap;

/// Median of the finite values in `values`.
///
/// Even-length inputs average the two middle values. Returns `None` when no
/// finite value is present.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut valid: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if valid.is_empty() {
        return None;
    }

    valid.sort_by(f64::total_cmp);

    let n = valid.len();
    let mid = n / 2;
    if n % 2 == 0 { Some((valid[mid - 1] + valid[mid]) / 2.0) } else { Some(valid[mid]) }
}

/// Median of the valid values in each group.
///
/// Rows with a missing or non-finite value are skipped; groups left with no
/// valid value are omitted from the result.
#[must_use]
pub fn group_medians<S: AsRef<str>>(keys: &[S], values: &[Option<f64>]) -> BTreeMap<String, f64> {
    debug_assert_eq!(keys.len(), values.len());

    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (key, value) in keys.iter().zip(values) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            groups.entry(key.as_ref()).or_default().push(v);
        }
    }

    groups
        .into_iter()
        .filter_map(|(key, group)| median(&group).map(|m| (key.to_string(), m)))
        .collect()
}
