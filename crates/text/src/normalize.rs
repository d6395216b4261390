//! Text and category normalization.

use polars::prelude::*;
use pricefeat_primitives::columns::UNKNOWN;

/// Normalize one raw value: missing becomes `"unknown"`, otherwise the value
/// is trimmed and lowercased.
#[must_use]
pub fn normalize_value(value: Option<&str>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.trim().to_lowercase())
}

/// Normalize a column of any dtype to lowercase, trimmed strings.
///
/// A column absent from `df` is treated as entirely missing.
///
/// # Errors
/// Returns `PolarsError` if the column cannot be cast to strings.
pub fn normalize_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![UNKNOWN.to_string(); df.height()]);
    };

    let text = column.cast(&DataType::String)?;
    Ok(text.str()?.into_iter().map(normalize_value).collect())
}

/// The three levels of a slash-delimited category path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLevels {
    /// Top level.
    pub cat1: String,
    /// Mid level.
    pub cat2: String,
    /// Bottom level.
    pub cat3: String,
}

/// Split a normalized category path into three levels.
///
/// Splitting stops after the second `/`, so the bottom level keeps any
/// further separators. Absent or blank levels become `"unknown"`.
#[must_use]
pub fn split_category(path: &str) -> CategoryLevels {
    let mut parts = path.splitn(3, '/');
    let mut level =
        || parts.next().filter(|p| !p.trim().is_empty()).unwrap_or(UNKNOWN).to_string();

    let cat1 = level();
    let cat2 = level();
    let cat3 = level();
    CategoryLevels { cat1, cat2, cat3 }
}
