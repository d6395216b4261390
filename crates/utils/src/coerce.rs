//! Permissive numeric coercion.

use polars::prelude::*;

/// Read a column as floats, treating non-numeric and NaN entries as missing.
///
/// Returns `None` when the column is absent from `df`.
///
/// # Errors
/// Returns `PolarsError` if the column dtype cannot be cast to floats at all.
pub fn coerce_numeric(df: &DataFrame, name: &str) -> PolarsResult<Option<Vec<Option<f64>>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };

    let floats = column.cast(&DataType::Float64)?;
    let values = floats.f64()?.into_iter().map(|v| v.filter(|x| !x.is_nan())).collect();
    Ok(Some(values))
}

/// Truncate coerced values to integer codes, mapping missing to zero.
#[must_use]
pub fn to_ordinal(values: &[Option<f64>]) -> Vec<i32> {
    values.iter().map(|v| v.filter(|x| x.is_finite()).map_or(0, |x| x as i32)).collect()
}
