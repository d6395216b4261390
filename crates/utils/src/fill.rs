//! Null-safety pass over engineered columns.

use polars::prelude::*;

/// Fill residual nulls in engineered columns.
///
/// Columns in `categorical` are filled with `placeholder`, columns in
/// `numeric` with zero. Listed columns absent from `df` are skipped and every
/// other column is left untouched.
///
/// # Arguments
/// * `df` - Input DataFrame
/// * `categorical` - String columns to fill
/// * `numeric` - Numeric columns to fill
/// * `placeholder` - Replacement for missing strings
///
/// # Errors
/// Returns `PolarsError` if a fill cannot be applied to a column's dtype.
pub fn fill_residual_nulls(
    df: DataFrame,
    categorical: &[&str],
    numeric: &[&str],
    placeholder: &str,
) -> PolarsResult<DataFrame> {
    let present = |name: &&str| df.column(name).is_ok();

    let mut exprs: Vec<Expr> = categorical
        .iter()
        .copied()
        .filter(present)
        .map(|name| col(name).fill_null(lit(placeholder)).alias(name))
        .collect();
    exprs.extend(
        numeric.iter().copied().filter(present).map(|name| col(name).fill_null(lit(0)).alias(name)),
    );

    if exprs.is_empty() {
        return Ok(df);
    }

    df.lazy().with_columns(exprs).collect()
}
