//! Learning the artifact bundle from a training partition.

use polars::prelude::*;
use pricefeat_primitives::{
    FeatureArtifacts, FeatureConfig,
    columns::{BRAND_NAME, CATEGORY_NAME, PRICE},
};
use pricefeat_stats::{below, frequency_counts, group_medians, in_range, median, top_n};
use pricefeat_text::{normalize_column, split_category};
use pricefeat_utils::coerce_numeric;

/// Derive every learned statistic from `train`.
///
/// Only brand, category and price feed the bundle; no enriched table is
/// produced here.
pub(crate) fn learn_artifacts(
    config: &FeatureConfig,
    train: &DataFrame,
) -> PolarsResult<FeatureArtifacts> {
    let brands = normalize_column(train, BRAND_NAME)?;
    let categories = normalize_column(train, CATEGORY_NAME)?;

    let mut cat1 = Vec::with_capacity(categories.len());
    let mut cat3 = Vec::with_capacity(categories.len());
    for path in &categories {
        let levels = split_category(path);
        cat1.push(levels.cat1);
        cat3.push(levels.cat3);
    }

    let brand_counts = frequency_counts(&brands);
    let cat3_counts = frequency_counts(&cat3);

    let rare_low_brands = below(&brand_counts, config.min_brand_low);
    let rare_mid_brands = in_range(&brand_counts, config.min_brand_low, config.min_brand_mid);
    let rare_cat3 = below(&cat3_counts, config.min_cat3);
    let top_brands = top_n(&brand_counts, config.top_n_popular_brands);

    // Invalid prices are excluded from the medians, never zero-filled.
    let prices = coerce_numeric(train, PRICE)?.unwrap_or_else(|| vec![None; train.height()]);
    let cat1_median_price = group_medians(&cat1, &prices);
    let valid: Vec<f64> = prices.iter().flatten().copied().collect();
    let global_median_price = median(&valid).unwrap_or(0.0);

    Ok(FeatureArtifacts {
        brand_counts,
        cat3_counts,
        rare_low_brands,
        rare_mid_brands,
        rare_cat3,
        top_brands,
        cat1_median_price,
        global_median_price,
    })
}
