//! Applying a fitted artifact bundle to a listing table.

use polars::prelude::*;
use pricefeat_primitives::{
    BrandBucket, FeatureArtifacts, FeatureConfig,
    columns::{
        BRAND_BUCKET, BRAND_FREQ, BRAND_NAME, CAT1, CAT1_BRAND_BUCKET, CAT1_MEDIAN_PRICE, CAT2,
        CAT3, CATEGORICAL_FILL_COLUMNS, CATEGORY_NAME, DESC_LEN, DESC_UNIQUE_RATIO,
        IS_NEW, IS_POPULAR_BRAND, IS_VINTAGE, ITEM_CONDITION_ID, ITEM_DESCRIPTION, LOG_PRICE, NAME,
        NAME_LEN, NO_BUCKET, NUMERIC_FILL_COLUMNS, OTHER_CAT3, PRICE, UNKNOWN, YEAR_PRESENT,
    },
};
use pricefeat_text::{
    FlagPatterns, contains_year, normalize_column, split_category, token_count,
    unique_token_ratio,
};
use pricefeat_utils::{coerce_numeric, fill_residual_nulls, to_ordinal};

/// Produce the enriched table for `df`.
///
/// Reads the bundle only. The steps run in a fixed order because brand
/// replacement rewrites `brand_name` before the popularity flag reads it.
pub(crate) fn enrich(
    config: &FeatureConfig,
    artifacts: &FeatureArtifacts,
    patterns: &FlagPatterns,
    df: &DataFrame,
) -> PolarsResult<DataFrame> {
    // Normalization, identical to fit.
    let names = normalize_column(df, NAME)?;
    let descriptions = normalize_column(df, ITEM_DESCRIPTION)?;
    let mut brands = normalize_column(df, BRAND_NAME)?;
    let categories = normalize_column(df, CATEGORY_NAME)?;

    let n = df.height();
    let mut cat1 = Vec::with_capacity(n);
    let mut cat2 = Vec::with_capacity(n);
    let mut cat3 = Vec::with_capacity(n);
    for path in &categories {
        let levels = split_category(path);
        cat1.push(levels.cat1);
        cat2.push(levels.cat2);
        cat3.push(levels.cat3);
    }

    // Text features.
    let name_len: Vec<i32> = names.iter().map(|t| token_count(t) as i32).collect();
    let desc_len: Vec<i32> = descriptions.iter().map(|t| token_count(t) as i32).collect();
    let desc_unique_ratio: Vec<f64> =
        descriptions.iter().map(|t| unique_token_ratio(t)).collect();

    let mut is_new = Vec::with_capacity(n);
    let mut is_vintage = Vec::with_capacity(n);
    let mut year_present = Vec::with_capacity(n);
    for (name, description) in names.iter().zip(&descriptions) {
        let fields = [name.as_str(), description.as_str()];
        is_new.push(i32::from(patterns.new.matches_any(&fields)));
        is_vintage.push(i32::from(patterns.vintage.matches_any(&fields)));
        year_present.push(i32::from(contains_year(name) || contains_year(description)));
    }

    // Brand frequency and rarity, read from the normalized brand.
    let brand_freq: Vec<f64> =
        brands.iter().map(|b| (artifacts.brand_count(b) as f64).ln_1p()).collect();
    let buckets: Vec<BrandBucket> = brands.iter().map(|b| artifacts.brand_bucket(b)).collect();

    if config.replace_rare_brands {
        for (brand, bucket) in brands.iter_mut().zip(&buckets) {
            if bucket.is_rare() {
                *brand = bucket.to_string();
            }
        }
    }

    // Popularity reads the possibly replaced brand.
    let is_popular_brand: Vec<i32> =
        brands.iter().map(|b| i32::from(artifacts.is_popular(b))).collect();

    for level in &mut cat3 {
        if artifacts.is_rare_cat3(level) {
            *level = OTHER_CAT3.to_string();
        }
    }

    let cat1_brand_bucket: Vec<String> = if config.add_brand_bucket {
        cat1.iter().zip(&buckets).map(|(c, b)| format!("{c}|{b}")).collect()
    } else {
        cat1.iter().map(|c| format!("{c}|{NO_BUCKET}")).collect()
    };

    let condition = coerce_numeric(df, ITEM_CONDITION_ID)?.map(|values| to_ordinal(&values));
    let cat1_median_price: Vec<f64> = cat1.iter().map(|c| artifacts.price_anchor(c)).collect();
    let price = if config.make_log_price { coerce_numeric(df, PRICE)? } else { None };

    let mut out = df.clone();
    out.with_column(Column::new(NAME.into(), names))?;
    out.with_column(Column::new(ITEM_DESCRIPTION.into(), descriptions))?;
    out.with_column(Column::new(BRAND_NAME.into(), brands))?;
    out.with_column(Column::new(CATEGORY_NAME.into(), categories))?;
    out.with_column(Column::new(CAT1.into(), cat1))?;
    out.with_column(Column::new(CAT2.into(), cat2))?;
    out.with_column(Column::new(CAT3.into(), cat3))?;
    out.with_column(Column::new(NAME_LEN.into(), name_len))?;
    out.with_column(Column::new(DESC_LEN.into(), desc_len))?;
    out.with_column(Column::new(DESC_UNIQUE_RATIO.into(), desc_unique_ratio))?;
    out.with_column(Column::new(IS_NEW.into(), is_new))?;
    out.with_column(Column::new(IS_VINTAGE.into(), is_vintage))?;
    out.with_column(Column::new(YEAR_PRESENT.into(), year_present))?;
    if config.add_brand_bucket {
        let labels: Vec<String> = buckets.iter().map(ToString::to_string).collect();
        out.with_column(Column::new(BRAND_BUCKET.into(), labels))?;
    }
    out.with_column(Column::new(BRAND_FREQ.into(), brand_freq))?;
    out.with_column(Column::new(IS_POPULAR_BRAND.into(), is_popular_brand))?;
    out.with_column(Column::new(CAT1_BRAND_BUCKET.into(), cat1_brand_bucket))?;
    if let Some(codes) = condition {
        out.with_column(Column::new(ITEM_CONDITION_ID.into(), codes))?;
    }
    out.with_column(Column::new(CAT1_MEDIAN_PRICE.into(), cat1_median_price))?;
    if let Some(prices) = price {
        // Prices at or below -1 have no finite log and count as missing.
        let log_price: Vec<Option<f64>> =
            prices.iter().map(|p| p.map(f64::ln_1p).filter(|v| v.is_finite())).collect();
        out.with_column(Column::new(PRICE.into(), prices))?;
        out.with_column(Column::new(LOG_PRICE.into(), log_price))?;
    }

    fill_residual_nulls(out, &CATEGORICAL_FILL_COLUMNS, &NUMERIC_FILL_COLUMNS, UNKNOWN)
}
