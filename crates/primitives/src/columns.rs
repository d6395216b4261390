//! Column names and literal labels of the listing table.

/// Listing title.
pub const NAME: &str = "name";
/// Free-text listing description.
pub const ITEM_DESCRIPTION: &str = "item_description";
/// Brand name.
pub const BRAND_NAME: &str = "brand_name";
/// Slash-delimited category path.
pub const CATEGORY_NAME: &str = "category_name";
/// Ordinal item condition.
pub const ITEM_CONDITION_ID: &str = "item_condition_id";
/// Listing price.
pub const PRICE: &str = "price";

/// Top-level category.
pub const CAT1: &str = "cat1";
/// Mid-level category.
pub const CAT2: &str = "cat2";
/// Bottom-level category.
pub const CAT3: &str = "cat3";
/// Whitespace token count of the name.
pub const NAME_LEN: &str = "name_len";
/// Whitespace token count of the description.
pub const DESC_LEN: &str = "desc_len";
/// Distinct-token ratio of the description.
pub const DESC_UNIQUE_RATIO: &str = "desc_unique_ratio";
/// New-item keyword flag.
pub const IS_NEW: &str = "is_new";
/// Vintage keyword flag.
pub const IS_VINTAGE: &str = "is_vintage";
/// Year mention flag.
pub const YEAR_PRESENT: &str = "year_present";
/// Brand rarity bucket label.
pub const BRAND_BUCKET: &str = "brand_bucket";
/// Log-scaled training frequency of the brand.
pub const BRAND_FREQ: &str = "brand_freq";
/// Popular brand flag.
pub const IS_POPULAR_BRAND: &str = "is_popular_brand";
/// Top-level category crossed with the brand bucket.
pub const CAT1_BRAND_BUCKET: &str = "cat1_brand_bucket";
/// Training median price of the row's top-level category.
pub const CAT1_MEDIAN_PRICE: &str = "cat1_median_price";
/// `ln(1 + price)`.
pub const LOG_PRICE: &str = "log_price";

/// Categorical columns filled with [`UNKNOWN`] by the final null-safety pass.
pub const CATEGORICAL_FILL_COLUMNS: [&str; 4] = [CAT1, CAT2, CAT3, BRAND_NAME];

/// Engineered numeric columns filled with zero by the final null-safety pass.
///
/// `log_price` is absent on purpose: a missing price stays missing.
pub const NUMERIC_FILL_COLUMNS: [&str; 9] = [
    NAME_LEN,
    DESC_LEN,
    DESC_UNIQUE_RATIO,
    IS_NEW,
    IS_VINTAGE,
    YEAR_PRESENT,
    BRAND_FREQ,
    IS_POPULAR_BRAND,
    CAT1_MEDIAN_PRICE,
];

/// Placeholder for missing text and category levels.
pub const UNKNOWN: &str = "unknown";
/// Replacement for rare bottom-level categories.
pub const OTHER_CAT3: &str = "__other_cat3__";
/// Interaction suffix used when brand bucketing is disabled.
pub const NO_BUCKET: &str = "_no_bucket_";
