//! Learned artifact bundle.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::BrandBucket;

/// Statistics learned from a training partition.
///
/// Ordered maps and sets keep the serialized form byte-deterministic.
/// Count and median maps may be absent from a persisted document and are
/// then read back empty; every other field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureArtifacts {
    /// Training occurrences per normalized brand, `"unknown"` included.
    #[serde(default)]
    pub brand_counts: BTreeMap<String, u64>,
    /// Training occurrences per bottom-level category.
    #[serde(default)]
    pub cat3_counts: BTreeMap<String, u64>,
    /// Brands with count below `min_brand_low`.
    pub rare_low_brands: BTreeSet<String>,
    /// Brands with count in `[min_brand_low, min_brand_mid)`.
    pub rare_mid_brands: BTreeSet<String>,
    /// Bottom-level categories with count below `min_cat3`.
    pub rare_cat3: BTreeSet<String>,
    /// The most frequent brands.
    pub top_brands: BTreeSet<String>,
    /// Median valid training price per top-level category.
    #[serde(default)]
    pub cat1_median_price: BTreeMap<String, f64>,
    /// Median of all valid training prices, 0.0 when there were none.
    pub global_median_price: f64,
}

impl FeatureArtifacts {
    /// Training count of a brand, zero when unseen.
    #[must_use]
    pub fn brand_count(&self, brand: &str) -> u64 {
        self.brand_counts.get(brand).copied().unwrap_or(0)
    }

    /// Rarity bucket of a brand.
    ///
    /// The low check wins over the mid check. A brand absent from the
    /// training counts has an implicit count of zero and lands in
    /// [`BrandBucket::Other`].
    #[must_use]
    pub fn brand_bucket(&self, brand: &str) -> BrandBucket {
        if self.rare_low_brands.contains(brand) || !self.brand_counts.contains_key(brand) {
            BrandBucket::Other
        } else if self.rare_mid_brands.contains(brand) {
            BrandBucket::Mid
        } else {
            BrandBucket::Frequent
        }
    }

    /// Whether a brand is among the most frequent training brands.
    #[must_use]
    pub fn is_popular(&self, brand: &str) -> bool {
        self.top_brands.contains(brand)
    }

    /// Whether a bottom-level category collapses to `__other_cat3__`.
    #[must_use]
    pub fn is_rare_cat3(&self, cat3: &str) -> bool {
        self.rare_cat3.contains(cat3)
    }

    /// Price anchor for a top-level category, falling back to the global median.
    #[must_use]
    pub fn price_anchor(&self, cat1: &str) -> f64 {
        self.cat1_median_price.get(cat1).copied().unwrap_or(self.global_median_price)
    }

    /// Whether the two brand rarity sets share a member.
    #[must_use]
    pub fn rarity_sets_overlap(&self) -> bool {
        !self.rare_low_brands.is_disjoint(&self.rare_mid_brands)
    }
}
