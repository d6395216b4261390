//! Brand rarity buckets.

use derive_more::Display;

/// Discretization of a brand's training frequency.
///
/// The `Display` form is the label written to the `brand_bucket` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BrandBucket {
    /// Seen fewer than `min_brand_low` times, or never seen.
    #[display("__other__")]
    Other,
    /// Seen at least `min_brand_low` but fewer than `min_brand_mid` times.
    #[display("__mid__")]
    Mid,
    /// Seen at least `min_brand_mid` times.
    #[display("__freq__")]
    Frequent,
}

impl BrandBucket {
    /// Whether brands in this bucket are replaced by their label.
    #[must_use]
    pub const fn is_rare(self) -> bool {
        matches!(self, Self::Other | Self::Mid)
    }
}
