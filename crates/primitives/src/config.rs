//! Feature learner configuration.

use serde::{Deserialize, Serialize, de};

/// Errors raised while building or validating a [`FeatureConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A rarity threshold was zero.
    #[error("threshold {name} must be positive, got {value}")]
    NonPositiveThreshold {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: u64,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the listing feature learner.
///
/// Fixed at construction and persisted alongside the learned artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Brands seen fewer times than this are bucketed as `__other__`.
    pub min_brand_low: u64,
    /// Brands seen fewer times than this (but at least `min_brand_low`) are `__mid__`.
    pub min_brand_mid: u64,
    /// Third-level categories seen fewer times than this collapse to `__other_cat3__`.
    pub min_cat3: u64,

    /// Emit the `brand_bucket` column.
    pub add_brand_bucket: bool,
    /// Overwrite rare brand names with their bucket label.
    pub replace_rare_brands: bool,
    /// Emit `log_price` when a `price` column is present.
    pub make_log_price: bool,

    /// Number of most frequent brands flagged as popular.
    pub top_n_popular_brands: usize,

    /// Substrings marking a listing as new.
    pub new_keywords: Vec<String>,
    /// Substrings marking a listing as vintage.
    pub vintage_keywords: Vec<String>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            min_brand_low: 10,
            min_brand_mid: 50,
            min_cat3: 50,
            add_brand_bucket: true,
            replace_rare_brands: false,
            make_log_price: true,
            top_n_popular_brands: 100,
            new_keywords: to_owned(&["nwt", "brand new", "new with tags", "sealed", "unworn"]),
            vintage_keywords: to_owned(&["vintage", "retro", "y2k", "90s", "80s"]),
        }
    }
}

impl FeatureConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// Fields absent from the document keep their default value.
    ///
    /// # Errors
    /// Returns `ConfigError` if the document is malformed or fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(overrides) = document else {
            return Err(ConfigError::Parse(de::Error::custom("expected a JSON object")));
        };

        let mut merged = serde_json::to_value(Self::default())?;
        if let Some(base) = merged.as_object_mut() {
            base.extend(overrides);
        }

        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every rarity threshold is positive.
    ///
    /// `min_brand_low < min_brand_mid` is expected but not enforced.
    ///
    /// # Errors
    /// Returns `ConfigError::NonPositiveThreshold` naming the first zero threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("min_brand_low", self.min_brand_low),
            ("min_brand_mid", self.min_brand_mid),
            ("min_cat3", self.min_cat3),
        ];

        match thresholds.into_iter().find(|(_, value)| *value == 0) {
            Some((name, value)) => Err(ConfigError::NonPositiveThreshold { name, value }),
            None => Ok(()),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FeatureConfig::default();
        assert_eq!(config.min_brand_low, 10);
        assert_eq!(config.min_brand_mid, 50);
        assert_eq!(config.min_cat3, 50);
        assert_eq!(config.top_n_popular_brands, 100);
        assert!(config.add_brand_bucket);
        assert!(!config.replace_rare_brands);
        assert!(config.make_log_price);
        assert!(config.new_keywords.contains(&"brand new".to_string()));
        assert!(config.vintage_keywords.contains(&"y2k".to_string()));
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config =
            FeatureConfig::from_json_str(r#"{"min_brand_low": 3, "replace_rare_brands": true}"#)
                .unwrap();
        assert_eq!(config.min_brand_low, 3);
        assert!(config.replace_rare_brands);
        assert_eq!(config.min_brand_mid, 50);
        assert_eq!(config.new_keywords, FeatureConfig::default().new_keywords);
    }

    #[test]
    fn zero_threshold_rejected() {
        let config = FeatureConfig { min_cat3: 0, ..FeatureConfig::default() };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "threshold min_cat3 must be positive, got 0");

        assert!(FeatureConfig::from_json_str(r#"{"min_brand_low": 0}"#).is_err());
    }

    #[test]
    fn non_object_document_rejected() {
        assert!(FeatureConfig::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn wrong_type_rejected() {
        let err = FeatureConfig::from_json_str(r#"{"min_brand_low": "ten"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
