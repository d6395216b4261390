//! The listing feature learner.

use polars::prelude::*;
use pricefeat_primitives::{FeatureArtifacts, FeatureConfig};
use pricefeat_text::FlagPatterns;
use pricefeat_traits::{Estimator, EstimatorError};
use tracing::{debug, info};

use crate::{EngineerError, fit::learn_artifacts, transform::enrich};

/// Learned state: the artifact bundle plus the keyword patterns compiled from
/// the configuration that produced it.
#[derive(Debug, Clone)]
struct Fitted {
    artifacts: FeatureArtifacts,
    patterns: FlagPatterns,
}

/// Fit-on-train, transform-anything feature learner for listing tables.
///
/// `fit` derives brand and category frequencies, rarity sets, popular brands
/// and per-category price anchors from a training partition. `transform`
/// applies them to any partition without touching the learned state, so a
/// fitted learner can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct FeatureEngineer {
    config: FeatureConfig,
    state: Option<Fitted>,
}

impl FeatureEngineer {
    /// Create an unfitted learner with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FeatureConfig::default())
    }

    /// Create an unfitted learner after validating `config`.
    ///
    /// # Errors
    /// Returns `EngineerError::Config` if a rarity threshold is zero.
    pub fn try_with_config(config: FeatureConfig) -> Result<Self, EngineerError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Rebuild a fitted learner from a configuration and a previously learned
    /// bundle.
    ///
    /// # Errors
    /// Returns `EngineerError` if the configuration is invalid or its keyword
    /// patterns cannot be compiled.
    pub fn from_parts(
        config: FeatureConfig,
        artifacts: FeatureArtifacts,
    ) -> Result<Self, EngineerError> {
        config.validate()?;
        let patterns = FlagPatterns::from_config(&config)?;
        Ok(Self { config, state: Some(Fitted { artifacts, patterns }) })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Get the learned bundle, if fitted.
    #[must_use]
    pub fn artifacts(&self) -> Option<&FeatureArtifacts> {
        self.state.as_ref().map(|s| &s.artifacts)
    }

    pub(crate) fn fitted_artifacts(&self) -> Result<&FeatureArtifacts, EstimatorError> {
        self.artifacts().ok_or(EstimatorError::NotFitted)
    }
}

impl Default for FeatureEngineer {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for FeatureEngineer {
    type Config = FeatureConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config, state: None }
    }

    fn fit(&mut self, train: &DataFrame) -> Result<(), EstimatorError> {
        self.config.validate().map_err(|e| EstimatorError::InvalidConfig(e.to_string()))?;
        let patterns = FlagPatterns::from_config(&self.config)
            .map_err(|e| EstimatorError::InvalidConfig(e.to_string()))?;

        let artifacts = learn_artifacts(&self.config, train)?;

        info!(
            rows = train.height(),
            brands = artifacts.brand_counts.len(),
            rare_low_brands = artifacts.rare_low_brands.len(),
            rare_mid_brands = artifacts.rare_mid_brands.len(),
            rare_cat3 = artifacts.rare_cat3.len(),
            top_brands = artifacts.top_brands.len(),
            global_median_price = artifacts.global_median_price,
            "fitted listing features"
        );

        self.state = Some(Fitted { artifacts, patterns });
        Ok(())
    }

    fn transform(&self, df: &DataFrame) -> Result<DataFrame, EstimatorError> {
        let fitted = self.state.as_ref().ok_or(EstimatorError::NotFitted)?;

        let out = enrich(&self.config, &fitted.artifacts, &fitted.patterns, df)?;
        debug!(rows = out.height(), columns = out.width(), "transformed listings");
        Ok(out)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train() -> DataFrame {
        df! {
            "brand_name" => &["Nike", "nike", "Acme"],
            "category_name" => &["Women/Tops/Blouse", "Men/Shoes/Boots", "Women/Tops/Blouse"],
            "price" => &[Some(10.0), Some(30.0), None],
        }
        .unwrap()
    }

    #[test]
    fn engineer_starts_unfitted() {
        let engineer = FeatureEngineer::new();
        assert!(!engineer.is_fitted());
        assert!(engineer.artifacts().is_none());
        assert_eq!(engineer.config(), &FeatureConfig::default());
    }

    #[test]
    fn transform_before_fit_fails() {
        let engineer = FeatureEngineer::new();
        let err = engineer.transform(&train()).unwrap_err();
        assert!(err.is_not_fitted());
    }

    #[test]
    fn fit_populates_bundle() {
        let mut engineer = FeatureEngineer::new();
        engineer.fit(&train()).unwrap();

        let artifacts = engineer.artifacts().unwrap();
        assert_eq!(artifacts.brand_counts["nike"], 2);
        assert_eq!(artifacts.global_median_price, 20.0);
    }

    #[test]
    fn refit_replaces_bundle() {
        let mut engineer = FeatureEngineer::new();
        engineer.fit(&train()).unwrap();

        let other = df! { "brand_name" => &["zara"] }.unwrap();
        engineer.fit(&other).unwrap();

        let artifacts = engineer.artifacts().unwrap();
        assert!(!artifacts.brand_counts.contains_key("nike"));
        assert_eq!(artifacts.brand_counts["zara"], 1);
    }

    #[test]
    fn try_with_config_validates() {
        let config = FeatureConfig { min_brand_low: 0, ..FeatureConfig::default() };
        assert!(FeatureEngineer::try_with_config(config.clone()).is_err());

        let mut engineer = FeatureEngineer::with_config(config);
        let err = engineer.fit(&train()).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidConfig(_)));
    }

    #[test]
    fn from_parts_is_fitted() {
        let engineer =
            FeatureEngineer::from_parts(FeatureConfig::default(), FeatureArtifacts::default())
                .unwrap();
        assert!(engineer.is_fitted());
        assert!(engineer.transform(&train()).is_ok());
    }

    #[test]
    fn engineer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeatureEngineer>();
    }
}
