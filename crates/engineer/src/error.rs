//! Error types for the feature learner.

use pricefeat_primitives::ConfigError;
use pricefeat_text::TextError;
use pricefeat_traits::EstimatorError;

/// Errors that can occur while building, persisting or restoring a
/// [`FeatureEngineer`](crate::FeatureEngineer).
#[derive(Debug, thiserror::Error)]
pub enum EngineerError {
    /// Estimator error, including use before fit.
    #[error("estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Keyword patterns could not be compiled.
    #[error("text error: {0}")]
    Text(#[from] TextError),

    /// A persisted artifact document is malformed or inconsistent.
    #[error("corrupt artifact: {0}")]
    CorruptArtifact(String),

    /// The learned state could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Filesystem error while saving or loading.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EngineerError {
    /// Returns whether this error came from using an unfitted learner.
    #[must_use]
    pub const fn is_not_fitted(&self) -> bool {
        matches!(self, Self::Estimator(EstimatorError::NotFitted))
    }
}
