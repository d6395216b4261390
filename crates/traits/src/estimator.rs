//! Fit/transform trait definitions.

use polars::prelude::*;

/// Errors that can occur while fitting or applying an estimator.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// Transform or save requested before fit or load.
    #[error("estimator is not fitted: call fit() on the training partition first")]
    NotFitted,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] PolarsError),
}

impl EstimatorError {
    /// Returns whether this error came from using an unfitted estimator.
    #[must_use]
    pub const fn is_not_fitted(&self) -> bool {
        matches!(self, Self::NotFitted)
    }
}

/// An estimator that learns statistics from a training partition and applies
/// them to arbitrary partitions.
///
/// `fit` takes `&mut self` and `transform` takes `&self`, so a fitted
/// estimator can be shared by concurrent readers while refitting requires
/// exclusive access.
pub trait Estimator: Send + Sync {
    /// Configuration type for this estimator.
    type Config: Default + Clone + Send + Sync;

    /// Create a new, unfitted estimator with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Learn statistics from the training partition, replacing any prior state.
    ///
    /// # Errors
    /// Returns `EstimatorError` if the input cannot be read.
    fn fit(&mut self, train: &DataFrame) -> Result<(), EstimatorError>;

    /// Apply the learned statistics to `df`, returning an enriched copy.
    ///
    /// # Errors
    /// Returns `EstimatorError::NotFitted` before `fit`, or a data error if the
    /// input cannot be read.
    fn transform(&self, df: &DataFrame) -> Result<DataFrame, EstimatorError>;

    /// Returns whether learned state is available.
    fn is_fitted(&self) -> bool;

    /// Fit on `train` and transform it in one call.
    ///
    /// # Errors
    /// Propagates errors from [`Estimator::fit`] and [`Estimator::transform`].
    fn fit_transform(&mut self, train: &DataFrame) -> Result<DataFrame, EstimatorError> {
        self.fit(train)?;
        self.transform(train)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RowCounter {
        rows: Option<usize>,
    }

    impl Estimator for RowCounter {
        type Config = ();

        fn with_config(_config: Self::Config) -> Self {
            Self::default()
        }

        fn fit(&mut self, train: &DataFrame) -> Result<(), EstimatorError> {
            self.rows = Some(train.height());
            Ok(())
        }

        fn transform(&self, df: &DataFrame) -> Result<DataFrame, EstimatorError> {
            let rows = self.rows.ok_or(EstimatorError::NotFitted)?;
            let mut out = df.clone();
            out.with_column(Column::new("train_rows".into(), vec![rows as u32; df.height()]))?;
            Ok(out)
        }

        fn is_fitted(&self) -> bool {
            self.rows.is_some()
        }
    }

    #[test]
    fn transform_before_fit_fails() {
        let estimator = RowCounter::with_config(());
        let df = df! { "x" => &[1, 2] }.unwrap();
        let err = estimator.transform(&df).unwrap_err();
        assert!(err.is_not_fitted());
    }

    #[test]
    fn fit_transform_fits_first() {
        let mut estimator = RowCounter::with_config(());
        let df = df! { "x" => &[1, 2, 3] }.unwrap();
        let out = estimator.fit_transform(&df).unwrap();
        assert!(estimator.is_fitted());
        assert_eq!(out.column("train_rows").unwrap().u32().unwrap().get(0), Some(3));
    }

    #[test]
    fn estimator_error_display() {
        let err = EstimatorError::InvalidConfig("bad value".to_string());
        assert_eq!(err.to_string(), "invalid configuration: bad value");
        assert!(!err.is_not_fitted());
    }
}
