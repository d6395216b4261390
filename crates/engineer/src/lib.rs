#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pricefeat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod engineer;
pub use engineer::FeatureEngineer;

mod fit;

mod transform;

mod persist;

mod error;
pub use error::EngineerError;

pub use pricefeat_primitives::{BrandBucket, FeatureArtifacts, FeatureConfig};
pub use pricefeat_traits::{Estimator, EstimatorError};

/// Re-export commonly used types.
pub mod prelude {
    pub use pricefeat_traits::Estimator;

    pub use super::{EngineerError, FeatureConfig, FeatureEngineer};
}
