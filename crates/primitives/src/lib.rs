#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pricefeat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod artifacts;
pub use artifacts::FeatureArtifacts;

mod bucket;
pub use bucket::BrandBucket;

mod config;
pub use config::{ConfigError, FeatureConfig};

pub mod columns;
