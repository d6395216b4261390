//! # pricefeat
//!
//! Leakage-safe feature engineering for marketplace listing prices.
//!
//! This crate provides a unified interface to the pricefeat crates.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Configuration, artifact bundle and column names
//! - `traits`: The fit/transform trait
//! - `text`: Normalization, tokenization and keyword patterns
//! - `stats`: Frequency counts and medians
//! - `utils`: Numeric coercion and null filling
//! - `engineer`: The listing feature learner
//!
//! ## Example
//!
//! ```rust,ignore
//! use pricefeat::engineer::{Estimator, FeatureEngineer};
//!
//! let mut engineer = FeatureEngineer::new();
//! engineer.fit(&train)?;
//! let features = engineer.transform(&test)?;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // pricefeat = { version = "0.1", default-features = false, features = ["engineer"] }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pricefeat/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use pricefeat_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use pricefeat_traits as traits;
#[cfg(feature = "text")]
#[doc(inline)]
pub use pricefeat_text as text;
#[cfg(feature = "stats")]
#[doc(inline)]
pub use pricefeat_stats as stats;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use pricefeat_utils as utils;
#[cfg(feature = "engineer")]
#[doc(inline)]
pub use pricefeat_engineer as engineer;
