#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pricefeat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod normalize;
pub use normalize::{CategoryLevels, normalize_column, normalize_value, split_category};

mod tokens;
pub use tokens::{token_count, unique_token_ratio};

mod patterns;
pub use patterns::{FlagPatterns, KeywordPattern, contains_year};

mod error;
pub use error::TextError;
