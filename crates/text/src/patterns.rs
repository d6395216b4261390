//! Keyword and year patterns.

use std::sync::LazyLock;

use pricefeat_primitives::FeatureConfig;
use regex::{Regex, RegexBuilder};

use crate::TextError;

static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:19[5-9]\d|20[0-2]\d)\b").expect("year pattern is a valid regex")
});

/// Whether `text` mentions a year between 1950 and 2029 as a whole word.
#[must_use]
pub fn contains_year(text: &str) -> bool {
    YEAR.is_match(text)
}

/// A case-insensitive union of literal substrings.
///
/// The keywords are escaped and joined into one alternation. An empty keyword
/// list never matches.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Option<Regex>,
}

impl KeywordPattern {
    /// Compile a pattern matching any of `keywords`.
    ///
    /// # Errors
    /// Returns `TextError::Pattern` if the alternation exceeds the regex size limit.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, TextError> {
        if keywords.is_empty() {
            return Ok(Self { regex: None });
        }

        let alternation =
            keywords.iter().map(|k| regex::escape(k.as_ref())).collect::<Vec<_>>().join("|");
        let regex = RegexBuilder::new(&alternation).case_insensitive(true).build()?;
        Ok(Self { regex: Some(regex) })
    }

    /// Whether any keyword occurs in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Whether any keyword occurs in any of `texts`.
    #[must_use]
    pub fn matches_any(&self, texts: &[&str]) -> bool {
        texts.iter().any(|t| self.is_match(t))
    }
}

/// The keyword patterns behind the `is_new` and `is_vintage` flags.
#[derive(Debug, Clone)]
pub struct FlagPatterns {
    /// New-item keywords.
    pub new: KeywordPattern,
    /// Vintage keywords.
    pub vintage: KeywordPattern,
}

impl FlagPatterns {
    /// Compile both keyword sets of a configuration.
    ///
    /// # Errors
    /// Returns `TextError::Pattern` if either set fails to compile.
    pub fn from_config(config: &FeatureConfig) -> Result<Self, TextError> {
        Ok(Self {
            new: KeywordPattern::new(&config.new_keywords)?,
            vintage: KeywordPattern::new(&config.vintage_keywords)?,
        })
    }
}
