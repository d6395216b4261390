//! Error types for text processing.

/// Errors that can occur while preparing text features.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// A keyword alternation could not be compiled.
    #[error("keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TextError::from(regex::Regex::new("(").unwrap_err());
        assert!(err.to_string().starts_with("keyword pattern error"));
    }
}
