use thiserror::Error;

/// Typed failures raised by the library crates.
///
/// The node rewriters themselves are total; these errors come from parameter
/// validation, pattern compilation and splicing edits back into a document.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("{role} version must not be empty")]
    EmptyVersion { role: &'static str },

    #[error("invalid file pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to compile version classifier")]
    InvalidClassifier(#[from] regex::Error),

    #[error("edit at {start}..{end} expected `{expected}` but found `{found}`")]
    EditMismatch {
        start: usize,
        end: usize,
        expected: String,
        found: String,
    },

    #[error("edit starting at byte {start} overlaps a previous edit")]
    OverlappingEdits { start: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_version_message() {
        let err = MigrationError::EmptyVersion { role: "current" };
        assert_eq!(err.to_string(), "current version must not be empty");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = MigrationError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "invalid file pattern `[`");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_edit_mismatch_message() {
        let err = MigrationError::EditMismatch {
            start: 3,
            end: 5,
            expected: "ab".to_string(),
            found: "cd".to_string(),
        };
        assert_eq!(err.to_string(), "edit at 3..5 expected `ab` but found `cd`");
    }
}
