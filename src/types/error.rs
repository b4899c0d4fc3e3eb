//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (OrdoError) for the entire application
//! - Analysis failures are returned as data in `AnalysisResult.errors`,
//!   never as faults that abort the caller
//! - No panic/unwrap - all errors are recoverable

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdoError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Source failed to parse under the target grammar. The message is what
    /// gets surfaced verbatim in `AnalysisResult.errors`.
    #[error("{message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// The grammar itself could not be loaded (tree-sitter ABI mismatch).
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// Language tag not recognized by the dispatcher.
    #[error("Language '{0}' not supported")]
    UnsupportedLanguage(String),
}

impl OrdoError {
    /// Create a parse error anchored at a source position (1-based line).
    pub fn parse_at(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrdoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let err = OrdoError::UnsupportedLanguage("java".to_string());
        assert_eq!(err.to_string(), "Language 'java' not supported");
    }

    #[test]
    fn test_parse_error_display_is_message_only() {
        let err = OrdoError::parse_at("invalid syntax at line 1, column 6", 1, 6);
        assert_eq!(err.to_string(), "invalid syntax at line 1, column 6");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OrdoError = io.into();
        assert!(matches!(err, OrdoError::Io(_)));
    }
}
