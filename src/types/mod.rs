//! Core request/response data model.
//!
//! Both types are transient: a request is constructed per call, owned by the
//! dispatcher, and discarded once the result is built. There is no persisted
//! state and no cross-request data anywhere in the crate.

pub mod error;

pub use error::{OrdoError, Result};

use serde::{Deserialize, Serialize};

/// A single analysis request: a source snippet plus a language tag.
///
/// Mirrors the JSON body accepted by the `analyze` endpoint of the original
/// service (`{"code": "...", "language": "python"}`).
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
}

/// The outcome of one analysis call.
///
/// Invariant: `errors` and the complexity fields are mutually exclusive.
/// A non-empty `errors` list always comes with empty complexity strings,
/// and vice versa. Use [`AnalysisResult::success`] and
/// [`AnalysisResult::failure`] to keep the invariant intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub time_complexity: String,
    pub space_complexity: String,
    pub errors: Vec<String>,
}

impl AnalysisResult {
    /// Build a successful result from the two complexity estimates.
    pub fn success(time_complexity: impl Into<String>, space_complexity: impl Into<String>) -> Self {
        Self {
            time_complexity: time_complexity.into(),
            space_complexity: space_complexity.into(),
            errors: Vec::new(),
        }
    }

    /// Build a failed result. Complexity fields stay empty.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            time_complexity: String::new(),
            space_complexity: String::new(),
            errors,
        }
    }

    /// Build a failed result from a single error message.
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::failure(vec![message.into()])
    }

    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }
}
