//! Ordo - Static Big-O Complexity Estimator
//!
//! Estimates the asymptotic time and space complexity of a source snippet by
//! statically counting loop nesting depth. A pedagogical tool, not a prover:
//! the estimate comes from syntactic nesting alone, with no loop-bound or
//! data-dependence reasoning.
//!
//! ## Analyzers
//!
//! - **Structural** (Python): tree-sitter parse plus a recursive traversal
//!   that tracks the exact maximum nesting of `for`/`while` statements.
//! - **Lexical** (C/C++): comment stripping plus line/regex scanning with a
//!   brace-tracking scope stack; approximate and grammar-unaware.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ordo::analyze;
//!
//! let result = analyze("for i in range(n):\n    print(i)", "python");
//! assert_eq!(result.time_complexity, "O(n)");
//! assert_eq!(result.space_complexity, "O(n)");
//! assert!(result.errors.is_empty());
//! ```
//!
//! Every call returns a well-formed [`AnalysisResult`]; parse failures and
//! unsupported language tags come back as messages in `errors`, never as
//! panics or process-fatal faults.
//!
//! ## Modules
//!
//! - [`analyzer`]: the two analyzers, the language registry, the dispatcher
//! - [`types`]: request/response model and the unified error type
//! - [`cli`]: terminal glue around the dispatcher

pub mod analyzer;
pub mod cli;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use analyzer::{AnalyzerKind, ComplexityEstimate, Language, analyze, analyze_request};
pub use types::error::{OrdoError, Result};
pub use types::{AnalysisRequest, AnalysisResult};
