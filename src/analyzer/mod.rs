//! Complexity Estimation Module
//!
//! Two stateless analyzers behind one dispatch function:
//!
//! - [`structural`]: tree-sitter backed syntax-tree traversal (Python),
//!   exact with respect to the grammar. Malformed source is a parse error.
//! - [`lexical`]: line/regex scanning with brace tracking (C, C++),
//!   approximate and grammar-unaware. Never fails.
//!
//! Both report the same thing: the maximum nesting depth of iteration
//! constructs, mapped onto a Big-O estimate by [`complexity`]. Each call
//! allocates its own traversal state, so analyses are freely concurrent.
//!
//! ```rust,ignore
//! use ordo::analyzer::analyze;
//!
//! let result = analyze("for i in range(n):\n    print(i)", "python");
//! assert_eq!(result.time_complexity, "O(n)");
//! ```

pub mod complexity;
pub mod language;
pub mod lexical;
pub mod structural;

pub use complexity::{ComplexityEstimate, estimate_from_depth};
pub use language::{AnalyzerKind, Language};

use crate::types::{AnalysisRequest, AnalysisResult, OrdoError};

/// Analyze a source snippet and return its Big-O estimate.
///
/// The language tag is matched case-insensitively against the supported set
/// (`python`, `c`, `cpp`, `c++`). Every call returns a well-formed
/// [`AnalysisResult`]: failures - an unsupported tag, or Python source that
/// does not parse - come back as messages in `errors` with empty complexity
/// fields, never as a fault that aborts the caller.
pub fn analyze(code: &str, language: &str) -> AnalysisResult {
    // The original service lowercased the tag before dispatch and echoed the
    // lowercased form in the error message; kept for contract compatibility.
    let tag = language.to_lowercase();

    let Ok(lang) = tag.parse::<Language>() else {
        return AnalysisResult::failure_message(
            OrdoError::UnsupportedLanguage(tag).to_string(),
        );
    };

    tracing::debug!(language = %lang, bytes = code.len(), "dispatching analysis");

    let depth = match lang.analyzer_kind() {
        AnalyzerKind::Structural => match structural::max_loop_depth(code) {
            Ok(depth) => depth,
            Err(e) => return AnalysisResult::failure_message(e.to_string()),
        },
        AnalyzerKind::Lexical => lexical::max_loop_depth(code),
    };

    let estimate = estimate_from_depth(depth);
    AnalysisResult::success(estimate.time, estimate.space)
}

/// Analyze a request as received on the wire (JSON body shape).
pub fn analyze_request(request: &AnalysisRequest) -> AnalysisResult {
    analyze(&request.code, &request.language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_constant() {
        let result = analyze("x = 1", "python");
        assert_eq!(result, AnalysisResult::success("O(1)", "O(1)"));
    }

    #[test]
    fn test_python_linear() {
        let result = analyze("for i in range(n):\n    print(i)", "python");
        assert_eq!(result, AnalysisResult::success("O(n)", "O(n)"));
    }

    #[test]
    fn test_python_quadratic() {
        let result = analyze(
            "for i in range(n):\n    for j in range(n):\n        print(i,j)",
            "python",
        );
        assert_eq!(result, AnalysisResult::success("O(n^2)", "O(n)"));
    }

    #[test]
    fn test_c_linear() {
        let result = analyze("for(int i=0;i<n;i++){\n  printf(\"%d\",i);\n}", "c");
        assert_eq!(result, AnalysisResult::success("O(n)", "O(n)"));
    }

    #[test]
    fn test_cpp_nested() {
        let code = "for (int i = 0; i < n; i++) {\n  for (int j = 0; j < n; j++) {\n    sum += i * j;\n  }\n}";
        let result = analyze(code, "cpp");
        assert_eq!(result, AnalysisResult::success("O(n^2)", "O(n)"));
    }

    #[test]
    fn test_c_sibling_loops_with_else_stay_linear() {
        let code = "for (int i = 0; i < n; i++) {\n  if (a[i] > 0) {\n    pos++;\n  } else {\n    neg++;\n  }\n}\nfor (int j = 0; j < n; j++) {\n  b[j] = j;\n}";
        let result = analyze(code, "c");
        assert_eq!(result, AnalysisResult::success("O(n)", "O(n)"));
    }

    #[test]
    fn test_malformed_python_returns_error_as_data() {
        let result = analyze("def f(:\n  pass", "python");
        assert!(result.is_error());
        assert!(result.time_complexity.is_empty());
        assert!(result.space_complexity.is_empty());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_malformed_c_never_errors() {
        let result = analyze("for ( broken {{{", "c");
        assert!(!result.is_error());
        assert_eq!(result.time_complexity, "O(1)");
    }

    #[test]
    fn test_unsupported_language_message() {
        let result = analyze("class A {}", "java");
        assert_eq!(result.errors, vec!["Language 'java' not supported"]);
        assert!(result.time_complexity.is_empty());
        assert!(result.space_complexity.is_empty());
    }

    #[test]
    fn test_extension_short_forms_are_not_tags() {
        // The dispatch contract is exactly python/c/cpp/c++; file-extension
        // spellings are rejected like any other unknown tag.
        let result = analyze("x = 1", "py");
        assert_eq!(result.errors, vec!["Language 'py' not supported"]);
        assert!(result.time_complexity.is_empty());

        let result = analyze("int x;", "cxx");
        assert_eq!(result.errors, vec!["Language 'cxx' not supported"]);
    }

    #[test]
    fn test_tag_matching_is_case_insensitive() {
        assert!(!analyze("x = 1", "Python").is_error());
        assert!(!analyze("int x;", "C").is_error());
        assert!(!analyze("int x;", "C++").is_error());
        // Error message echoes the lowercased tag, like the tag matching.
        let result = analyze("", "Java");
        assert_eq!(result.errors, vec!["Language 'java' not supported"]);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let code = "for i in range(n):\n    print(i)";
        assert_eq!(analyze(code, "python"), analyze(code, "python"));

        let c_code = "while (n) {\n  n--;\n}";
        assert_eq!(analyze(c_code, "c"), analyze(c_code, "c"));
    }

    #[test]
    fn test_analyze_request_wrapper() {
        let request = AnalysisRequest {
            code: "x = 1".to_string(),
            language: "python".to_string(),
        };
        assert_eq!(
            analyze_request(&request),
            AnalysisResult::success("O(1)", "O(1)")
        );
    }
}
