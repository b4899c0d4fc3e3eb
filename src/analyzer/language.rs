//! Language Detection Module
//!
//! **Single source of truth** for language tag and file-extension handling.
//! The dispatcher and the CLI both resolve languages here - no duplicate
//! detection logic elsewhere.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Language Metadata Table - Single Source of Truth
// =============================================================================

/// Language metadata entry containing all language-specific information
struct LanguageMeta {
    /// Display name (human-readable)
    display_name: &'static str,
    /// Canonical tag used in requests and CLI flags
    tag: &'static str,
    /// File extensions that map to this language (CLI inference only)
    extensions: &'static [&'static str],
    /// Request tags accepted by the dispatcher. A closed contract:
    /// exactly `python`, `c`, `cpp`, `c++` - anything else is rejected.
    aliases: &'static [&'static str],
}

impl Language {
    fn meta(&self) -> LanguageMeta {
        match self {
            Language::Python => LanguageMeta {
                display_name: "Python",
                tag: "python",
                extensions: &["py", "pyi", "pyw"],
                aliases: &["python"],
            },
            Language::C => LanguageMeta {
                display_name: "C",
                tag: "c",
                extensions: &["c", "h"],
                aliases: &["c"],
            },
            Language::Cpp => LanguageMeta {
                display_name: "C++",
                tag: "cpp",
                extensions: &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h++"],
                aliases: &["cpp", "c++"],
            },
        }
    }
}

// =============================================================================
// Language Enum Definition
// =============================================================================

/// Languages the estimator accepts.
///
/// A closed set: any tag outside it is rejected at the dispatch boundary
/// with an unsupported-language error rather than a fallback analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    C,
    Cpp,
}

/// Which of the two analyzers handles a language.
///
/// Python has an in-process grammar, so it gets exact syntax-tree analysis.
/// C and C++ are approximated from text patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    /// Tree-sitter backed traversal, exact with respect to the grammar.
    Structural,
    /// Line/regex scanning with brace tracking, grammar-unaware.
    Lexical,
}

impl Language {
    /// All supported variants, for iteration and CLI listings.
    pub fn all() -> &'static [Language] {
        &[Language::Python, Language::C, Language::Cpp]
    }

    /// Display name (human-readable)
    pub fn as_str(&self) -> &'static str {
        self.meta().display_name
    }

    /// Canonical request tag (`python`, `c`, `cpp`)
    pub fn tag(&self) -> &'static str {
        self.meta().tag
    }

    /// The analyzer responsible for this language.
    pub fn analyzer_kind(&self) -> AnalyzerKind {
        match self {
            Language::Python => AnalyzerKind::Structural,
            Language::C | Language::Cpp => AnalyzerKind::Lexical,
        }
    }

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext_lower = ext.to_lowercase();
        Self::all()
            .iter()
            .find(|lang| lang.meta().extensions.iter().any(|e| *e == ext_lower))
            .copied()
    }

    /// Detect language from file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = ();

    /// Case-insensitive alias matching (`"C++"`, `"cpp"`, `"Python"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.to_lowercase();
        Self::all()
            .iter()
            .find(|lang| lang.meta().aliases.iter().any(|a| *a == s_lower))
            .copied()
            .ok_or(())
    }
}
