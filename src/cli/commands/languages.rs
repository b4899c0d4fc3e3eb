//! Languages Command
//!
//! Lists the supported language tags and which analyzer backs each one.

use crate::analyzer::{AnalyzerKind, Language};
use crate::cli::output::Output;
use crate::types::Result;

pub fn run() -> Result<()> {
    let output = Output::new();
    output.header("Supported languages");

    for lang in Language::all() {
        let backend = match lang.analyzer_kind() {
            AnalyzerKind::Structural => "syntax tree (exact nesting)",
            AnalyzerKind::Lexical => "text patterns (approximate nesting)",
        };
        output.info(&format!("{:<8} tag: {:<6} via {}", lang, lang.tag(), backend));
    }

    Ok(())
}
