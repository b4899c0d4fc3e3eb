//! Analyze Command
//!
//! Reads a snippet from a file or stdin, resolves the language tag, and
//! prints the Big-O estimate. This is transport glue around
//! [`crate::analyzer::analyze`]; the exit code is zero even when the analysis
//! reports errors, because errors are part of the result contract.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::analyzer::{self, Language};
use crate::cli::output::Output;
use crate::types::{AnalysisRequest, OrdoError, Result};

/// Output formats for the analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(format!("Invalid format '{}'. Valid values: text, json", s)),
        }
    }
}

pub fn run(
    file: Option<PathBuf>,
    language: Option<String>,
    format: Format,
    json_request: bool,
) -> Result<()> {
    let output = Output::new();

    let (code, tag) = if json_request {
        let request: AnalysisRequest = serde_json::from_str(&read_stdin()?)?;
        (request.code, request.language)
    } else {
        let code = read_source(file.as_deref())?;
        let tag = resolve_language(file.as_deref(), language.as_deref())?;
        (code, tag)
    };

    let result = analyzer::analyze(&code, &tag);

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Format::Text => {
            output.header("Complexity estimate");
            output.render_result(&result);
        }
    }

    Ok(())
}

/// Read the snippet from a file, or from stdin when no file (or `-`) is given.
fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Resolve the language tag: an explicit `--language` wins, otherwise it is
/// inferred from the file extension. The tag is passed through to the
/// dispatcher as-is, so an unsupported explicit tag still produces the
/// dispatcher's unsupported-language result rather than a CLI error.
fn resolve_language(file: Option<&Path>, explicit: Option<&str>) -> Result<String> {
    if let Some(tag) = explicit {
        return Ok(tag.to_string());
    }
    file.and_then(Language::from_path)
        .map(|lang| lang.tag().to_string())
        .ok_or_else(|| {
            OrdoError::UnsupportedLanguage(
                "unknown (pass --language, or use a recognized file extension)".to_string(),
            )
        })
}
