//! Lexical loop-depth approximation for C/C++.
//!
//! No in-process grammar here: the snippet is reduced to comment-free lines
//! and scanned with patterns plus a brace-tracking scope stack. The approach
//! is approximate by design. A loop header split across lines, a header not
//! on its own line, or a closing brace sharing a line with other tokens all
//! defeat the detector; that is the documented accuracy envelope of this
//! analyzer. It never fails: malformed input yields a best-effort depth.

use std::sync::LazyLock;

use regex::Regex;

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*").expect("hardcoded pattern"));

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("hardcoded pattern"));

/// Loop header anchored at line start: `for`/`while`, then a parenthesized
/// condition somewhere on the same line.
static LOOP_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(for|while)\s*\(.*\)").expect("hardcoded pattern"));

/// Scope kinds tracked on the brace stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    /// Opened by a loop header line; closing it lowers the depth.
    Loop,
    /// Opened by any other brace-opening line (conditional, function body,
    /// struct). Closing it leaves the loop depth untouched.
    Block,
}

/// Approximate the maximum loop nesting depth of a C/C++ snippet.
pub fn max_loop_depth(source: &str) -> usize {
    let stripped = strip_comments(source);

    let mut stack: Vec<ScopeKind> = Vec::new();
    let mut current = 0usize;
    let mut max = 0usize;

    for raw in stripped.lines() {
        let line = raw.trim();

        if LOOP_HEADER.is_match(line) {
            current += 1;
            max = max.max(current);
            stack.push(ScopeKind::Loop);
        } else if line.starts_with('}') {
            match stack.pop() {
                Some(ScopeKind::Loop) => current = current.saturating_sub(1),
                Some(ScopeKind::Block) | None => {}
            }
            // `} else {` closes one scope and reopens another on the same
            // line; without the push the stack would drift and a later `}`
            // would close the enclosing loop too early.
            if line.ends_with('{') && line.len() > 1 {
                stack.push(ScopeKind::Block);
            }
        } else if line.ends_with('{') && line != "{" {
            // Non-loop scope opener (if/else/function/struct). A bare `{` is
            // skipped so an Allman-style brace under a loop header does not
            // shadow the loop marker already on the stack.
            stack.push(ScopeKind::Block);
        }
    }

    tracing::debug!(depth = max, bytes = source.len(), "lexical analysis complete");
    max
}

/// Remove `//` line comments, then `/* ... */` block comments (non-greedy,
/// spanning lines), before any pattern matching.
fn strip_comments(source: &str) -> String {
    let without_line = LINE_COMMENT.replace_all(source, "");
    BLOCK_COMMENT.replace_all(&without_line, "").into_owned()
}
