//! Structural loop-depth analysis for Python.
//!
//! Parses the snippet with tree-sitter and walks the syntax tree with an
//! explicit recursive traversal, carrying the current loop depth by value.
//! Only lexical nesting counts: a loop inside another loop's body deepens the
//! estimate, sibling loops do not. The traversal recurses into every child,
//! so a loop buried inside a conditional or function definition that is
//! itself inside a loop is still counted as nested.

use tree_sitter::Node;

use crate::types::{OrdoError, Result};

/// Tree-sitter node kinds treated as iteration constructs.
fn is_loop(kind: &str) -> bool {
    matches!(kind, "for_statement" | "while_statement")
}

/// Compute the maximum loop nesting depth of a Python snippet.
///
/// Fails with [`OrdoError::Parse`] when the snippet does not parse; in that
/// case no depth is computed. Tree-sitter produces no message string of its
/// own, so the error carries the position of the first `ERROR`/`MISSING`
/// node it planted in the tree.
pub fn max_loop_depth(source: &str) -> Result<usize> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| OrdoError::Grammar(format!("failed to load Python grammar: {}", e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| OrdoError::Grammar("Python parser returned no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error(root));
    }

    let depth = walk(root, 0);
    tracing::debug!(depth, bytes = source.len(), "structural analysis complete");
    Ok(depth)
}

/// Depth-first traversal with the active loop depth passed by value.
///
/// Entering a loop node raises the depth for that node and its whole subtree;
/// returning to the caller restores it, which is what makes sibling loops
/// report depth 1 regardless of how many there are.
fn walk(node: Node, depth: usize) -> usize {
    let depth = if is_loop(node.kind()) { depth + 1 } else { depth };
    let mut max = depth;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        max = max.max(walk(child, depth));
    }
    max
}

/// Build a parse error from the first `ERROR` or `MISSING` node in the tree.
fn syntax_error(root: Node) -> OrdoError {
    let position = first_error_node(root).map(|n| n.start_position());
    match position {
        Some(p) => OrdoError::parse_at(
            format!(
                "invalid syntax at line {}, column {}",
                p.row + 1,
                p.column + 1
            ),
            p.row as u32 + 1,
            p.column as u32 + 1,
        ),
        // has_error() was true but no error node surfaced; still refuse to
        // compute a depth for a tree the grammar rejected.
        None => OrdoError::parse_at("invalid syntax", 0, 0),
    }
}

fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_loops_is_depth_zero() {
        assert_eq!(max_loop_depth("x = 1").unwrap(), 0);
    }

    #[test]
    fn test_single_loop() {
        let code = "for i in range(n):\n    print(i)";
        assert_eq!(max_loop_depth(code).unwrap(), 1);
    }

    #[test]
    fn test_nested_loops() {
        let code = "for i in range(n):\n    for j in range(n):\n        print(i, j)";
        assert_eq!(max_loop_depth(code).unwrap(), 2);
    }

    #[test]
    fn test_while_inside_for() {
        let code = "for i in range(n):\n    while i > 0:\n        i -= 1";
        assert_eq!(max_loop_depth(code).unwrap(), 2);
    }

    #[test]
    fn test_sibling_loops_do_not_stack() {
        let code = "for i in range(n):\n    print(i)\nfor j in range(n):\n    print(j)\nfor k in range(n):\n    print(k)";
        assert_eq!(max_loop_depth(code).unwrap(), 1);
    }

    #[test]
    fn test_loop_inside_conditional_inside_loop() {
        let code = "for i in range(n):\n    if i % 2 == 0:\n        for j in range(n):\n            print(j)";
        assert_eq!(max_loop_depth(code).unwrap(), 2);
    }

    #[test]
    fn test_loop_inside_function_def() {
        let code = "def f(items):\n    for x in items:\n        print(x)";
        assert_eq!(max_loop_depth(code).unwrap(), 1);
    }

    #[test]
    fn test_triple_nesting() {
        let code = "for i in range(n):\n    for j in range(n):\n        for k in range(n):\n            print(i, j, k)";
        assert_eq!(max_loop_depth(code).unwrap(), 3);
    }

    #[test]
    fn test_malformed_source_fails_with_position() {
        let result = max_loop_depth("def f(:\n  pass");
        match result {
            Err(OrdoError::Parse { message, line, .. }) => {
                assert!(message.contains("invalid syntax"));
                assert!(line >= 1);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unbalanced_parens_fail() {
        assert!(max_loop_depth("x = (1 + 2").is_err());
    }

    #[test]
    fn test_empty_source_is_constant() {
        assert_eq!(max_loop_depth("").unwrap(), 0);
    }
}
