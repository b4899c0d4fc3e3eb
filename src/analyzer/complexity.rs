//! Depth → Big-O mapping shared by both analyzers.
//!
//! The space figure is a fixed heuristic: `O(n)` whenever any loop exists,
//! `O(1)` otherwise. It is not derived from allocation analysis and is kept
//! as documented behavior of the estimator.

/// Time/space complexity estimate derived from loop nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityEstimate {
    pub time: String,
    pub space: String,
}

/// Map a maximum loop nesting depth onto the estimate table:
///
/// | depth | time     | space |
/// |-------|----------|-------|
/// | 0     | O(1)     | O(1)  |
/// | 1     | O(n)     | O(n)  |
/// | 2     | O(n^2)   | O(n)  |
/// | d >= 3| O(n^d)   | O(n)  |
pub fn estimate_from_depth(depth: usize) -> ComplexityEstimate {
    match depth {
        0 => ComplexityEstimate {
            time: "O(1)".to_string(),
            space: "O(1)".to_string(),
        },
        1 => ComplexityEstimate {
            time: "O(n)".to_string(),
            space: "O(n)".to_string(),
        },
        d => ComplexityEstimate {
            time: format!("O(n^{})", d),
            space: "O(n)".to_string(),
        },
    }
}
