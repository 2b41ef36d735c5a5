//! Normal sorting strategy

use super::traits::Strategy;
use tracing::trace;

/// Sorts the sequence in ascending lexical order
///
/// Order is `String`'s `Ord`, i.e. by UTF-8 bytes (equivalently by code
/// point). This differs from UTF-16 code unit order for astral characters
/// versus U+E000..=U+FFFF; ASCII input sorts the same either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortStrategy;

impl SortStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for SortStrategy {
    fn name(&self) -> &str {
        "sort"
    }

    fn description(&self) -> &str {
        "normal sorting"
    }

    fn do_algorithm(&self, mut data: Vec<String>) -> Vec<String> {
        trace!(len = data.len(), "sorting");
        data.sort();
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorts_ascending() {
        let result = SortStrategy::new().do_algorithm(strings(&["c", "a", "e", "b", "d"]));
        assert_eq!(result, strings(&["a", "b", "c", "d", "e"]));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let strategy = SortStrategy::new();
        let once = strategy.do_algorithm(strings(&["pear", "apple", "fig", "banana"]));
        let twice = strategy.do_algorithm(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_lexical_not_numeric() {
        let result = SortStrategy::new().do_algorithm(strings(&["10", "9", "1"]));
        assert_eq!(result, strings(&["1", "10", "9"]));
    }

    #[test]
    fn test_sort_orders_by_code_point() {
        // U+FF61 sorts before U+1F600 by code point, after it by UTF-16 unit
        let result = SortStrategy::new().do_algorithm(strings(&["\u{1F600}", "\u{FF61}"]));
        assert_eq!(result, strings(&["\u{FF61}", "\u{1F600}"]));
    }

    #[test]
    fn test_sort_empty() {
        assert!(SortStrategy::new().do_algorithm(Vec::new()).is_empty());
    }
}
