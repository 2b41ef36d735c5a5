//! Reverse sorting strategy

use super::traits::Strategy;
use tracing::trace;

/// Returns the sequence in reversed order
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseStrategy;

impl ReverseStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ReverseStrategy {
    fn name(&self) -> &str {
        "reverse"
    }

    fn description(&self) -> &str {
        "reverse sorting"
    }

    fn do_algorithm(&self, mut data: Vec<String>) -> Vec<String> {
        trace!(len = data.len(), "reversing");
        data.reverse();
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
    fn test_reverses_input_order() {
        let result = ReverseStrategy::new().do_algorithm(strings(&["c", "a", "e", "b", "d"]));
        assert_eq!(result, strings(&["d", "b", "e", "a", "c"]));
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let strategy = ReverseStrategy::new();
        let input = strings(&["x", "y", "z", "y"]);
        let back = strategy.do_algorithm(strategy.do_algorithm(input.clone()));
        assert_eq!(back, input);
    }

    #[test]
    fn test_reverse_single_element() {
        let result = ReverseStrategy::new().do_algorithm(strings(&["only"]));
        assert_eq!(result, strings(&["only"]));
    }
}
