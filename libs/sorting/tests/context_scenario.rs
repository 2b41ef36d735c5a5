//! Integration test: context driving interchangeable strategies
//!
//! Runs the reference client scenario against an in-memory writer.

use sorting::{create_strategy, Context, Strategy, StrategyType, DEFAULT_DATA};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_reference_scenario_output() {
    let mut out = Vec::new();

    let mut context = Context::new(create_strategy(StrategyType::Sort));
    let first = context
        .do_something_with(strings(&DEFAULT_DATA), &mut out)
        .unwrap();

    context.set_strategy(create_strategy(StrategyType::Reverse));
    let second = context
        .do_something_with(strings(&DEFAULT_DATA), &mut out)
        .unwrap();

    assert_eq!(first, strings(&["a", "b", "c", "d", "e"]));
    assert_eq!(second, strings(&["e", "d", "c", "b", "a"]));

    let expected = "\
Context: Sorting data using a specific strategy (don't know which one will be used)
a,b,c,d,e
Context: Sorting data using a specific strategy (don't know which one will be used)
e,d,c,b,a
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_unsorted_scenario() {
    let input = strings(&["c", "a", "e", "b", "d"]);

    let mut context = Context::from_type(StrategyType::Sort);
    assert_eq!(
        context.transform(input.clone()),
        strings(&["a", "b", "c", "d", "e"])
    );

    context.set_strategy(create_strategy(StrategyType::Reverse));
    assert_eq!(context.transform(input), strings(&["d", "b", "e", "a", "c"]));
}

/// A caller-supplied strategy binds like the built-in ones
struct Uppercase;

impl Strategy for Uppercase {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn description(&self) -> &str {
        "uppercasing"
    }

    fn do_algorithm(&self, data: Vec<String>) -> Vec<String> {
        data.into_iter().map(|s| s.to_uppercase()).collect()
    }
}

#[test]
fn test_custom_strategy_binding() {
    let mut context = Context::from_type(StrategyType::Reverse);
    context.set_strategy(Box::new(Uppercase));

    assert_eq!(context.strategy().description(), "uppercasing");
    assert_eq!(
        context.transform(strings(&["b", "a"])),
        strings(&["B", "A"])
    );
}

#[test]
fn test_repeated_rebinding_uses_latest() {
    let mut context = Context::from_type(StrategyType::Sort);
    let input = strings(&["b", "c", "a"]);

    for (strategy_type, expected) in [
        (StrategyType::Reverse, ["a", "c", "b"]),
        (StrategyType::Sort, ["a", "b", "c"]),
        (StrategyType::Reverse, ["a", "c", "b"]),
    ] {
        context.set_strategy(create_strategy(strategy_type));
        assert_eq!(context.transform(input.clone()), strings(&expected));
    }
}
