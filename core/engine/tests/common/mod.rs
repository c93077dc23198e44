//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the engine integration tests.

use formula_engine::{evaluate, tokenize, EvalOutcome, FormulaConfig, VariableBindings};

/// Builds a binding map from name/value pairs.
pub fn bindings(pairs: &[(&str, f64)]) -> VariableBindings {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

/// Tokenizes and evaluates `formula` with the default configuration.
pub fn run(formula: &str, pairs: &[(&str, f64)]) -> EvalOutcome<Option<f64>> {
    let config = FormulaConfig::default();
    evaluate(&tokenize(formula, &config), &bindings(pairs), &config)
}

/// Asserts that `formula` evaluates to `expected` within 1e-9.
pub fn assert_close(formula: &str, pairs: &[(&str, f64)], expected: f64) {
    match run(formula, pairs) {
        Ok(Some(actual)) => assert!(
            (actual - expected).abs() < 1e-9,
            "{} evaluated to {}, expected {}",
            formula,
            actual,
            expected
        ),
        other => panic!("{} evaluated to {:?}, expected {}", formula, other, expected),
    }
}
