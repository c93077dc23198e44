//! FILENAME: core/parser/src/classifier.rs
//! PURPOSE: Answers "is this an operator?" and "is this a function?" for token text.
//! CONTEXT: Pure lookups against a borrowed FormulaConfig. Used by the lexer
//! while scanning, by the evaluator while dispatching identifiers and
//! operators, and by callers that build variable inputs from a formula.

use crate::config::{BinaryOperator, FormulaConfig, MathFunction};

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'c> {
    config: &'c FormulaConfig,
}

impl<'c> Classifier<'c> {
    pub fn new(config: &'c FormulaConfig) -> Self {
        Classifier { config }
    }

    /// Exact match of `token` against the configured operator symbols.
    pub fn is_operator(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.operator(c).is_some(),
            _ => false,
        }
    }

    /// Exact match of `token` against the configured function names.
    pub fn is_function(&self, token: &str) -> bool {
        self.function(token).is_some()
    }

    pub fn operator(&self, symbol: char) -> Option<BinaryOperator> {
        self.config
            .operators
            .iter()
            .copied()
            .find(|op| op.symbol() == symbol)
    }

    pub fn function(&self, name: &str) -> Option<MathFunction> {
        self.config
            .functions
            .iter()
            .copied()
            .find(|f| f.name() == name)
    }

    /// First function, in table order, whose name is a prefix of `rest`.
    pub fn match_function_prefix(&self, rest: &str) -> Option<MathFunction> {
        self.config
            .functions
            .iter()
            .copied()
            .find(|f| rest.starts_with(f.name()))
    }
}

/// Shorthand for `Classifier::new(config).is_operator(token)`.
pub fn is_operator(token: &str, config: &FormulaConfig) -> bool {
    Classifier::new(config).is_operator(token)
}

/// Shorthand for `Classifier::new(config).is_function(token)`.
pub fn is_function(token: &str, config: &FormulaConfig) -> bool {
    Classifier::new(config).is_function(token)
}
