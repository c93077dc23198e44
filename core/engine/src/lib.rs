//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the formula engine.
//! CONTEXT: Re-exports public types and modules for use by front ends.

pub mod calculator;
pub mod error;
pub mod evaluator;

// Re-export commonly used types at the crate root
pub use calculator::{Calculator, FormulaReport};
pub use error::{CalcError, EvalError};
pub use evaluator::{evaluate, EvalOutcome, Evaluator, VariableBindings};
pub use formula_parser::{
    extract_variables, is_function, is_operator, join_tokens, to_markup, tokenize, FormulaConfig,
    Token,
};
