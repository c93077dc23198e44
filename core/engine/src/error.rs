//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

/// Failures raised while evaluating a token sequence.
/// Numeric domain problems (sqrt(-1), 0^-1, ...) are not errors; they show up
/// as NaN or infinity in the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Function argument must be enclosed in parentheses: {0}")]
    FunctionArgumentNotParenthesized(String),

    #[error("Mismatched parentheses in call to {0}")]
    MismatchedParentheses(String),

    #[error("Invalid operator: {0}")]
    UnknownOperator(char),
}

/// Failures of the tokenize-check-evaluate pipeline in `Calculator`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Please define all variables: {}", .0.join(", "))]
    UndefinedVariables(Vec<String>),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
