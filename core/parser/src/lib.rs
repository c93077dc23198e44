//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the formula tokenizer.
//! CONTEXT: This crate turns free-form formula text into tokens, classifies
//! token text against a FormulaConfig and renders formulas as markup.
//!
//! PIPELINE: Formula String --> Lexer --> Tokens --> {Evaluator, Markup}
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: + - * / ^ (and % with the extended config)
//! - Single-letter variables with implicit multiplication: 2ab = 2 * a * b
//! - Unary functions from the configured table: sin(x), sqrt(x), ...
//! - Parentheses for grouping

pub mod classifier;
pub mod config;
pub mod lexer;
pub mod markup;
pub mod token;
pub mod variables;


// Re-export commonly used types for convenience
pub use classifier::{is_function, is_operator, Classifier};
pub use config::{BinaryOperator, ConfigError, FormulaConfig, MathFunction};
pub use lexer::{tokenize, Lexer};
pub use markup::{strip_markup_escapes, to_markup};
pub use token::{join_tokens, Token};
pub use variables::extract_variables;
