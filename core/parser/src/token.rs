//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the formula tokenizer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the evaluator and the markup renderer.

use serde::{Deserialize, Serialize};

/// Tokens recognized by the formula lexer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Token {
    // Literals
    /// A numeric literal. `text` is the literal as written; Display and markup
    /// use it, so "0.50" stays "0.50" and a digit run too long for f64 (value
    /// infinity) still renders as its digits.
    Number { value: f64, text: String },
    /// A single-letter variable or a configured function name.
    /// Which of the two is decided by the evaluator, not the lexer.
    Identifier(String),

    // Operators (the symbol is looked up in the FormulaConfig when applied)
    Operator(char),

    // Delimiters
    LParen,
    RParen,
}

impl Token {
    /// Builds a number token from literal text, or None if it does not parse.
    pub fn number(text: &str) -> Option<Token> {
        text.parse::<f64>().ok().map(|value| Token::Number {
            value,
            text: text.to_string(),
        })
    }

    /// Returns the identifier text, if this is an identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number { text, .. } => write!(f, "{}", text),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Operator(c) => write!(f, "{}", c),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Joins a token sequence back into text, one space between tokens.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
