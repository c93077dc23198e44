//! FILENAME: core/parser/src/markup.rs
//! PURPOSE: Renders a formula as display markup (TeX-like).
//! CONTEXT: Works from a fresh tokenization of the formula text, independent
//! of any evaluation. Operators are spaced, function names get a backslash,
//! everything else is emitted as-is.
//!
//! NOTE: function arguments are not wrapped in braces, so "sin(x)" renders
//! as "\sin(x)". Renderers that accept "\sin(x)" display it fine; it is not
//! the "\sin{x}" form.

use crate::classifier::Classifier;
use crate::config::FormulaConfig;
use crate::lexer::tokenize;
use crate::token::Token;

/// Converts `formula` to markup. Never fails; empty input gives "".
pub fn to_markup(formula: &str, config: &FormulaConfig) -> String {
    let classifier = Classifier::new(config);
    let mut markup = String::new();

    for token in tokenize(formula, config) {
        match &token {
            Token::Operator(symbol) => {
                markup.push(' ');
                markup.push(*symbol);
                markup.push(' ');
            }
            Token::Identifier(name) if classifier.is_function(name) => {
                markup.push('\\');
                markup.push_str(name);
            }
            other => markup.push_str(&other.to_string()),
        }
    }

    markup
}

/// Drops every backslash that is not followed by another backslash,
/// turning markup back into plain formula text ("\sin(x)" --> "sin(x)").
pub fn strip_markup_escapes(markup: &str) -> String {
    let mut result = String::with_capacity(markup.len());
    let mut chars = markup.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() != Some(&'\\') {
            continue;
        }
        result.push(ch);
    }

    result
}
