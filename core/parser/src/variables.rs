//! FILENAME: core/parser/src/variables.rs
//! PURPOSE: Lists the variables a formula needs bindings for.

use crate::classifier::Classifier;
use crate::config::FormulaConfig;
use crate::token::Token;

/// Returns the unique letter-only identifiers that are neither operators nor
/// functions, in order of first appearance.
pub fn extract_variables(tokens: &[Token], config: &FormulaConfig) -> Vec<String> {
    let classifier = Classifier::new(config);
    let mut variables: Vec<String> = Vec::new();

    for name in tokens.iter().filter_map(Token::as_identifier) {
        let is_word = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic());
        if is_word
            && !classifier.is_operator(name)
            && !classifier.is_function(name)
            && !variables.iter().any(|v| v == name)
        {
            variables.push(name.to_string());
        }
    }

    variables
}
