//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw formula string and produces a sequence of Tokens.
//! CONTEXT: First stage of the pipeline. Tokenizing never fails: malformed
//! input degrades to a best-effort token sequence and the evaluator decides
//! what is meaningful.
//!
//! IMPLICIT MULTIPLICATION:
//! - "ab"  --> a * b   (bare letters are always single-letter variables)
//! - "a2"  --> a * 2
//! - "2a"  --> 2 * a
//! - "12a" --> 1 2 * a (a digit followed by a letter is emitted on its own)
//!
//! FUNCTION NAMES:
//! At every position the configured function names are tried in table order
//! and the first one that prefixes the remaining input wins.

use crate::classifier::Classifier;
use crate::config::FormulaConfig;
use crate::token::Token;

pub struct Lexer<'a> {
    input: &'a str,
    classifier: Classifier<'a>,
    /// Byte offset of the next unread character.
    pos: usize,
    buffer: String,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, config: &'a FormulaConfig) -> Self {
        Lexer {
            input,
            classifier: Classifier::new(config),
            pos: 0,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Consumes the lexer and returns every token of the input.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek() {
            let rest = &self.input[self.pos..];

            if let Some(function) = self.classifier.match_function_prefix(rest) {
                self.flush();
                self.tokens.push(Token::Identifier(function.name().to_string()));
                self.pos += function.name().len();
                continue;
            }

            self.pos += ch.len_utf8();

            if ch == '(' {
                self.flush();
                self.tokens.push(Token::LParen);
            } else if ch == ')' {
                self.flush();
                self.tokens.push(Token::RParen);
            } else if self.classifier.operator(ch).is_some() {
                self.flush();
                self.tokens.push(Token::Operator(ch));
            } else if ch.is_whitespace() {
                self.flush();
            } else {
                self.read_operand_char(ch);
            }
        }

        self.flush();
        self.tokens
    }

    /// Handles a character that belongs to a number or variable, inserting
    /// multiplication where two operands touch.
    fn read_operand_char(&mut self, ch: char) {
        let buffer_has_letter = self.buffer.chars().any(|c| c.is_ascii_alphabetic());

        if ch.is_ascii_digit() && buffer_has_letter {
            // "a2" --> a * 2
            self.flush();
            self.push_multiply();
            self.buffer.push(ch);
        } else if ch.is_ascii_digit() && self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            // "2a" --> 2 * a
            self.flush();
            self.tokens.push(classify(&ch.to_string()));
            self.push_multiply();
        } else if ch.is_ascii_alphabetic() && buffer_has_letter {
            // "ab" --> a * b
            self.flush();
            self.push_multiply();
            self.buffer.push(ch);
        } else {
            self.buffer.push(ch);
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn push_multiply(&mut self) {
        self.tokens.push(Token::Operator('*'));
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.tokens.push(classify(&text));
        }
    }
}

/// Buffer text starting with a digit or '.' that parses as f64 is a number;
/// everything else is an identifier.
fn classify(text: &str) -> Token {
    let numeric_start = text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');

    if numeric_start {
        if let Some(token) = Token::number(text) {
            return token;
        }
    }
    Token::Identifier(text.to_string())
}

/// Tokenizes `formula` against `config`.
pub fn tokenize(formula: &str, config: &FormulaConfig) -> Vec<Token> {
    Lexer::new(formula, config).tokenize()
}
