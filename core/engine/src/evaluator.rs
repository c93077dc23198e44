//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates a token sequence to a number.
//! CONTEXT: Tokens come straight from the lexer; there is no AST. A
//! two-stack (values / operators) precedence-climbing pass computes the
//! result, and function arguments are evaluated by recursing on a sub-slice.
//!
//! PRECEDENCE:
//!   1: + -    2: * / %    3: ^    4: function application
//! Function calls are applied as soon as they are scanned, so they bind
//! tighter than any operator. Ties pop while top >= incoming, which makes
//! every operator left-associative: 2^3^2 = (2^3)^2 = 64.
//!
//! TOLERATED INPUT:
//! - Unmatched '(' or ')' outside function calls.
//! - Tokens that are neither numbers, bound variables, functions, operators
//!   nor parentheses (they are skipped).
//! - Missing operands, which are read as NaN ("-3" evaluates to NaN).
//!
//! KNOWN LIMITATION:
//! A function argument runs up to the FIRST ')' after the call, not the
//! matching one. "sqrt((4)*4)" evaluates sqrt(4) and then multiplies by 4,
//! and a function call nested inside another call's argument always fails
//! with MismatchedParentheses.

use crate::error::EvalError;
use formula_parser::{BinaryOperator, Classifier, FormulaConfig, Token};
use std::collections::HashMap;

/// Variable name to value, supplied by the caller.
pub type VariableBindings = HashMap<String, f64>;

pub type EvalOutcome<T> = Result<T, EvalError>;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Operator(char),
    LParen,
}

pub struct Evaluator<'c> {
    classifier: Classifier<'c>,
}

impl<'c> Evaluator<'c> {
    pub fn new(config: &'c FormulaConfig) -> Self {
        Evaluator {
            classifier: Classifier::new(config),
        }
    }

    /// Evaluates `tokens` against `bindings`.
    /// Returns Ok(None) when there is nothing to evaluate (e.g. no tokens).
    /// The result is the bottom of the value stack.
    pub fn evaluate(
        &self,
        tokens: &[Token],
        bindings: &VariableBindings,
    ) -> EvalOutcome<Option<f64>> {
        let mut values: Vec<f64> = Vec::new();
        let mut operators: Vec<StackEntry> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            match &tokens[i] {
                Token::Number { value, .. } => values.push(*value),

                Token::Identifier(name) => {
                    if let Some(value) = bindings.get(name) {
                        values.push(*value);
                    } else if let Some(function) = self.classifier.function(name) {
                        let closing = find_argument_end(tokens, i, name)?;
                        let argument = self.evaluate(&tokens[i + 2..closing], bindings)?;

                        if let Some(x) = argument {
                            let result = function.apply(x);
                            log::trace!("[EVAL] {}({}) = {}", name, x, result);
                            values.push(result);
                        }
                        i = closing;
                    } else {
                        log::debug!("[EVAL] skipping unrecognized token '{}'", name);
                    }
                }

                Token::Operator(symbol) => {
                    let incoming = self.precedence(*symbol);
                    while let Some(StackEntry::Operator(top)) = operators.last().copied() {
                        if self.precedence(top) < incoming {
                            break;
                        }
                        operators.pop();
                        self.apply_operator(&mut values, top)?;
                    }
                    operators.push(StackEntry::Operator(*symbol));
                }

                Token::LParen => operators.push(StackEntry::LParen),

                Token::RParen => {
                    // An unmatched ')' just empties the stack
                    while let Some(entry) = operators.pop() {
                        match entry {
                            StackEntry::Operator(op) => self.apply_operator(&mut values, op)?,
                            StackEntry::LParen => break,
                        }
                    }
                }
            }
            i += 1;
        }

        // Leftover '(' sentinels are dropped
        while let Some(entry) = operators.pop() {
            if let StackEntry::Operator(op) = entry {
                self.apply_operator(&mut values, op)?;
            }
        }

        Ok(values.first().copied())
    }

    /// Precedence of an operator symbol; 0 for symbols outside the config.
    fn precedence(&self, symbol: char) -> u8 {
        self.classifier
            .operator(symbol)
            .map_or(0, BinaryOperator::precedence)
    }

    /// Pops two operands, combines them and pushes the result.
    fn apply_operator(&self, values: &mut Vec<f64>, symbol: char) -> EvalOutcome<()> {
        let right = values.pop().unwrap_or(f64::NAN);
        let left = values.pop().unwrap_or(f64::NAN);
        values.push(self.combine(left, right, symbol)?);
        Ok(())
    }

    fn combine(&self, left: f64, right: f64, symbol: char) -> EvalOutcome<f64> {
        let op = self
            .classifier
            .operator(symbol)
            .ok_or(EvalError::UnknownOperator(symbol))?;

        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Subtract => Ok(left - right),
            BinaryOperator::Multiply => Ok(left * right),
            BinaryOperator::Divide if right == 0.0 => Err(EvalError::DivisionByZero),
            BinaryOperator::Divide => Ok(left / right),
            BinaryOperator::Power => Ok(left.powf(right)),
            BinaryOperator::Modulo if right == 0.0 => Err(EvalError::DivisionByZero),
            BinaryOperator::Modulo => Ok(left % right),
        }
    }
}

/// Index of the ')' that ends the argument of the function at `index`:
/// the first ')' after the call.
fn find_argument_end(tokens: &[Token], index: usize, name: &str) -> EvalOutcome<usize> {
    if tokens.get(index + 1) != Some(&Token::LParen) {
        return Err(EvalError::FunctionArgumentNotParenthesized(name.to_string()));
    }

    tokens[index + 2..]
        .iter()
        .position(|t| *t == Token::RParen)
        .map(|offset| index + 2 + offset)
        .ok_or_else(|| EvalError::MismatchedParentheses(name.to_string()))
}

/// Evaluates `tokens` with a one-off Evaluator over `config`.
pub fn evaluate(
    tokens: &[Token],
    bindings: &VariableBindings,
    config: &FormulaConfig,
) -> EvalOutcome<Option<f64>> {
    Evaluator::new(config).evaluate(tokens, bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_parser::{tokenize, MathFunction};

    fn eval_with(
        formula: &str,
        bindings: &[(&str, f64)],
        config: &FormulaConfig,
    ) -> EvalOutcome<Option<f64>> {
        let bindings: VariableBindings = bindings
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        evaluate(&tokenize(formula, config), &bindings, config)
    }

    fn eval(formula: &str, bindings: &[(&str, f64)]) -> EvalOutcome<Option<f64>> {
        eval_with(formula, bindings, &FormulaConfig::default())
    }

    #[test]
    fn test_respects_precedence() {
        assert_eq!(eval("2+3*4", &[]), Ok(Some(14.0)));
        assert_eq!(eval("2*3+4", &[]), Ok(Some(10.0)));
        assert_eq!(eval("2+3^2", &[]), Ok(Some(11.0)));
    }

    #[test]
    fn test_respects_parentheses() {
        assert_eq!(eval("(2+3)*4", &[]), Ok(Some(20.0)));
        assert_eq!(eval("2*(3+4)", &[]), Ok(Some(14.0)));
    }

    #[test]
    fn test_operators_are_left_associative() {
        assert_eq!(eval("2^3^2", &[]), Ok(Some(64.0)));
        assert_eq!(eval("10-3-2", &[]), Ok(Some(5.0)));
        assert_eq!(eval("16/4/2", &[]), Ok(Some(2.0)));
    }

    #[test]
    fn test_division_by_zero_fails() {
        assert_eq!(eval("2/0", &[]), Err(EvalError::DivisionByZero));
        assert_eq!(eval("2/(1-1)", &[]), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_implicit_multiplication_uses_bindings() {
        assert_eq!(eval("2a", &[("a", 3.0)]), Ok(Some(6.0)));
        assert_eq!(eval("ab", &[("a", 2.0), ("b", 3.0)]), Ok(Some(6.0)));
    }

    #[test]
    fn test_applies_functions() {
        assert_eq!(eval("sin(0)", &[]), Ok(Some(0.0)));
        assert_eq!(eval("sqrt(9)", &[]), Ok(Some(3.0)));
        assert_eq!(eval("2*abs(x)", &[("x", -4.0)]), Ok(Some(8.0)));
        assert_eq!(eval("sqrt(16)+1", &[]), Ok(Some(5.0)));
    }

    #[test]
    fn test_tolerates_unmatched_parentheses() {
        assert_eq!(eval("(2+3", &[]), Ok(Some(5.0)));
        assert_eq!(eval("2+3)", &[]), Ok(Some(5.0)));
        assert_eq!(eval("((2)", &[]), Ok(Some(2.0)));
    }

    #[test]
    fn test_empty_input_has_no_result() {
        assert_eq!(eval("", &[]), Ok(None));
        assert_eq!(eval("sin()", &[]), Ok(None));
    }

    #[test]
    fn test_function_without_parentheses_fails() {
        assert_eq!(
            eval("sin 0", &[]),
            Err(EvalError::FunctionArgumentNotParenthesized("sin".to_string()))
        );
        assert_eq!(
            eval("sqrt", &[]),
            Err(EvalError::FunctionArgumentNotParenthesized("sqrt".to_string()))
        );
    }

    #[test]
    fn test_function_without_closing_paren_fails() {
        assert_eq!(
            eval("sin(0", &[]),
            Err(EvalError::MismatchedParentheses("sin".to_string()))
        );
    }

    #[test]
    fn test_function_argument_stops_at_first_closing_paren() {
        // sqrt((4)*4) is read as sqrt((4) * 4 )
        assert_eq!(eval("sqrt((4)*4)", &[]), Ok(Some(8.0)));
        assert_eq!(
            eval("sqrt(sin(0))", &[]),
            Err(EvalError::MismatchedParentheses("sin".to_string()))
        );
    }

    #[test]
    fn test_domain_errors_become_nan() {
        assert!(eval("asin(2)", &[]).unwrap().unwrap().is_nan());
        assert!(eval("(0-8)^0.5", &[]).unwrap().unwrap().is_nan());
        assert!(eval("sqrt(x)", &[("x", -1.0)]).unwrap().unwrap().is_nan());
    }

    #[test]
    fn test_missing_operand_is_nan() {
        assert!(eval("-3", &[]).unwrap().unwrap().is_nan());
        assert!(eval("x+1", &[]).unwrap().unwrap().is_nan());
    }

    #[test]
    fn test_skips_unrecognized_tokens() {
        assert_eq!(eval("2 + $ 3", &[]), Ok(Some(5.0)));
        assert_eq!(eval("2 3", &[]), Ok(Some(2.0)));
    }

    #[test]
    fn test_bindings_shadow_function_names() {
        assert_eq!(eval("sin", &[("sin", 7.0)]), Ok(Some(7.0)));
    }

    #[test]
    fn test_unknown_operator_is_reported() {
        // No '*' configured, but the lexer still inserts one for "2a"
        let config = FormulaConfig::new(vec![BinaryOperator::Add], vec![MathFunction::Sqrt]);
        assert_eq!(
            eval_with("2a", &[("a", 3.0)], &config),
            Err(EvalError::UnknownOperator('*'))
        );
    }

    #[test]
    fn test_modulo_with_extended_config() {
        let config = FormulaConfig::extended();
        assert_eq!(eval_with("7%3", &[], &config), Ok(Some(1.0)));
        assert_eq!(eval_with("1+7%3*2", &[], &config), Ok(Some(3.0)));
        assert_eq!(eval_with("7%0", &[], &config), Err(EvalError::DivisionByZero));
        assert_eq!(eval_with("cosh(0)", &[], &config), Ok(Some(1.0)));
    }

    #[test]
    fn test_single_operator_matches_direct_arithmetic() {
        let config = FormulaConfig::extended();
        let evaluator = Evaluator::new(&config);
        let bindings = VariableBindings::new();
        let operands: [(f64, f64); 4] = [(6.0, 3.0), (-2.5, 4.0), (0.0, 7.0), (1.5, -0.5)];

        for op in BinaryOperator::ALL {
            for (a, b) in operands {
                let tokens = [
                    Token::number(&a.to_string()).unwrap(),
                    Token::Operator(op.symbol()),
                    Token::number(&b.to_string()).unwrap(),
                ];
                let expected = match op {
                    BinaryOperator::Add => a + b,
                    BinaryOperator::Subtract => a - b,
                    BinaryOperator::Multiply => a * b,
                    BinaryOperator::Divide => a / b,
                    BinaryOperator::Power => a.powf(b),
                    BinaryOperator::Modulo => a % b,
                };
                let actual = evaluator.evaluate(&tokens, &bindings).unwrap().unwrap();
                assert!(
                    actual == expected || (actual.is_nan() && expected.is_nan()),
                    "{} {} {}: {} != {}",
                    a,
                    op.symbol(),
                    b,
                    actual,
                    expected
                );
            }
        }
    }
}
