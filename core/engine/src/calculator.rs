//! FILENAME: core/engine/src/calculator.rs
//! PURPOSE: One-stop entry point for front ends: tokenize, check variables,
//! evaluate and render markup for a formula string.
//! CONTEXT: Owns a FormulaConfig so callers do not have to thread it through
//! every call. Each call re-tokenizes the formula; nothing is cached.

use crate::error::CalcError;
use crate::evaluator::{Evaluator, VariableBindings};
use formula_parser::{extract_variables, to_markup, tokenize, FormulaConfig, Token};
use serde::{Deserialize, Serialize};

/// Everything a front end shows for a formula, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaReport {
    pub formula: String,
    pub markup: String,
    pub variables: Vec<String>,
    pub result: Option<f64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: FormulaConfig,
}

impl Calculator {
    pub fn new(config: FormulaConfig) -> Self {
        Calculator { config }
    }

    pub fn config(&self) -> &FormulaConfig {
        &self.config
    }

    pub fn tokenize(&self, formula: &str) -> Vec<Token> {
        tokenize(formula, &self.config)
    }

    /// Variables the formula needs bindings for, in order of appearance.
    pub fn variables(&self, formula: &str) -> Vec<String> {
        extract_variables(&self.tokenize(formula), &self.config)
    }

    /// Evaluates `formula`, first making sure every variable it mentions
    /// has a binding.
    pub fn calculate(
        &self,
        formula: &str,
        bindings: &VariableBindings,
    ) -> Result<Option<f64>, CalcError> {
        let tokens = self.tokenize(formula);

        let missing: Vec<String> = extract_variables(&tokens, &self.config)
            .into_iter()
            .filter(|name| !bindings.contains_key(name))
            .collect();
        if !missing.is_empty() {
            log::debug!("[CALC] '{}' missing bindings for {:?}", formula, missing);
            return Err(CalcError::UndefinedVariables(missing));
        }

        let result = Evaluator::new(&self.config).evaluate(&tokens, bindings)?;
        log::debug!("[CALC] '{}' = {:?}", formula, result);
        Ok(result)
    }

    pub fn markup(&self, formula: &str) -> String {
        to_markup(formula, &self.config)
    }

    /// Runs the whole pipeline and folds any failure into `error`.
    pub fn report(&self, formula: &str, bindings: &VariableBindings) -> FormulaReport {
        let (result, error) = match self.calculate(formula, bindings) {
            Ok(result) => (result, None),
            Err(e) => (None, Some(e.to_string())),
        };

        FormulaReport {
            formula: formula.to_string(),
            markup: self.markup(formula),
            variables: self.variables(formula),
            result,
            error,
        }
    }
}
