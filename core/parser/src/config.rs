//! FILENAME: core/parser/src/config.rs
//! PURPOSE: Operator set and function table that drive tokenizing and evaluation.
//! CONTEXT: A FormulaConfig is an immutable value handed to the classifier,
//! lexer, evaluator and markup renderer. Nothing in the workspace reads a
//! global table; two configurations can be used side by side.
//!
//! FUNCTION ORDER:
//! The lexer picks the FIRST function (in table order) whose name is a prefix
//! of the remaining input. A name that starts with an earlier name (e.g.
//! "sinh" after "sin") can never be matched, so such tables are rejected by
//! `validate`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// OPERATORS
// ============================================================================

/// Binary arithmetic operators that can appear in a FormulaConfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
    #[serde(rename = "%")]
    Modulo,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 6] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Power,
        BinaryOperator::Modulo,
    ];

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Power => '^',
            BinaryOperator::Modulo => '%',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Binding strength: 1 for + -, 2 for * / %, 3 for ^.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 2,
            BinaryOperator::Power => 3,
        }
    }
}

// ============================================================================
// FUNCTIONS
// ============================================================================

/// Unary real functions a function table may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Log,
    Log10,
    Exp,
    Sqrt,
    Abs,
    Asin,
    Acos,
    Atan,
    Cot,
    Sec,
    Csc,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
}

impl MathFunction {
    pub fn name(self) -> &'static str {
        match self {
            MathFunction::Sin => "sin",
            MathFunction::Cos => "cos",
            MathFunction::Tan => "tan",
            MathFunction::Log => "log",
            MathFunction::Log10 => "log10",
            MathFunction::Exp => "exp",
            MathFunction::Sqrt => "sqrt",
            MathFunction::Abs => "abs",
            MathFunction::Asin => "asin",
            MathFunction::Acos => "acos",
            MathFunction::Atan => "atan",
            MathFunction::Cot => "cot",
            MathFunction::Sec => "sec",
            MathFunction::Csc => "csc",
            MathFunction::Sinh => "sinh",
            MathFunction::Cosh => "cosh",
            MathFunction::Tanh => "tanh",
            MathFunction::Asinh => "asinh",
            MathFunction::Acosh => "acosh",
            MathFunction::Atanh => "atanh",
        }
    }

    /// Applies the function. Out-of-domain inputs yield NaN (or infinity),
    /// never an error.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            MathFunction::Sin => x.sin(),
            MathFunction::Cos => x.cos(),
            MathFunction::Tan => x.tan(),
            MathFunction::Log => x.ln(),
            MathFunction::Log10 => x.log10(),
            MathFunction::Exp => x.exp(),
            MathFunction::Sqrt => x.sqrt(),
            MathFunction::Abs => x.abs(),
            MathFunction::Asin => x.asin(),
            MathFunction::Acos => x.acos(),
            MathFunction::Atan => x.atan(),
            MathFunction::Cot => 1.0 / x.tan(),
            MathFunction::Sec => 1.0 / x.cos(),
            MathFunction::Csc => 1.0 / x.sin(),
            MathFunction::Sinh => x.sinh(),
            MathFunction::Cosh => x.cosh(),
            MathFunction::Tanh => x.tanh(),
            MathFunction::Asinh => x.asinh(),
            MathFunction::Acosh => x.acosh(),
            MathFunction::Atanh => x.atanh(),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate operator: {0}")]
    DuplicateOperator(char),

    #[error("Duplicate function: {0}")]
    DuplicateFunction(String),

    #[error("Function '{shadowed}' is never matched because '{by}' is listed first")]
    ShadowedFunction { shadowed: String, by: String },
}

/// Operator set and ordered function table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub operators: Vec<BinaryOperator>,
    pub functions: Vec<MathFunction>,
}

impl Default for FormulaConfig {
    /// The five classic operators and the basic scientific functions.
    fn default() -> Self {
        use MathFunction::*;
        FormulaConfig {
            operators: vec![
                BinaryOperator::Add,
                BinaryOperator::Subtract,
                BinaryOperator::Multiply,
                BinaryOperator::Divide,
                BinaryOperator::Power,
            ],
            functions: vec![Sin, Cos, Tan, Log10, Log, Exp, Sqrt, Abs, Asin, Acos, Atan],
        }
    }
}

impl FormulaConfig {
    pub fn new(operators: Vec<BinaryOperator>, functions: Vec<MathFunction>) -> Self {
        FormulaConfig {
            operators,
            functions,
        }
    }

    /// Default table plus `%`, reciprocal trig and hyperbolic functions.
    /// Hyperbolic names are listed before their circular prefixes.
    pub fn extended() -> Self {
        use MathFunction::*;
        FormulaConfig {
            operators: BinaryOperator::ALL.to_vec(),
            functions: vec![
                Sinh, Cosh, Tanh, Asinh, Acosh, Atanh, Sin, Cos, Tan, Cot, Sec, Csc, Log10, Log,
                Exp, Sqrt, Abs, Asin, Acos, Atan,
            ],
        }
    }

    /// Parses and validates a configuration such as
    /// `{"operators": ["+", "*"], "functions": ["sin", "sqrt"]}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormulaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rejects duplicate entries and function names hidden behind an
    /// earlier prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, op) in self.operators.iter().enumerate() {
            if self.operators[..i].contains(op) {
                return Err(ConfigError::DuplicateOperator(op.symbol()));
            }
        }

        for (i, function) in self.functions.iter().enumerate() {
            let name = function.name();
            for earlier in &self.functions[..i] {
                if earlier == function {
                    return Err(ConfigError::DuplicateFunction(name.to_string()));
                }
                if name.starts_with(earlier.name()) {
                    return Err(ConfigError::ShadowedFunction {
                        shadowed: name.to_string(),
                        by: earlier.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
