//! FILENAME: core/engine/src/error.rs

use calc_parser::{Operator, ParseError, Token};
use thiserror::Error;

/// Failures raised by a numeric provider for a single operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Division by zero")]
    DivideByZero,

    /// `argument` is the argument list as written, e.g. "-4" or "-8, 0.5".
    #[error("Domain error: {function}({argument}) has no finite real result")]
    Domain {
        function: &'static str,
        argument: String,
    },
}

impl CalculationError {
    pub fn domain(function: &'static str, args: &[f64]) -> Self {
        CalculationError::Domain {
            function,
            argument: args
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub type CalcResult<T> = Result<T, CalculationError>;

/// The single error type returned by expression evaluation.
/// Lower-level errors are carried unchanged and display their own message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(Operator),

    #[error("Expression has {0} values left with no operator between them")]
    DanglingOperands(usize),

    #[error("Unexpected token '{0}' in postfix sequence")]
    UnexpectedToken(Token),

    #[error("Empty expression")]
    Empty,
}

impl ExpressionError {
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(
            self,
            ExpressionError::Calculation(CalculationError::DivideByZero)
        )
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            ExpressionError::Calculation(CalculationError::Domain { .. })
        )
    }
}

/// Problems loading an `EvaluatorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}
