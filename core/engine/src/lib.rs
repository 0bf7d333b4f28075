//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//! The parser crate turns text into postfix tokens; this crate supplies
//! the numbers: constants, function calls, operators and the final result.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod history;
pub mod provider;

// Re-export commonly used types at the crate root
pub use calculator::{evaluate, Calculator};
pub use config::EvaluatorConfig;
pub use constants::{constant_value, substitute_constants};
pub use error::{CalcResult, CalculationError, ConfigError, ExpressionError};
pub use evaluator::eval_postfix;
pub use functions::{substitute_functions, UnaryFunction};
pub use history::{OperationRecord, Outcome, RecordingProvider};
pub use provider::{NumericProvider, StandardProvider, DEFAULT_TAN_TOLERANCE};

// The parser's types show up in this crate's signatures
pub use calc_parser::{Associativity, Operator, ParseError, Token};
