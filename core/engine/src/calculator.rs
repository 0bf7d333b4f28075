//! FILENAME: core/engine/src/calculator.rs
//! PURPOSE: The public entry point that evaluates an expression string.
//! CONTEXT: Wires the stages together. A `Calculator` owns a numeric
//! provider and a configuration; it holds no per-evaluation state, so one
//! instance can evaluate any number of expressions in sequence.
//!
//! PIPELINE:
//!   text --> substitute_constants --> substitute_functions (recursing into
//!   call arguments) --> tokenize --> to_postfix --> eval_postfix --> f64

use crate::config::EvaluatorConfig;
use crate::constants::substitute_constants;
use crate::error::ExpressionError;
use crate::evaluator::eval_postfix;
use crate::functions::substitute_functions;
use crate::provider::{NumericProvider, StandardProvider};
use calc_parser::{to_postfix_with, tokenize};
use log::{debug, trace};

pub struct Calculator<P = StandardProvider> {
    provider: P,
    config: EvaluatorConfig,
}

impl Calculator<StandardProvider> {
    /// Standard provider, default configuration.
    pub fn new() -> Self {
        Self::with_config(EvaluatorConfig::default())
    }

    /// Standard provider built from the configuration's tan tolerance.
    pub fn with_config(config: EvaluatorConfig) -> Self {
        let provider = StandardProvider::with_tan_tolerance(config.tan_tolerance);
        Calculator { provider, config }
    }
}

impl Default for Calculator<StandardProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NumericProvider> Calculator<P> {
    pub fn with_provider(provider: P, config: EvaluatorConfig) -> Self {
        Calculator { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates `expression`. Any failure in any stage aborts the whole
    /// evaluation; no partial result is produced.
    pub fn evaluate(&self, expression: &str) -> Result<f64, ExpressionError> {
        let result = self.evaluate_nested(expression, 0);
        match &result {
            Ok(value) => debug!("evaluate {:?} = {}", expression, value),
            Err(e) => debug!("evaluate {:?} failed: {}", expression, e),
        }
        result
    }

    /// `depth` counts enclosing calls; it only feeds the trace output.
    fn evaluate_nested(&self, expression: &str, depth: usize) -> Result<f64, ExpressionError> {
        trace!("[depth {}] {:?}", depth, expression);

        let text = substitute_constants(expression, &self.config)?;
        let text = substitute_functions(&text, &self.provider, |argument| {
            self.evaluate_nested(argument, depth + 1)
        })?;

        let tokens = tokenize(&text)?;
        let postfix = to_postfix_with(&tokens, self.config.power_associativity)?;
        eval_postfix(&postfix, &self.provider)
    }
}

/// Evaluates `expression` with the standard provider and default settings.
pub fn evaluate(expression: &str) -> Result<f64, ExpressionError> {
    Calculator::new().evaluate(expression)
}
