//! FILENAME: core/engine/src/history.rs
//! PURPOSE: A provider wrapper that logs and records every operation.
//! CONTEXT: The evaluator never asks for history; a host that wants an
//! operation log wraps its provider in `RecordingProvider` and hands that to
//! the `Calculator` instead. Interior mutability keeps the provider usable
//! through `&self`, matching the single-threaded evaluation model.

use crate::error::CalcResult;
use crate::provider::{NumericProvider, StandardProvider};
use log::{info, warn};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// What an operation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Value(f64),
    Error(String),
}

/// One provider call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    pub operation: &'static str,
    pub operands: Vec<f64>,
    pub outcome: Outcome,
}

pub struct RecordingProvider<P = StandardProvider> {
    inner: P,
    history: RefCell<Vec<OperationRecord>>,
    /// Successful calls per operation name.
    counts: RefCell<BTreeMap<&'static str, usize>>,
}

impl<P: NumericProvider> RecordingProvider<P> {
    pub fn new(inner: P) -> Self {
        RecordingProvider {
            inner,
            history: RefCell::new(Vec::new()),
            counts: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn history(&self) -> Vec<OperationRecord> {
        self.history.borrow().clone()
    }

    pub fn clear_history(&self) {
        self.history.borrow_mut().clear();
    }

    /// Number of successful calls per operation, keyed by operation name.
    pub fn statistics(&self) -> BTreeMap<&'static str, usize> {
        self.counts.borrow().clone()
    }

    pub fn reset_statistics(&self) {
        self.counts.borrow_mut().clear();
    }

    /// Serializes the history as a JSON array.
    pub fn history_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&*self.history.borrow())
    }

    fn track(
        &self,
        operation: &'static str,
        operands: &[f64],
        result: CalcResult<f64>,
    ) -> CalcResult<f64> {
        match &result {
            Ok(value) => {
                info!("[{}] {:?} = {}", operation, operands, value);
                *self.counts.borrow_mut().entry(operation).or_insert(0) += 1;
            }
            Err(e) => warn!("[{}] {:?} failed: {}", operation, operands, e),
        }

        self.history.borrow_mut().push(OperationRecord {
            operation,
            operands: operands.to_vec(),
            outcome: Outcome::from(&result),
        });

        result
    }
}

impl Default for RecordingProvider<StandardProvider> {
    fn default() -> Self {
        Self::new(StandardProvider::new())
    }
}

impl<P: NumericProvider> NumericProvider for RecordingProvider<P> {
    fn add(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.track("add", &[a, b], self.inner.add(a, b))
    }

    fn subtract(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.track("subtract", &[a, b], self.inner.subtract(a, b))
    }

    fn multiply(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.track("multiply", &[a, b], self.inner.multiply(a, b))
    }

    fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.track("divide", &[a, b], self.inner.divide(a, b))
    }

    fn modulo(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.track("modulo", &[a, b], self.inner.modulo(a, b))
    }

    fn power(&self, base: f64, exponent: f64) -> CalcResult<f64> {
        self.track("power", &[base, exponent], self.inner.power(base, exponent))
    }

    fn sin(&self, x: f64) -> CalcResult<f64> {
        self.track("sin", &[x], self.inner.sin(x))
    }

    fn cos(&self, x: f64) -> CalcResult<f64> {
        self.track("cos", &[x], self.inner.cos(x))
    }

    fn tan(&self, x: f64) -> CalcResult<f64> {
        self.track("tan", &[x], self.inner.tan(x))
    }

    fn asin(&self, x: f64) -> CalcResult<f64> {
        self.track("asin", &[x], self.inner.asin(x))
    }

    fn acos(&self, x: f64) -> CalcResult<f64> {
        self.track("acos", &[x], self.inner.acos(x))
    }

    fn atan(&self, x: f64) -> CalcResult<f64> {
        self.track("atan", &[x], self.inner.atan(x))
    }

    fn log10(&self, x: f64) -> CalcResult<f64> {
        self.track("log10", &[x], self.inner.log10(x))
    }

    fn ln(&self, x: f64) -> CalcResult<f64> {
        self.track("ln", &[x], self.inner.ln(x))
    }

    fn sqrt(&self, x: f64) -> CalcResult<f64> {
        self.track("sqrt", &[x], self.inner.sqrt(x))
    }

    fn exp(&self, x: f64) -> CalcResult<f64> {
        self.track("exp", &[x], self.inner.exp(x))
    }

    fn abs(&self, x: f64) -> CalcResult<f64> {
        self.track("abs", &[x], self.inner.abs(x))
    }

    fn deg_to_rad(&self, degrees: f64) -> CalcResult<f64> {
        self.track("deg_to_rad", &[degrees], self.inner.deg_to_rad(degrees))
    }

    fn rad_to_deg(&self, radians: f64) -> CalcResult<f64> {
        self.track("rad_to_deg", &[radians], self.inner.rad_to_deg(radians))
    }
}

impl Outcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(*v),
            Outcome::Error(_) => None,
        }
    }
}

impl From<&CalcResult<f64>> for Outcome {
    fn from(result: &CalcResult<f64>) -> Self {
        match result {
            Ok(v) => Outcome::Value(*v),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculationError;

    #[test]
    fn test_records_each_call_in_order() {
        let recorder: RecordingProvider = RecordingProvider::default();
        recorder.add(2.0, 3.0).unwrap();
        recorder.sqrt(9.0).unwrap();

        let history = recorder.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].operation, "add");
        assert_eq!(history[0].operands, vec![2.0, 3.0]);
        assert_eq!(history[0].outcome, Outcome::Value(5.0));
        assert_eq!(history[1].operation, "sqrt");
        assert_eq!(history[1].outcome.value(), Some(3.0));
    }

    #[test]
    fn test_failures_are_recorded_but_not_counted() {
        let recorder: RecordingProvider = RecordingProvider::default();
        assert_eq!(recorder.divide(1.0, 0.0), Err(CalculationError::DivideByZero));

        let history = recorder.history();
        assert_eq!(
            history[0].outcome,
            Outcome::Error("Division by zero".to_string())
        );
        assert!(recorder.statistics().is_empty());
    }

    #[test]
    fn test_statistics_and_reset() {
        let recorder: RecordingProvider = RecordingProvider::default();
        recorder.add(1.0, 1.0).unwrap();
        recorder.add(2.0, 2.0).unwrap();
        recorder.multiply(2.0, 2.0).unwrap();

        let stats = recorder.statistics();
        assert_eq!(stats.get("add"), Some(&2));
        assert_eq!(stats.get("multiply"), Some(&1));

        recorder.reset_statistics();
        assert!(recorder.statistics().is_empty());
        // History is independent of the counters
        assert_eq!(recorder.history().len(), 3);

        recorder.clear_history();
        assert!(recorder.history().is_empty());
    }

    #[test]
    fn test_history_serializes_to_json() {
        let recorder: RecordingProvider = RecordingProvider::default();
        recorder.power(2.0, 3.0).unwrap();
        let json = recorder.history_json().unwrap();
        assert_eq!(
            json,
            r#"[{"operation":"power","operands":[2.0,3.0],"outcome":{"value":8.0}}]"#
        );
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: CalcResult<f64> = Ok(1.5);
        let err: CalcResult<f64> = Err(CalculationError::DivideByZero);
        assert_eq!(Outcome::from(&ok), Outcome::Value(1.5));
        assert_eq!(Outcome::from(&err).value(), None);
    }
}
