//! FILENAME: tests/common/mod.rs
//! Shared fixtures for the engine's integration tests.

#![allow(dead_code)]

use calc_engine::{CalcResult, CalculationError, Calculator, EvaluatorConfig, NumericProvider};

/// Default tolerance for comparing results that pass through libm.
pub const TEST_PRECISION: f64 = 1e-9;

/// Asserts that two floats differ by less than an epsilon.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, $crate::common::TEST_PRECISION)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() < $epsilon,
            "assertion failed: {} is not within {} of {}",
            left,
            $epsilon,
            right
        );
    }};
}

/// Provider with no logging, no history and no domain checks beyond
/// division by zero. Used to show the evaluator only relies on the trait.
pub struct PlainProvider;

impl NumericProvider for PlainProvider {
    fn add(&self, a: f64, b: f64) -> CalcResult<f64> {
        Ok(a + b)
    }
    fn subtract(&self, a: f64, b: f64) -> CalcResult<f64> {
        Ok(a - b)
    }
    fn multiply(&self, a: f64, b: f64) -> CalcResult<f64> {
        Ok(a * b)
    }
    fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalculationError::DivideByZero);
        }
        Ok(a / b)
    }
    fn modulo(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalculationError::DivideByZero);
        }
        Ok(a % b)
    }
    fn power(&self, a: f64, b: f64) -> CalcResult<f64> {
        Ok(a.powf(b))
    }
    fn sin(&self, x: f64) -> CalcResult<f64> {
        Ok(x.sin())
    }
    fn cos(&self, x: f64) -> CalcResult<f64> {
        Ok(x.cos())
    }
    fn tan(&self, x: f64) -> CalcResult<f64> {
        Ok(x.tan())
    }
    fn asin(&self, x: f64) -> CalcResult<f64> {
        Ok(x.asin())
    }
    fn acos(&self, x: f64) -> CalcResult<f64> {
        Ok(x.acos())
    }
    fn atan(&self, x: f64) -> CalcResult<f64> {
        Ok(x.atan())
    }
    fn log10(&self, x: f64) -> CalcResult<f64> {
        Ok(x.log10())
    }
    fn ln(&self, x: f64) -> CalcResult<f64> {
        Ok(x.ln())
    }
    fn sqrt(&self, x: f64) -> CalcResult<f64> {
        Ok(x.sqrt())
    }
    fn exp(&self, x: f64) -> CalcResult<f64> {
        Ok(x.exp())
    }
    fn abs(&self, x: f64) -> CalcResult<f64> {
        Ok(x.abs())
    }
    fn deg_to_rad(&self, x: f64) -> CalcResult<f64> {
        Ok(x.to_radians())
    }
    fn rad_to_deg(&self, x: f64) -> CalcResult<f64> {
        Ok(x.to_degrees())
    }
}

/// Calculator over `PlainProvider` with default settings.
pub fn plain_calculator() -> Calculator<PlainProvider> {
    Calculator::with_provider(PlainProvider, EvaluatorConfig::default())
}
