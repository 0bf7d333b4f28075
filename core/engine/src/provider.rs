//! FILENAME: core/engine/src/provider.rs
//! PURPOSE: The numeric operations the evaluator delegates to.
//! CONTEXT: The evaluator never does arithmetic itself. Every operator in a
//! postfix sequence and every function call goes through a `NumericProvider`,
//! which is also where domain checks live.
//!
//! DOMAIN RULES (StandardProvider):
//! - divide, modulo: divisor exactly 0.0 --> DivideByZero
//! - asin, acos: argument outside [-1, 1] --> Domain
//! - sqrt: negative argument --> Domain
//! - log10, ln: argument <= 0 --> Domain
//! - tan: argument within `tan_tolerance` of an odd multiple of pi/2 --> Domain
//! - any operation whose result is NaN or infinite --> Domain

use crate::error::{CalcResult, CalculationError};
use crate::functions::UnaryFunction;
use calc_parser::Operator;
use std::f64::consts::{FRAC_PI_2, PI};

/// Default distance from a tangent asymptote that is treated as on it.
pub const DEFAULT_TAN_TOLERANCE: f64 = 1e-10;

/// Binary arithmetic and unary math functions over f64.
pub trait NumericProvider {
    // Binary arithmetic
    fn add(&self, a: f64, b: f64) -> CalcResult<f64>;
    fn subtract(&self, a: f64, b: f64) -> CalcResult<f64>;
    fn multiply(&self, a: f64, b: f64) -> CalcResult<f64>;
    fn divide(&self, a: f64, b: f64) -> CalcResult<f64>;
    fn modulo(&self, a: f64, b: f64) -> CalcResult<f64>;
    fn power(&self, base: f64, exponent: f64) -> CalcResult<f64>;

    // Trigonometry (radians)
    fn sin(&self, x: f64) -> CalcResult<f64>;
    fn cos(&self, x: f64) -> CalcResult<f64>;
    fn tan(&self, x: f64) -> CalcResult<f64>;
    fn asin(&self, x: f64) -> CalcResult<f64>;
    fn acos(&self, x: f64) -> CalcResult<f64>;
    fn atan(&self, x: f64) -> CalcResult<f64>;

    // Logarithms, roots and the rest
    fn log10(&self, x: f64) -> CalcResult<f64>;
    fn ln(&self, x: f64) -> CalcResult<f64>;
    fn sqrt(&self, x: f64) -> CalcResult<f64>;
    fn exp(&self, x: f64) -> CalcResult<f64>;
    fn abs(&self, x: f64) -> CalcResult<f64>;
    fn deg_to_rad(&self, degrees: f64) -> CalcResult<f64>;
    fn rad_to_deg(&self, radians: f64) -> CalcResult<f64>;

    /// Applies the operation behind an operator token to `a op b`.
    fn binary(&self, op: Operator, a: f64, b: f64) -> CalcResult<f64> {
        match op {
            Operator::Plus => self.add(a, b),
            Operator::Minus => self.subtract(a, b),
            Operator::Asterisk => self.multiply(a, b),
            Operator::Slash => self.divide(a, b),
            Operator::Percent => self.modulo(a, b),
            Operator::Caret => self.power(a, b),
        }
    }

    /// Applies a named single-argument function.
    fn unary(&self, function: UnaryFunction, x: f64) -> CalcResult<f64> {
        match function {
            UnaryFunction::Sin => self.sin(x),
            UnaryFunction::Cos => self.cos(x),
            UnaryFunction::Tan => self.tan(x),
            UnaryFunction::Asin => self.asin(x),
            UnaryFunction::Acos => self.acos(x),
            UnaryFunction::Atan => self.atan(x),
            UnaryFunction::Log10 => self.log10(x),
            UnaryFunction::Ln => self.ln(x),
            UnaryFunction::Sqrt => self.sqrt(x),
            UnaryFunction::Exp => self.exp(x),
            UnaryFunction::Abs => self.abs(x),
            UnaryFunction::DegToRad => self.deg_to_rad(x),
            UnaryFunction::RadToDeg => self.rad_to_deg(x),
        }
    }
}

/// IEEE-754 arithmetic with the domain checks listed above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardProvider {
    tan_tolerance: f64,
}

impl StandardProvider {
    pub fn new() -> Self {
        StandardProvider {
            tan_tolerance: DEFAULT_TAN_TOLERANCE,
        }
    }

    pub fn with_tan_tolerance(tan_tolerance: f64) -> Self {
        StandardProvider { tan_tolerance }
    }

    pub fn tan_tolerance(&self) -> f64 {
        self.tan_tolerance
    }

    /// True when `x` sits on (or within tolerance of) an odd multiple of pi/2.
    fn near_tan_asymptote(&self, x: f64) -> bool {
        let k = ((x - FRAC_PI_2) / PI).round();
        let asymptote = FRAC_PI_2 + k * PI;
        (x - asymptote).abs() < self.tan_tolerance
    }
}

impl Default for StandardProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects NaN and infinite results so they never reach the expression text.
fn finite(function: &'static str, args: &[f64], value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::domain(function, args))
    }
}

impl NumericProvider for StandardProvider {
    fn add(&self, a: f64, b: f64) -> CalcResult<f64> {
        finite("add", &[a, b], a + b)
    }

    fn subtract(&self, a: f64, b: f64) -> CalcResult<f64> {
        finite("subtract", &[a, b], a - b)
    }

    fn multiply(&self, a: f64, b: f64) -> CalcResult<f64> {
        finite("multiply", &[a, b], a * b)
    }

    fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalculationError::DivideByZero);
        }
        finite("divide", &[a, b], a / b)
    }

    fn modulo(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalculationError::DivideByZero);
        }
        // Truncated remainder: the sign follows the dividend
        finite("modulo", &[a, b], a % b)
    }

    fn power(&self, base: f64, exponent: f64) -> CalcResult<f64> {
        finite("power", &[base, exponent], base.powf(exponent))
    }

    fn sin(&self, x: f64) -> CalcResult<f64> {
        finite("sin", &[x], x.sin())
    }

    fn cos(&self, x: f64) -> CalcResult<f64> {
        finite("cos", &[x], x.cos())
    }

    fn tan(&self, x: f64) -> CalcResult<f64> {
        if self.near_tan_asymptote(x) {
            return Err(CalculationError::domain("tan", &[x]));
        }
        finite("tan", &[x], x.tan())
    }

    fn asin(&self, x: f64) -> CalcResult<f64> {
        if !(-1.0..=1.0).contains(&x) {
            return Err(CalculationError::domain("asin", &[x]));
        }
        Ok(x.asin())
    }

    fn acos(&self, x: f64) -> CalcResult<f64> {
        if !(-1.0..=1.0).contains(&x) {
            return Err(CalculationError::domain("acos", &[x]));
        }
        Ok(x.acos())
    }

    fn atan(&self, x: f64) -> CalcResult<f64> {
        finite("atan", &[x], x.atan())
    }

    fn log10(&self, x: f64) -> CalcResult<f64> {
        if x <= 0.0 {
            return Err(CalculationError::domain("log10", &[x]));
        }
        finite("log10", &[x], x.log10())
    }

    fn ln(&self, x: f64) -> CalcResult<f64> {
        if x <= 0.0 {
            return Err(CalculationError::domain("ln", &[x]));
        }
        finite("ln", &[x], x.ln())
    }

    fn sqrt(&self, x: f64) -> CalcResult<f64> {
        if x < 0.0 {
            return Err(CalculationError::domain("sqrt", &[x]));
        }
        finite("sqrt", &[x], x.sqrt())
    }

    fn exp(&self, x: f64) -> CalcResult<f64> {
        finite("exp", &[x], x.exp())
    }

    fn abs(&self, x: f64) -> CalcResult<f64> {
        finite("abs", &[x], x.abs())
    }

    fn deg_to_rad(&self, degrees: f64) -> CalcResult<f64> {
        finite("deg_to_rad", &[degrees], degrees.to_radians())
    }

    fn rad_to_deg(&self, radians: f64) -> CalcResult<f64> {
        finite("rad_to_deg", &[radians], radians.to_degrees())
    }
}
