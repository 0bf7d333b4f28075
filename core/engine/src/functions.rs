//! FILENAME: core/engine/src/functions.rs
//! PURPOSE: Named single-argument functions and the pass that resolves them.
//! CONTEXT: Runs after constant substitution and before the lexer. Every
//! `name(argument)` call in the text is evaluated (the argument recursively,
//! as a full expression) and replaced by its numeric result, so the lexer
//! only ever sees numbers and operators.
//!
//! SUPPORTED FUNCTIONS (case-sensitive):
//!   sin, cos, tan, asin, acos, atan      trigonometry in radians
//!   log10, log (base 10), ln             logarithms
//!   sqrt, exp, abs
//!   degToRad, radToDeg                   angle conversion

use crate::error::ExpressionError;
use crate::provider::NumericProvider;
use calc_parser::{split_calls, Fragment};
use log::debug;

/// A function that can appear in call syntax inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log10,
    Ln,
    Sqrt,
    Exp,
    Abs,
    DegToRad,
    RadToDeg,
}

/// Names accepted in call syntax. `log` is an alias of `log10`.
const FUNCTION_NAMES: &[(&str, UnaryFunction)] = &[
    ("sin", UnaryFunction::Sin),
    ("cos", UnaryFunction::Cos),
    ("tan", UnaryFunction::Tan),
    ("asin", UnaryFunction::Asin),
    ("acos", UnaryFunction::Acos),
    ("atan", UnaryFunction::Atan),
    ("log10", UnaryFunction::Log10),
    ("log", UnaryFunction::Log10),
    ("ln", UnaryFunction::Ln),
    ("sqrt", UnaryFunction::Sqrt),
    ("exp", UnaryFunction::Exp),
    ("abs", UnaryFunction::Abs),
    ("degToRad", UnaryFunction::DegToRad),
    ("radToDeg", UnaryFunction::RadToDeg),
];

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 13] = [
        UnaryFunction::Sin,
        UnaryFunction::Cos,
        UnaryFunction::Tan,
        UnaryFunction::Asin,
        UnaryFunction::Acos,
        UnaryFunction::Atan,
        UnaryFunction::Log10,
        UnaryFunction::Ln,
        UnaryFunction::Sqrt,
        UnaryFunction::Exp,
        UnaryFunction::Abs,
        UnaryFunction::DegToRad,
        UnaryFunction::RadToDeg,
    ];

    /// Resolves a call name as written in an expression.
    pub fn from_name(name: &str) -> Option<UnaryFunction> {
        FUNCTION_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, function)| function)
    }

    /// The canonical name used in expressions.
    pub fn name(self) -> &'static str {
        match self {
            UnaryFunction::Sin => "sin",
            UnaryFunction::Cos => "cos",
            UnaryFunction::Tan => "tan",
            UnaryFunction::Asin => "asin",
            UnaryFunction::Acos => "acos",
            UnaryFunction::Atan => "atan",
            UnaryFunction::Log10 => "log10",
            UnaryFunction::Ln => "ln",
            UnaryFunction::Sqrt => "sqrt",
            UnaryFunction::Exp => "exp",
            UnaryFunction::Abs => "abs",
            UnaryFunction::DegToRad => "degToRad",
            UnaryFunction::RadToDeg => "radToDeg",
        }
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Replaces every call in `text` with the decimal value it evaluates to.
///
/// `eval_argument` evaluates the text between a call's parentheses; the
/// calculator passes itself here, which is what makes nested calls work.
pub fn substitute_functions<P, F>(
    text: &str,
    provider: &P,
    mut eval_argument: F,
) -> Result<String, ExpressionError>
where
    P: NumericProvider + ?Sized,
    F: FnMut(&str) -> Result<f64, ExpressionError>,
{
    let mut output = String::with_capacity(text.len());

    for fragment in split_calls(text)? {
        match fragment {
            Fragment::Call { name, argument, .. } => {
                let function = UnaryFunction::from_name(name)
                    .ok_or_else(|| ExpressionError::UnknownFunction(name.to_string()))?;
                let value = eval_argument(argument)?;
                let result = provider.unary(function, value)?;
                debug!("{}({}) = {}", function, value, result);
                splice_number(&mut output, result);
            }
            other => output.push_str(other.source()),
        }
    }

    Ok(output)
}

/// Writes `value` as a standalone literal. Spaces keep it from fusing with
/// neighbouring digits; negatives (-0.0 included) are parenthesized so the
/// lexer reads the sign as part of the literal.
pub(crate) fn splice_number(output: &mut String, value: f64) {
    if value.is_sign_negative() {
        output.push_str(&format!(" ({}) ", value));
    } else {
        output.push_str(&format!(" {} ", value));
    }
}
