//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates postfix token sequences to a single number.
//! CONTEXT: Last stage of the pipeline. The parser crate has already put the
//! tokens in postfix order, so this is a plain stack machine: numbers push,
//! operators pop two operands and push the provider's result.

use crate::error::ExpressionError;
use crate::provider::NumericProvider;
use calc_parser::Token;
use log::trace;

/// Runs the stack machine over `tokens`.
///
/// The first value popped for an operator is its right operand: `a b -`
/// computes `a - b`. Exactly one value must remain at the end.
pub fn eval_postfix<P>(tokens: &[Token], provider: &P) -> Result<f64, ExpressionError>
where
    P: NumericProvider + ?Sized,
{
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len() / 2 + 1);

    for &token in tokens {
        match token {
            Token::Number(n) => stack.push(n),

            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(ExpressionError::MissingOperand(op));
                };
                let result = provider.binary(op, a, b)?;
                trace!("{} {} {} = {}", a, op, b, result);
                stack.push(result);
            }

            Token::LParen | Token::RParen => {
                return Err(ExpressionError::UnexpectedToken(token));
            }
        }
    }

    match stack.len() {
        0 => Err(ExpressionError::Empty),
        1 => Ok(stack[0]),
        n => Err(ExpressionError::DanglingOperands(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalcResult, CalculationError};
    use crate::provider::StandardProvider;
    use calc_parser::Operator;

    /// Provider whose only job is to show which operands it was handed.
    /// `a - b` comes back as `a * 100 + b`; everything else is unused.
    struct OrderProbe;

    impl NumericProvider for OrderProbe {
        fn add(&self, a: f64, b: f64) -> CalcResult<f64> {
            Ok(a + b)
        }
        fn subtract(&self, a: f64, b: f64) -> CalcResult<f64> {
            Ok(a * 100.0 + b)
        }
        fn multiply(&self, a: f64, b: f64) -> CalcResult<f64> {
            Ok(a * b)
        }
        fn divide(&self, _: f64, _: f64) -> CalcResult<f64> {
            Err(CalculationError::DivideByZero)
        }
        fn modulo(&self, a: f64, b: f64) -> CalcResult<f64> {
            Ok(a % b)
        }
        fn power(&self, a: f64, b: f64) -> CalcResult<f64> {
            Ok(a.powf(b))
        }
        fn sin(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn cos(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn tan(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn asin(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn acos(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn atan(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn log10(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn ln(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn sqrt(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn exp(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn abs(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn deg_to_rad(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
        fn rad_to_deg(&self, x: f64) -> CalcResult<f64> {
            Ok(x)
        }
    }

    fn num(n: f64) -> Token {
        Token::Number(n)
    }

    fn op(o: Operator) -> Token {
        Token::Operator(o)
    }

    #[test]
    fn test_single_number() {
        assert_eq!(eval_postfix(&[num(42.5)], &StandardProvider::new()), Ok(42.5));
    }

    #[test]
    fn test_operand_order() {
        // 7 3 - : a = 7 (popped second), b = 3 (popped first)
        let tokens = [num(7.0), num(3.0), op(Operator::Minus)];
        assert_eq!(eval_postfix(&tokens, &OrderProbe), Ok(703.0));
    }

    #[test]
    fn test_delegates_to_provider() {
        let tokens = [num(1.0), num(1.0), op(Operator::Slash)];
        assert_eq!(
            eval_postfix(&tokens, &OrderProbe),
            Err(ExpressionError::Calculation(CalculationError::DivideByZero))
        );
    }

    #[test]
    fn test_nested_postfix() {
        // 2 3 4 * +  ==  2 + 3 * 4
        let tokens = [
            num(2.0),
            num(3.0),
            num(4.0),
            op(Operator::Asterisk),
            op(Operator::Plus),
        ];
        assert_eq!(eval_postfix(&tokens, &StandardProvider::new()), Ok(14.0));
    }

    #[test]
    fn test_stack_underflow() {
        let tokens = [num(2.0), op(Operator::Plus)];
        assert_eq!(
            eval_postfix(&tokens, &StandardProvider::new()),
            Err(ExpressionError::MissingOperand(Operator::Plus))
        );
    }

    #[test]
    fn test_leftover_operands() {
        let tokens = [num(2.0), num(3.0)];
        assert_eq!(
            eval_postfix(&tokens, &StandardProvider::new()),
            Err(ExpressionError::DanglingOperands(2))
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(
            eval_postfix(&[], &StandardProvider::new()),
            Err(ExpressionError::Empty)
        );
    }

    #[test]
    fn test_parenthesis_is_rejected() {
        let tokens = [num(1.0), Token::LParen];
        assert_eq!(
            eval_postfix(&tokens, &StandardProvider::new()),
            Err(ExpressionError::UnexpectedToken(Token::LParen))
        );
    }
}
