//! FILENAME: core/parser/src/postfix.rs
//! PURPOSE: Reorders infix tokens into postfix (Reverse Polish) order.
//! CONTEXT: Second stage after the lexer. The output carries no parentheses
//! and no precedence information; the engine evaluates it with one stack pass.
//!
//! ALGORITHM (shunting-yard):
//! - Number   --> output
//! - "("      --> operator stack
//! - ")"      --> pop to output until "(", discard the "("
//! - operator --> pop while top is an operator binding at least as tightly,
//!               then push
//! - end      --> pop everything left; a leftover "(" is an error

use crate::error::{ParseError, ParseResult};
use crate::token::{Operator, Token};
use log::trace;
use serde::{Deserialize, Serialize};

/// How a run of equal-precedence operators groups.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    #[default]
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Converts with every operator left-associative, `^` included.
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    to_postfix_with(tokens, Associativity::Left)
}

/// Converts with the given associativity for `^`. All other operators stay
/// left-associative.
pub fn to_postfix_with(tokens: &[Token], power: Associativity) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),

            Token::LParen => stack.push(token),

            Token::RParen => close_group(&mut output, &mut stack)?,

            Token::Operator(incoming) => {
                // Stops at "(" since only operators match the pattern
                while let Some(&Token::Operator(top)) = stack.last() {
                    if !pops_before(top, incoming, power) {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token);
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LParen {
            return Err(ParseError::UnmatchedLeftParen);
        }
        output.push(token);
    }

    trace!(
        "postfix: {}",
        output.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
    );

    Ok(output)
}

/// Handles ")" by draining the operator stack down to its "(".
fn close_group(output: &mut Vec<Token>, stack: &mut Vec<Token>) -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(Token::LParen) => return Ok(()),
            Some(token) => output.push(token),
            None => return Err(ParseError::UnmatchedRightParen),
        }
    }
}

/// Whether `top` must be emitted before `incoming` is pushed.
fn pops_before(top: Operator, incoming: Operator, power: Associativity) -> bool {
    if incoming == Operator::Caret && power == Associativity::Right {
        top.precedence() > incoming.precedence()
    } else {
        top.precedence() >= incoming.precedence()
    }
}
