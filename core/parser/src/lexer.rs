//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the evaluation pipeline once constants
//! and function calls have been spliced out. It handles whitespace skipping,
//! number parsing and the single-character operators.
//!
//! SUPPORTED OPERATORS:
//! - Single char: + - * / ^ % ( )
//! - Signed literals: a '-' at the start, or after an operator or '(',
//!   that is directly followed by a digit or '.' ("-3", "2*-3", "(-1)")
//!   Only literals take a sign: "2*-pi" and "2*-sqrt(4)" leave a bare '-'
//!   and fail in evaluation. Write "2*(0-pi)" instead.
//!
//! Anything else (letters, stray symbols) is skipped without error.

use crate::error::{ParseError, ParseResult};
use crate::token::{Operator, Token};
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// Last token handed out; decides whether '-' is a sign or a subtraction.
    previous: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            previous: None,
        }
    }

    /// Advances the lexer and returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> ParseResult<Option<Token>> {
        loop {
            self.skip_whitespace();

            let token = match self.input.next() {
                None => return Ok(None),

                Some('(') => Token::LParen,
                Some(')') => Token::RParen,

                // A minus in unary position glued to a digit is part of the literal
                Some('-') if self.in_unary_position() && self.number_follows() => {
                    self.read_number('-')?
                }

                Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch)?,

                Some(ch) => match Operator::from_char(ch) {
                    Some(op) => Token::Operator(op),
                    None => {
                        trace!("lexer skipping {:?}", ch);
                        continue;
                    }
                },
            };

            self.previous = Some(token);
            return Ok(Some(token));
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    fn in_unary_position(&self) -> bool {
        matches!(
            self.previous,
            None | Some(Token::Operator(_)) | Some(Token::LParen)
        )
    }

    fn number_follows(&mut self) -> bool {
        matches!(self.input.peek(), Some(&ch) if ch.is_ascii_digit() || ch == '.')
    }

    /// Digits and dots accumulate until anything else shows up; the
    /// collected text must then parse as a single f64.
    fn read_number(&mut self, first_char: char) -> ParseResult<Token> {
        let mut number_str = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        number_str
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ParseError::MalformedNumber(number_str))
    }
}

impl Iterator for Lexer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Convenience function to tokenize an expression string in one go.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let tokens = Lexer::new(input).collect::<ParseResult<Vec<_>>>()?;
    trace!("tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}
