//! FILENAME: core/parser/src/error.rs

use thiserror::Error;

/// Structural problems found while scanning or reordering an expression.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    #[error("Parse error: malformed number '{0}'")]
    MalformedNumber(String),

    #[error("Parse error: unmatched '(' in expression")]
    UnmatchedLeftParen,

    #[error("Parse error: unmatched ')' in expression")]
    UnmatchedRightParen,

    #[error("Parse error: call to '{0}' is missing its closing ')'")]
    UnclosedCall(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
