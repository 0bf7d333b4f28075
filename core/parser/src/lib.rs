//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the calculator's expression parser.
//! CONTEXT: This crate exposes the call scanner, lexer and postfix converter
//! needed to turn an expression string into a postfix token sequence. It
//! never evaluates anything; that is the engine's job.
//!
//! PIPELINE: Expression String --> Call Scanner --> (engine splices values)
//!           --> Lexer --> Tokens --> Postfix Converter --> Postfix Tokens
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, % (remainder), ^ (power)
//! - Decimal literals: 42, 3.5, .5, and signed literals in unary position
//! - Parentheses for grouping
//! - Call syntax: name(expression), recognized but not resolved here

pub mod call;
pub mod error;
pub mod lexer;
pub mod postfix;
pub mod token;


// Re-export commonly used types for convenience
pub use call::{split_calls, Fragment};
pub use error::{ParseError, ParseResult};
pub use lexer::{tokenize, Lexer};
pub use postfix::{to_postfix, to_postfix_with, Associativity};
pub use token::{Operator, Token};
