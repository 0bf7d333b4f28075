//! FILENAME: core/parser/src/call.rs
//! PURPOSE: Splits raw expression text into plain text, bare names and
//! function calls.
//! CONTEXT: Runs before the lexer. The engine uses the fragments to splice
//! constant values over bare names and evaluated results over calls, so by
//! the time the lexer sees the text only numbers and operators remain.
//!
//! GRAMMAR:
//!   fragment --> call | name | text
//!   call     --> IDENTIFIER whitespace* "(" balanced ")"
//!   name     --> IDENTIFIER
//!   IDENTIFIER --> [A-Za-z_] [A-Za-z0-9_]*
//!
//! Identifiers are always read whole, so "log10(x)" is one call to `log10`
//! and "exp(1)" never exposes a bare `e`. The scan only moves forward.

use crate::error::{ParseError, ParseResult};

/// A piece of expression source, borrowed from the input.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Fragment<'a> {
    /// Anything that is not an identifier: numbers, operators, whitespace.
    Text(&'a str),
    /// An identifier not followed by '(' (e.g. `pi`).
    Name(&'a str),
    /// `name(argument)`. `source` spans from the name through the closing ')'.
    Call {
        name: &'a str,
        argument: &'a str,
        source: &'a str,
    },
}

impl<'a> Fragment<'a> {
    /// The exact source text this fragment was cut from.
    pub fn source(&self) -> &'a str {
        match self {
            Fragment::Text(text) | Fragment::Name(text) => text,
            Fragment::Call { source, .. } => source,
        }
    }
}

/// Splits `text` into fragments, in source order.
///
/// Fails with `UnclosedCall` when a call's '(' has no matching ')'.
/// Unbalanced parentheses outside calls are left for the postfix converter.
pub fn split_calls(text: &str) -> ParseResult<Vec<Fragment<'_>>> {
    let bytes = text.as_bytes();
    let mut fragments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_identifier_start(bytes[pos]) {
            pos += 1;
            continue;
        }

        let name_start = pos;
        while pos < bytes.len() && is_identifier_continue(bytes[pos]) {
            pos += 1;
        }
        let name = &text[name_start..pos];

        if text_start < name_start {
            fragments.push(Fragment::Text(&text[text_start..name_start]));
        }

        let mut open = pos;
        while open < bytes.len() && bytes[open].is_ascii_whitespace() {
            open += 1;
        }

        if open < bytes.len() && bytes[open] == b'(' {
            let close = matching_paren(bytes, open)
                .ok_or_else(|| ParseError::UnclosedCall(name.to_string()))?;
            fragments.push(Fragment::Call {
                name,
                argument: &text[open + 1..close],
                source: &text[name_start..=close],
            });
            pos = close + 1;
        } else {
            fragments.push(Fragment::Name(name));
        }

        text_start = pos;
    }

    if text_start < bytes.len() {
        fragments.push(Fragment::Text(&text[text_start..]));
    }

    Ok(fragments)
}

/// Returns the index of the ')' closing the '(' at `open`.
fn matching_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_identifier_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
