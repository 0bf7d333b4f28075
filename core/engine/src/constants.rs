//! FILENAME: core/engine/src/constants.rs
//! PURPOSE: Replaces the named constants pi and e with their values.
//! CONTEXT: First pass of every evaluation. Only whole bare identifiers are
//! replaced; call names and the text inside calls are left for the function
//! pass (which evaluates arguments recursively, constants included).

use crate::config::EvaluatorConfig;
use crate::functions::splice_number;
use calc_parser::{split_calls, Fragment, ParseResult};
use log::trace;

/// Value of a constant identifier. `pi`/`PI` and `e`/`E` are the same constant.
pub fn constant_value(name: &str, config: &EvaluatorConfig) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(config.pi),
        "e" | "E" => Some(config.e),
        _ => None,
    }
}

pub fn substitute_constants(text: &str, config: &EvaluatorConfig) -> ParseResult<String> {
    let mut output = String::with_capacity(text.len());

    for fragment in split_calls(text)? {
        match fragment {
            Fragment::Name(name) => match constant_value(name, config) {
                Some(value) => splice_number(&mut output, value),
                None => {
                    trace!("leaving unknown name {:?} in place", name);
                    output.push_str(name);
                }
            },
            other => output.push_str(other.source()),
        }
    }

    Ok(output)
}
