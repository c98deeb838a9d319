//! # shuntcalc
//!
//! shuntcalc is an interactive arithmetic expression evaluator written in Rust.
//! It reads infix arithmetic one line at a time and evaluates it with a
//! two-stack shunting-yard engine, without ever building a syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, LineOutcome},
        lexer::Tokenizer,
    },
};

/// Session limits and output settings.
///
/// This module declares the `Config` struct shared by the tokenizer, the
/// evaluator and the session driver, along with the default stack capacity,
/// literal length, precision and prompt.
pub mod config;
/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines every error that can be raised while a line is read or
/// evaluated. All of them except read failures are local to the line: the
/// session reports them and carries on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, stacks, arithmetic).
/// - Renders the human-readable descriptions printed after `ERROR:`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns text into values.
///
/// This module ties together the tokenizer and the shunting-yard evaluator.
///
/// # Responsibilities
/// - Classifies raw characters into tokens on demand.
/// - Reduces each line to a single value according to operator priority.
/// - Keeps all evaluation state in an explicit, per-line session.
pub mod interpreter;
/// The line-by-line session driver.
///
/// Prints prompts and results, reports errors and performs the recovery that
/// lets a session continue after a malformed line.
pub mod repl;

/// Evaluates the first line of `source` with the default configuration.
///
/// A missing trailing newline is supplied, so `"1+2"` and `"1+2\n"` behave
/// the same. Returns `Ok(None)` for an empty line.
///
/// # Errors
/// Returns an error if the line is malformed, overflows a stack, divides by
/// zero or contains an oversized literal.
///
/// # Examples
/// ```
/// use shuntcalc::evaluate;
///
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Some(20.0));
/// assert_eq!(evaluate("   ").unwrap(), None);
///
/// // Division by zero is reported rather than producing an infinity.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<Option<f64>> {
    let config = Config::default();
    let mut evaluator = Evaluator::new(&config);

    let line = source.lines().next().unwrap_or_default();
    let terminated = format!("{line}\n");
    let mut tokens = Tokenizer::with_config(terminated.as_bytes(), &config);

    match evaluator.evaluate_line(&mut tokens)? {
        LineOutcome::Value(value) => Ok(Some(value)),
        LineOutcome::Empty | LineOutcome::EndOfInput => Ok(None),
    }
}
