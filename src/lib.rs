//! # spy
//!
//! spy is an interpreter for a small, statically declared scripting language.
//! Every variable is declared with a type (`x: int = 5`, `y: float = 2`,
//! `z: var = 'text'`), the type is recorded in a symbol table, and every later
//! assignment is checked against it.
//!
//! Source text goes through a scanner, a recursive-descent parser and a
//! tree-walking evaluator. The evaluator keeps all of its state in a
//! [`Context`](interpreter::evaluator::core::Context), which can be reused
//! across several programs.

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
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, parser::core::Parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the line it was detected on and can
/// be classified as lexical, syntax, name, type, declaration or runtime.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the variable store
/// and the symbol table.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
pub mod util;

/// Parses and runs `source` against `context`.
///
/// The source may hold any number of statements separated by newlines or
/// `;`. Variables assigned by earlier calls on the same context stay visible.
/// If any statement fails, the statements before it keep their effects.
///
/// # Returns
/// The value stored by the last assignment that ran, if any.
///
/// # Errors
/// Returns an [`Error`] if scanning, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use spy::{interpreter::{evaluator::core::Context, value::core::Value}, run_source};
///
/// let mut context = Context::new();
/// let result = run_source("a: var = 5f\nb: int = 5\nd: float = a // b", &mut context);
/// assert_eq!(result.unwrap(), Some(Value::Float(1.0)));
///
/// // Example with an intentional error (unknown variable).
/// assert!(run_source("y: int = x + 1", &mut context).is_err());
/// ```
pub fn run_source(source: &str, context: &mut Context) -> Result<Option<Value>, Error> {
    let program = Parser::new(source)?.parse()?;
    debug!(?program, "running program");
    Ok(context.interpret(&program)?)
}
