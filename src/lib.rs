//! # numeval
//!
//! numeval is an arithmetic expression interpreter written in Rust.
//! It lexes, parses, and evaluates a single expression to one number, with
//! support for decimal, binary, hexadecimal and exponential literals, the
//! usual arithmetic operators plus modulo and the bitwise operators, grouping
//! parentheses, and a fixed set of unary math functions.
//!
//! The pipeline is purely synchronous and holds no state between calls, so
//! independent invocations may run on separate threads without coordination.

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

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and the kind enums it is tagged
/// with: literal notations, binary operators, and math functions. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node types for all language constructs.
/// - Keeps literal source text verbatim for deferred conversion.
/// - Models the expression as a strict ownership tree.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. Errors form a closed set per stage, carry
/// the offending position or literal text, and render human-readable
/// messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and literal text for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from source text to a numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides the stage functions used by the public entry point.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::Error;

/// Evaluates an expression string and returns its numeric value.
///
/// This is the convenience entry point for external callers; it chains the
/// three pipeline stages. The pipeline short-circuits: a lexical error
/// prevents parsing, a parse error prevents evaluation, and the first error
/// of the failing stage is returned.
///
/// # Errors
/// Returns an [`Error`] wrapping the failing stage's error. No failure path
/// panics; all errors are ordinary return values.
///
/// # Examples
/// ```
/// use numeval::interpret;
///
/// assert_eq!(interpret("1 + 2 * 3").unwrap(), 7.0);
/// assert_eq!(interpret("(1 + 2) * 3").unwrap(), 9.0);
/// assert_eq!(interpret("0x1F - 0b11").unwrap(), 28.0);
///
/// // Division by zero is an error, never a silent zero.
/// assert!(interpret("1 / 0").is_err());
/// ```
pub fn interpret(source: &str) -> Result<f64, Error> {
    let tokens = interpreter::lexer::lex(source);
    let root = interpreter::parser::parse(&tokens)?;
    let value = interpreter::evaluator::eval(&root)?;

    Ok(value)
}
