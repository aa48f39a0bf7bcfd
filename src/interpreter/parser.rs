/// Parser entry point and shared result type.
///
/// Hosts the `parse` function that turns a token sequence into a single AST
/// root, rejecting lexical error tokens and trailing input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels of binary operators as
/// left-associative loops: addition/subtraction, and the
/// multiplication-level family (`*`, `/`, `%`, `|`, `^`, `&`).
pub mod binary;

/// Primary expression parsing.
///
/// Handles the highest precedence level: literals, parenthesised grouping,
/// and function application.
pub mod primary;

pub use core::{ParseResult, parse};
