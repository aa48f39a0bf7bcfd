/// Core evaluation logic.
///
/// Contains the post-order tree walk that reduces an AST to a single number,
/// and the shared evaluation result type.
pub mod core;

/// Literal conversion.
///
/// Converts raw literal text to numbers, one routine per supported notation:
/// integer, decimal, binary, hexadecimal, and exponential.
pub mod literal;

/// Binary operator evaluation.
///
/// Implements arithmetic, the iterative modulo, and the bitwise operators.
pub mod binary;

/// Math function evaluation.
///
/// Maps each builtin function kind to the corresponding `f64` operation.
pub mod function;

pub use core::{EvalResult, eval};
