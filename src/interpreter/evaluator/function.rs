use crate::ast::MathFunction;

/// Calculates the result of a builtin math function.
///
/// Each kind maps directly to the corresponding `f64` operation; `signbit`
/// yields `1.0` when the argument's sign bit is set (including negative
/// zero), else `0.0`. Domain behavior is the floating-point default and is
/// passed through unvalidated: `sqrt` of a negative number is NaN, `log` of
/// zero is negative infinity.
///
/// # Parameters
/// - `arg`: The argument value.
/// - `func`: The function to apply.
///
/// # Returns
/// The numeric result of the function.
///
/// # Example
/// ```
/// use numeval::{ast::MathFunction, interpreter::evaluator::function::calculate_function};
///
/// assert_eq!(calculate_function(16.0, MathFunction::Sqrt), 4.0);
/// assert_eq!(calculate_function(-3.0, MathFunction::Signbit), 1.0);
/// assert_eq!(calculate_function(3.0, MathFunction::Signbit), 0.0);
/// ```
#[must_use]
pub fn calculate_function(arg: f64, func: MathFunction) -> f64 {
    match func {
        MathFunction::Sqrt => arg.sqrt(),
        MathFunction::Sin => arg.sin(),
        MathFunction::Cos => arg.cos(),
        MathFunction::Tan => arg.tan(),
        MathFunction::Abs => arg.abs(),
        MathFunction::Signbit => {
            if arg.is_sign_negative() {
                1.0
            } else {
                0.0
            }
        },
        MathFunction::Ceil => arg.ceil(),
        MathFunction::Floor => arg.floor(),
        MathFunction::Trunc => arg.trunc(),
        MathFunction::Cbrt => arg.cbrt(),
        MathFunction::Asin => arg.asin(),
        MathFunction::Acos => arg.acos(),
        MathFunction::Atan => arg.atan(),
        MathFunction::Log => arg.ln(),
        MathFunction::Log2 => arg.log2(),
        MathFunction::Log10 => arg.log10(),
    }
}
