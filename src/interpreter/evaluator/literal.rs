use crate::{ast::LiteralKind, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an integer literal string to an `f64`.
///
/// # Errors
/// Returns `RuntimeError::InvalidInteger` if conversion failed.
///
/// # Example
/// ```
/// use numeval::interpreter::evaluator::literal::convert_integer;
///
/// assert_eq!(convert_integer("42").unwrap(), 42.0);
/// assert_eq!(convert_integer("-42").unwrap(), -42.0);
/// assert!(convert_integer("4a").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn convert_integer(text: &str) -> EvalResult<f64> {
    let integer = text.parse::<i64>()
                      .map_err(|_| RuntimeError::InvalidInteger { text: text.to_owned() })?;
    Ok(integer as f64)
}

/// Converts a decimal literal string to an `f64`.
///
/// # Errors
/// Returns `RuntimeError::InvalidDecimal` if conversion failed.
pub fn convert_decimal(text: &str) -> EvalResult<f64> {
    text.parse::<f64>()
        .map_err(|_| RuntimeError::InvalidDecimal { text: text.to_owned() })
}

/// Converts a binary literal string (`0b` prefix) to an `f64`.
///
/// # Errors
/// Returns `RuntimeError::InvalidBinary` if conversion failed.
///
/// # Example
/// ```
/// use numeval::interpreter::evaluator::literal::convert_binary;
///
/// assert_eq!(convert_binary("0b101").unwrap(), 5.0);
/// assert!(convert_binary("0b102").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn convert_binary(text: &str) -> EvalResult<f64> {
    let digits = text.strip_prefix("0b").unwrap_or(text);
    let binary = i64::from_str_radix(digits, 2)
        .map_err(|_| RuntimeError::InvalidBinary { text: text.to_owned() })?;

    Ok(binary as f64)
}

/// Converts a hexadecimal literal string (`0x` prefix) to an `f64`.
///
/// # Errors
/// Returns `RuntimeError::InvalidHexadecimal` if conversion failed.
///
/// # Example
/// ```
/// use numeval::interpreter::evaluator::literal::convert_hexadecimal;
///
/// assert_eq!(convert_hexadecimal("0x1B").unwrap(), 27.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn convert_hexadecimal(text: &str) -> EvalResult<f64> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    let hexadecimal = i64::from_str_radix(digits, 16)
        .map_err(|_| RuntimeError::InvalidHexadecimal { text: text.to_owned() })?;

    Ok(hexadecimal as f64)
}

/// Converts an exponential literal string (`base^exponent`) to an `f64`.
///
/// Both parts must parse as integers. A result that overflows to positive
/// infinity is reported as an error rather than returned.
///
/// # Errors
/// Returns `RuntimeError::InvalidExponential` if conversion failed.
///
/// # Example
/// ```
/// use numeval::interpreter::evaluator::literal::convert_exponential;
///
/// assert_eq!(convert_exponential("2^10").unwrap(), 1024.0);
/// assert!(convert_exponential("2^2^2").is_err());
/// assert!(convert_exponential("99^9999").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn convert_exponential(text: &str) -> EvalResult<f64> {
    let parts: Vec<&str> = text.split('^').collect();
    if parts.len() != 2 {
        return Err(RuntimeError::InvalidExponential { text: text.to_owned() });
    }

    let base = parts[0].parse::<i64>()
                       .map_err(|_| RuntimeError::InvalidExponential { text: text.to_owned() })?;
    let exponent =
        parts[1].parse::<i64>()
                .map_err(|_| RuntimeError::InvalidExponential { text: text.to_owned() })?;

    let result = (base as f64).powf(exponent as f64);
    if result.is_infinite() && result.is_sign_positive() {
        return Err(RuntimeError::InvalidExponential { text: text.to_owned() });
    }

    Ok(result)
}

/// Converts a literal's raw text to a number according to its notation.
///
/// Dispatches to the conversion routine matching `kind`.
///
/// # Errors
/// The format-specific `RuntimeError` of the failing conversion, carrying
/// the offending literal text.
pub fn convert_literal(text: &str, kind: LiteralKind) -> EvalResult<f64> {
    match kind {
        LiteralKind::Int => convert_integer(text),
        LiteralKind::Dec => convert_decimal(text),
        LiteralKind::Bin => convert_binary(text),
        LiteralKind::Hex => convert_hexadecimal(text),
        LiteralKind::Exp => convert_exponential(text),
    }
}
