#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An integer literal could not be converted to a number.
    InvalidInteger {
        /// The offending literal text.
        text: String,
    },
    /// A decimal literal could not be converted to a number.
    InvalidDecimal {
        /// The offending literal text.
        text: String,
    },
    /// A binary literal could not be converted to a number.
    InvalidBinary {
        /// The offending literal text.
        text: String,
    },
    /// A hexadecimal literal could not be converted to a number.
    InvalidHexadecimal {
        /// The offending literal text.
        text: String,
    },
    /// An exponential literal could not be converted, or its result
    /// overflowed to infinity.
    InvalidExponential {
        /// The offending literal text.
        text: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInteger { text } => write!(f, "Invalid integer literal '{text}'."),
            Self::InvalidDecimal { text } => write!(f, "Invalid decimal literal '{text}'."),
            Self::InvalidBinary { text } => write!(f, "Invalid binary literal '{text}'."),
            Self::InvalidHexadecimal { text } => {
                write!(f, "Invalid hexadecimal literal '{text}'.")
            },
            Self::InvalidExponential { text } => {
                write!(f, "Invalid exponential literal '{text}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
