#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The source contained a character that matches no lexical rule.
    UnrecognizedCharacter {
        /// The offending character as it appeared in the source.
        text:     String,
        /// Byte offset of the character in the source.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// An operator appeared where one of its operands should be.
    MissingOperand {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched opening parenthesis.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Byte offset where the input ended.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { text, position } => {
                write!(f, "Error at offset {position}: Unrecognized character '{text}'.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::MissingOperand { position } => {
                write!(f, "Error at offset {position}: Operator is missing an operand.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at offset {position}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
