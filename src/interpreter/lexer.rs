use logos::Logos;

use crate::ast::MathFunction;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// Literal variants carry the exact source substring; conversion to a number
/// happens later, in the evaluator. Matching is maximal munch: the longest
/// rule wins, so `2^8` is one exponential literal while `2 ^ 8` is two
/// integers around a caret, and `0b101` is never `0` followed by `b101`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Decimal literal tokens, such as `13.37`.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_owned())]
    Dec(String),
    /// Exponential literal tokens, such as `10^2`.
    #[regex(r"[0-9]+\^[0-9]+", |lex| lex.slice().to_owned())]
    Exp(String),
    /// Binary literal tokens, such as `0b101`.
    #[regex(r"0b[01]+", |lex| lex.slice().to_owned())]
    Bin(String),
    /// Hexadecimal literal tokens, such as `0x1B`.
    #[regex(r"0x[0-9a-fA-F]+", |lex| lex.slice().to_owned())]
    Hex(String),
    /// Integer literal tokens, such as `42`.
    ///
    /// The sign is not part of the token. A leading `-` lexes as
    /// [`Token::Minus`] and the parser folds it into the literal, otherwise
    /// `3 - 5` would scan as the two integers `3` and `-5`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Int(String),
    /// Function-name tokens from the fixed builtin set, such as `sqrt`.
    #[token("sqrt", |_| MathFunction::Sqrt)]
    #[token("sin", |_| MathFunction::Sin)]
    #[token("cos", |_| MathFunction::Cos)]
    #[token("tan", |_| MathFunction::Tan)]
    #[token("abs", |_| MathFunction::Abs)]
    #[token("signbit", |_| MathFunction::Signbit)]
    #[token("ceil", |_| MathFunction::Ceil)]
    #[token("floor", |_| MathFunction::Floor)]
    #[token("trunc", |_| MathFunction::Trunc)]
    #[token("cbrt", |_| MathFunction::Cbrt)]
    #[token("asin", |_| MathFunction::Asin)]
    #[token("acos", |_| MathFunction::Acos)]
    #[token("atan", |_| MathFunction::Atan)]
    #[token("log", |_| MathFunction::Log)]
    #[token("log2", |_| MathFunction::Log2)]
    #[token("log10", |_| MathFunction::Log10)]
    Function(MathFunction),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Characters that match no other rule.
    ///
    /// Emitted in-stream instead of aborting the scan, so the rest of the
    /// token sequence stays intact and the parser can report the first
    /// offending character with its position.
    #[regex(r".", |lex| lex.slice().to_owned(), priority = 0)]
    Unknown(String),
    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Scans source text into an ordered sequence of tokens.
///
/// Each token is paired with the byte offset at which it starts. The end of
/// the returned vector is the end-of-input marker; the parser treats an
/// exhausted iterator as the terminal condition.
///
/// Lexing never fails: characters that match no rule are emitted as
/// [`Token::Unknown`] and rejected by the parser.
///
/// # Example
/// ```
/// use numeval::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("1 + 2");
/// assert_eq!(tokens[0], (Token::Int("1".to_owned()), 0));
/// assert_eq!(tokens[1], (Token::Plus, 2));
/// assert_eq!(tokens[2], (Token::Int("2".to_owned()), 4));
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                tokens.push((Token::Unknown(lexer.slice().to_owned()), lexer.span().start));
            },
        }
    }

    tokens
}
