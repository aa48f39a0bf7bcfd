use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into a single expression tree.
///
/// This is the entry point for parsing. A lexical error token anywhere in
/// the stream is reported before any syntax is considered, so a scan error
/// always surfaces first. After a complete expression has been parsed, any
/// remaining token is an error; this also rejects two literals with no
/// operator between them.
///
/// Empty input is reported as an unexpected end of input at offset 0, never
/// silently treated as zero.
///
/// # Parameters
/// - `tokens`: Token sequence produced by [`crate::interpreter::lexer::lex`].
///
/// # Returns
/// The root node of the parsed expression.
///
/// # Errors
/// The first [`ParseError`] detected, carrying the offending position.
///
/// # Example
/// ```
/// use numeval::interpreter::{lexer::lex, parser::parse};
///
/// assert!(parse(&lex("(1 + 2) * 3")).is_ok());
/// assert!(parse(&lex("(1 + 2")).is_err());
/// assert!(parse(&lex("")).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Node> {
    if let Some((Token::Unknown(text), position)) =
        tokens.iter().find(|(token, _)| matches!(token, Token::Unknown(_)))
    {
        return Err(ParseError::UnrecognizedCharacter { text:     text.clone(),
                                                       position: *position, });
    }

    let mut iter = tokens.iter().peekable();
    let root = parse_expression(&mut iter)?;

    match iter.peek() {
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                              position: *position, })
        },
        None => Ok(root),
    }
}

/// Parses a full expression.
///
/// Begins at the lowest precedence level, addition/subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
