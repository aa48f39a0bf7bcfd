use std::iter::Peekable;

use crate::{
    ast::{LiteralKind, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the highest precedence level of the grammar and
/// include:
/// - numeric literals of every notation, with an optional leading `-` on
///   integer and decimal literals
/// - parenthesized expressions (nesting to arbitrary depth)
/// - function applications
///
/// An operator token in this position means an operand is missing; any other
/// unexpected token is reported with its position.
///
/// Grammar:
/// ```text
///     primary := literal
///              | "-" literal
///              | "(" expression ")"
///              | function primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Node`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Int(_) | Token::Dec(_) | Token::Bin(_) | Token::Hex(_) | Token::Exp(_), _) => {
            parse_literal(tokens)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Function(_), _) => parse_function(tokens),
        (Token::Minus, _) => parse_negative_literal(tokens),
        (Token::Plus
         | Token::Star
         | Token::Slash
         | Token::Percent
         | Token::Pipe
         | Token::Caret
         | Token::Ampersand,
         position) => Err(ParseError::MissingOperand { position: *position }),
        (token, position) => Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                                               position: *position, }),
    }
}

/// Parses a numeric literal of any supported notation.
///
/// The literal keeps its raw source text; the evaluator performs the actual
/// conversion so that malformed text is reported as a conversion error.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, _) = tokens.next().unwrap();
    let (kind, text) = match token {
        Token::Int(text) => (LiteralKind::Int, text),
        Token::Dec(text) => (LiteralKind::Dec, text),
        Token::Bin(text) => (LiteralKind::Bin, text),
        Token::Hex(text) => (LiteralKind::Hex, text),
        Token::Exp(text) => (LiteralKind::Exp, text),
        _ => unreachable!(),
    };

    Ok(Node::Literal { kind,
                       text: text.clone() })
}

/// Parses a negated integer or decimal literal.
///
/// The lexer scans bare digit runs, so a sign in operand position arrives as
/// a [`Token::Minus`] here. The sign is folded into the literal text and the
/// evaluator's conversion handles it. Only integer and decimal literals take
/// a sign; a `-` in front of anything else is a missing left operand.
fn parse_negative_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    match tokens.peek() {
        Some((Token::Int(text), _)) => {
            let node = Node::Literal { kind: LiteralKind::Int,
                                       text: format!("-{text}"), };
            tokens.next();
            Ok(node)
        },
        Some((Token::Dec(text), _)) => {
            let node = Node::Literal { kind: LiteralKind::Dec,
                                       text: format!("-{text}"), };
            tokens.next();
            Ok(node)
        },
        _ => Err(ParseError::MissingOperand { position }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen` at the position of
/// the opening one.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let node = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(node),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses a function application.
///
/// A function token is immediately followed by its single argument, itself a
/// primary expression. No call parentheses are required beyond what the
/// argument needs, so `sqrt 4`, `sqrt(1 + 3)` and `sqrt sqrt 16` all parse.
///
/// Grammar: `function := FUNCTION primary`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a function name.
///
/// # Returns
/// A [`Node::Function`] node.
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, _) = tokens.next().unwrap();
    let func = match token {
        Token::Function(func) => *func,
        _ => unreachable!(),
    };

    let arg = parse_primary(tokens)?;
    Ok(Node::Function { func,
                        arg: Box::new(arg) })
}
