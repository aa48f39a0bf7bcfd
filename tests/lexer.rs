use numeval::{ast::MathFunction,
              interpreter::lexer::{Token, lex}};

fn kinds(source: &str) -> Vec<Token> {
    lex(source).into_iter().map(|(token, _)| token).collect()
}

#[test]
fn tokens_carry_byte_offsets() {
    let tokens = lex("1 + 23");
    assert_eq!(tokens,
               vec![(Token::Int("1".to_owned()), 0),
                    (Token::Plus, 2),
                    (Token::Int("23".to_owned()), 4),]);
}

#[test]
fn literal_notations() {
    assert_eq!(kinds("1.5"), vec![Token::Dec("1.5".to_owned())]);
    assert_eq!(kinds("0b101"), vec![Token::Bin("0b101".to_owned())]);
    assert_eq!(kinds("0x1B"), vec![Token::Hex("0x1B".to_owned())]);
    assert_eq!(kinds("2^10"), vec![Token::Exp("2^10".to_owned())]);
}

#[test]
fn maximal_munch() {
    // `2^8` is one exponential literal; with spaces, `^` is the xor
    // operator between two integers.
    assert_eq!(kinds("2^8"), vec![Token::Exp("2^8".to_owned())]);
    assert_eq!(kinds("2 ^ 8"),
               vec![Token::Int("2".to_owned()), Token::Caret, Token::Int("8".to_owned())]);

    // `0b101` is never `0` followed by something else.
    assert_eq!(kinds("0b101"), vec![Token::Bin("0b101".to_owned())]);

    // The longest digit run forms one token.
    assert_eq!(kinds("123"), vec![Token::Int("123".to_owned())]);
}

#[test]
fn minus_is_always_an_operator_token() {
    assert_eq!(kinds("3-5"),
               vec![Token::Int("3".to_owned()), Token::Minus, Token::Int("5".to_owned())]);
    assert_eq!(kinds("-42"), vec![Token::Minus, Token::Int("42".to_owned())]);
}

#[test]
fn function_names() {
    assert_eq!(kinds("sqrt 4"),
               vec![Token::Function(MathFunction::Sqrt), Token::Int("4".to_owned())]);
    // `log2` and `log10` win over a `log` prefix match.
    assert_eq!(kinds("log2"), vec![Token::Function(MathFunction::Log2)]);
    assert_eq!(kinds("log10"), vec![Token::Function(MathFunction::Log10)]);
    assert_eq!(kinds("log"), vec![Token::Function(MathFunction::Log)]);
}

#[test]
fn unrecognized_characters_become_error_tokens() {
    let tokens = lex("1 @ 2");
    assert_eq!(tokens[1], (Token::Unknown("@".to_owned()), 2));
    // The scan continues past the offending character.
    assert_eq!(tokens[2], (Token::Int("2".to_owned()), 4));
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t1\n+\r2  "),
               vec![Token::Int("1".to_owned()), Token::Plus, Token::Int("2".to_owned())]);
}
