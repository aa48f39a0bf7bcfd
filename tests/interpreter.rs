use numeval::{
    error::{Error, ParseError, RuntimeError},
    interpret,
};

fn eval(source: &str) -> f64 {
    interpret(source).unwrap_or_else(|e| panic!("'{source}' failed to evaluate: {e}"))
}

fn assert_close(source: &str, expected: f64) {
    let value = eval(source);
    assert!((value - expected).abs() < 1e-12,
            "'{source}' evaluated to {value}, expected {expected}");
}

#[test]
fn simple_integers() {
    assert_eq!(eval("1"), 1.0);
    assert_eq!(eval("12345"), 12345.0);
    assert_eq!(eval("-42"), -42.0);

    for n in [0_i64, 1, 7, 42, 12345, -1, -999] {
        assert_eq!(eval(&n.to_string()), n as f64);
    }
}

#[test]
fn simple_decimals() {
    assert_eq!(eval("1.0"), 1.0);
    assert_eq!(eval("1234.5678"), 1234.5678);
}

#[test]
fn binary_literals() {
    assert_eq!(eval("0b1"), 1.0);
    assert_eq!(eval("0b101"), 5.0);
    assert_eq!(eval("0b11111111"), 255.0);
}

#[test]
fn hexadecimal_literals() {
    assert_eq!(eval("0x1"), 1.0);
    assert_eq!(eval("0x1A"), 26.0);
    assert_eq!(eval("0xff"), 255.0);
}

#[test]
fn exponential_literals() {
    assert_eq!(eval("10^2"), 100.0);
    assert_eq!(eval("2^10"), 1024.0);
    assert_eq!(eval("2^0"), 1.0);
}

#[test]
fn simple_additions() {
    assert_eq!(eval("1 + 1"), 2.0);
    assert_eq!(eval("3 + 5"), 8.0);
    assert_eq!(eval("1 + 2 + 3 + 4 + 5 + 6"), 21.0);
}

#[test]
fn simple_subtractions() {
    assert_eq!(eval("1 - 1"), 0.0);
    assert_eq!(eval("3 - 5"), -2.0);
    assert_eq!(eval("1 - 2 - 3 - 4 - 5 - 6"), -19.0);
}

#[test]
fn simple_multiplications() {
    assert_eq!(eval("1 * 1"), 1.0);
    assert_eq!(eval("3 * 5"), 15.0);
    assert_eq!(eval("1 * 2 * 3 * 4 * 5 * 6"), 720.0);
}

#[test]
fn simple_divisions() {
    assert_eq!(eval("1 / 1"), 1.0);
    assert_eq!(eval("3 / 5"), 3.0 / 5.0);
    assert_eq!(eval("1 / 2 / 3 / 4 / 5 / 6"), 1.0 / 2.0 / 3.0 / 4.0 / 5.0 / 6.0);
}

#[test]
fn left_associativity() {
    // Same precedence level chains group to the left, never to the right.
    assert_eq!(eval("2 - 3 - 4"), (2.0 - 3.0) - 4.0);
    assert_eq!(eval("100 / 5 / 2"), 10.0);
    assert_eq!(eval("1 - 2 - 3"), -4.0);
}

#[test]
fn dot_before_line_rule() {
    assert_eq!(eval("1 + 2 * 3"), 7.0);
    assert_eq!(eval("1 - 2 * 3"), -5.0);
    assert_eq!(eval("1 + 2 / 3"), 1.0 + 2.0 / 3.0);
    assert_eq!(eval("1 - 2 / 3"), 1.0 - 2.0 / 3.0);
}

#[test]
fn brackets() {
    assert_eq!(eval("(1 + 2) / 3"), 1.0);
    assert_eq!(eval("(1 - 2) / 3"), (1.0 - 2.0) / 3.0);
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("(1 - 2) * 3"), -3.0);
    assert_eq!(eval("2 + (1 - 2) / 3"), 2.0 + (1.0 - 2.0) / 3.0);
}

#[test]
fn nested_brackets() {
    assert_eq!(eval("((1 + 2) / 3) + 1"), 2.0);
    assert_eq!(eval("((2 + 3) / (1 + 2)) * 3"), ((2.0 + 3.0) / (1.0 + 2.0)) * 3.0);
    assert_eq!(eval("(1 - 2) * (3 - 2) / (1 + 4)"),
               (1.0 - 2.0) * (3.0 - 2.0) / (1.0 + 4.0));
    assert_eq!(eval("((((((1))))))"), 1.0);
}

#[test]
fn brackets_and_dot_before_line_rule() {
    assert_eq!(eval("1 + (1 + 2) * 3"), 10.0);
    assert_eq!(eval("1 + (1 + 2) / 3"), 2.0);
    assert_eq!(eval("1 - (1 + 2) * 3"), -8.0);
    assert_eq!(eval("1 - (1 + 2) / 3"), 0.0);
}

#[test]
fn modulo() {
    assert_eq!(eval("7 % 3"), 1.0);
    assert_eq!(eval("10 % 4"), 2.0);
    assert_eq!(eval("2 % 5"), 2.0);
    assert_eq!(eval("7.5 % 2"), 1.5);
}

#[test]
fn bitwise_operators() {
    assert_eq!(eval("12 | 10"), 14.0);
    assert_eq!(eval("12 & 10"), 8.0);
    // `^` with spaces is the xor operator; `2^8` would be one literal.
    assert_eq!(eval("12 ^ 10"), 6.0);
    assert_eq!(eval("2 ^ 8"), 10.0);
    assert_eq!(eval("2^8"), 256.0);
    // Bitwise operators share the multiplication precedence level.
    assert_eq!(eval("1 + 2 & 3"), 3.0);
}

#[test]
fn functions() {
    assert_eq!(eval("sqrt 16"), 4.0);
    assert_eq!(eval("sqrt(1 + 3)"), 2.0);
    assert_eq!(eval("sqrt sqrt 81"), 3.0);
    assert_eq!(eval("abs(3 - 5)"), 2.0);
    assert_eq!(eval("floor 1.7"), 1.0);
    assert_eq!(eval("ceil 1.2"), 2.0);
    assert_eq!(eval("trunc 1.9"), 1.0);
    assert_eq!(eval("signbit(0 - 3)"), 1.0);
    assert_eq!(eval("signbit 3"), 0.0);

    assert_close("sin 0", 0.0);
    assert_close("cos 0", 1.0);
    assert_close("tan 0", 0.0);
    assert_close("cbrt 27", 3.0);
    assert_close("asin 0", 0.0);
    assert_close("acos 1", 0.0);
    assert_close("atan 0", 0.0);
    assert_close("log 1", 0.0);
    assert_close("log2 8", 3.0);
    assert_close("log10 100", 2.0);
}

#[test]
fn function_binds_only_its_argument() {
    assert_eq!(eval("sqrt 4 + 5"), 7.0);
    assert_eq!(eval("sqrt(4 + 5)"), 3.0);
    assert_eq!(eval("2 * sqrt 16"), 8.0);
}

#[test]
fn division_by_zero() {
    assert!(matches!(interpret("1 / 0"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero))));
    assert!(matches!(interpret("3 / (1 - 1)"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero))));
}

#[test]
fn exponential_overflow() {
    assert!(matches!(interpret("99^9999"),
                     Err(Error::Runtime(RuntimeError::InvalidExponential { .. }))));
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(interpret(""),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { position: 0 }))));
    assert!(matches!(interpret("   "),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
}

#[test]
fn unmatched_bracket() {
    assert!(matches!(interpret("(1 + 2"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { position: 0 }))));
    assert!(matches!(interpret("((1 + 2)"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { .. }))));
    assert!(matches!(interpret(")"),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn adjacent_literals_are_rejected() {
    assert!(matches!(interpret("1 2"),
                     Err(Error::Parse(ParseError::UnexpectedToken { position: 2, .. }))));
}

#[test]
fn missing_operands() {
    assert!(matches!(interpret("* 2"),
                     Err(Error::Parse(ParseError::MissingOperand { position: 0 }))));
    assert!(matches!(interpret("1 +"),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
}

#[test]
fn unrecognized_characters() {
    assert!(matches!(interpret("1 @ 2"),
                     Err(Error::Parse(ParseError::UnrecognizedCharacter { position: 2, .. }))));
    // A lexical error is reported before any syntax error.
    assert!(matches!(interpret("(1 @"),
                     Err(Error::Parse(ParseError::UnrecognizedCharacter { .. }))));
}

#[test]
fn errors_render_messages() {
    let message = interpret("1 / 0").unwrap_err().to_string();
    assert!(message.contains("Division by zero"));

    let message = interpret("1 @ 2").unwrap_err().to_string();
    assert!(message.contains('@'));
    assert!(message.contains('2'));
}
