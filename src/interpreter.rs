/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a meaningful element such as a numeric
/// literal, an operator, a parenthesis, or a function name. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offsets.
/// - Handles all five literal notations with maximal-munch matching.
/// - Emits error tokens for unrecognized characters instead of aborting.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that represents the structure of the expression,
/// applying precedence, left-to-right associativity, and bracket matching.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with position info.
/// - Stops at the first error; a lexical error prevents parsing.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST bottom-up, converts leaf literals to numbers,
/// and applies operator and function semantics at interior nodes, producing
/// one final number. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Converts literal text of every notation to numeric values.
/// - Reports runtime errors such as division by zero or malformed literals.
pub mod evaluator;
