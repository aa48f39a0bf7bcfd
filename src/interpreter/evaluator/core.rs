use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::evaluator::{
        binary::calculate_operator, function::calculate_function, literal::convert_literal,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a single number.
///
/// Evaluation is a post-order walk: the operands of every interior node are
/// fully evaluated before the node's own operator or function is applied.
/// The first error anywhere in the tree aborts the walk and is returned;
/// no partial result is ever produced alongside an error.
///
/// # Parameters
/// - `node`: Root of the expression tree to evaluate.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// A [`RuntimeError`] when a literal fails to convert or an operator fails
/// (division by zero).
///
/// # Example
/// ```
/// use numeval::interpreter::{evaluator::eval, lexer::lex, parser::parse};
///
/// let root = parse(&lex("2^8 / 4")).unwrap();
/// assert_eq!(eval(&root).unwrap(), 64.0);
/// ```
pub fn eval(node: &Node) -> EvalResult<f64> {
    match node {
        Node::Literal { kind, text } => convert_literal(text, *kind),
        Node::BinaryOp { op, left, right } => {
            let left = eval(left)?;
            let right = eval(right)?;
            calculate_operator(left, right, *op)
        },
        Node::Function { func, arg } => {
            let arg = eval(arg)?;
            Ok(calculate_function(arg, *func))
        },
    }
}
