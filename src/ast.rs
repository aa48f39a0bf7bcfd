/// Represents the notation of a literal node.
///
/// The kind decides which conversion routine turns the raw literal text into
/// a number during evaluation. The text itself is kept verbatim as it
/// appeared in the source, so conversion errors can report it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LiteralKind {
    /// A base-10 integer literal such as `42` or `-42`.
    Int,
    /// A decimal literal such as `13.37`.
    Dec,
    /// A binary literal such as `0b101`.
    Bin,
    /// A hexadecimal literal such as `0x1B`.
    Hex,
    /// An exponential literal such as `10^2`.
    Exp,
}

/// Represents a binary operator.
///
/// All binary operators take two numeric operands and produce a number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Bitwise or (`|`)
    Or,
    /// Bitwise exclusive or (`^`)
    Xor,
    /// Bitwise and (`&`)
    And,
}

/// Represents a builtin unary math function.
///
/// Every function takes exactly one numeric argument. The set is fixed; the
/// lexer only recognizes these names.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    /// Square root (`sqrt`)
    Sqrt,
    /// Sine (`sin`)
    Sin,
    /// Cosine (`cos`)
    Cos,
    /// Tangent (`tan`)
    Tan,
    /// Absolute value (`abs`)
    Abs,
    /// Sign bit check (`signbit`); yields `1` when the sign bit is set.
    Signbit,
    /// Round up (`ceil`)
    Ceil,
    /// Round down (`floor`)
    Floor,
    /// Truncate toward zero (`trunc`)
    Trunc,
    /// Cube root (`cbrt`)
    Cbrt,
    /// Inverse sine (`asin`)
    Asin,
    /// Inverse cosine (`acos`)
    Acos,
    /// Inverse tangent (`atan`)
    Atan,
    /// Natural logarithm (`log`)
    Log,
    /// Base-2 logarithm (`log2`)
    Log2,
    /// Base-10 logarithm (`log10`)
    Log10,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Node` covers the three syntactic shapes of the language: raw literals,
/// binary operations, and unary function applications. Every child node is
/// owned exclusively by its parent, so the tree is a strict ownership
/// hierarchy that is never aliased or mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal, stored as its raw source text.
    ///
    /// Conversion to a number is deferred to the evaluator so that malformed
    /// text can be reported together with the literal that caused it.
    Literal {
        /// The notation the literal was written in.
        kind: LiteralKind,
        /// The exact source text of the literal.
        text: String,
    },
    /// A binary operation (addition, division, bitwise and, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// A unary math function applied to a single argument.
    Function {
        /// The function to apply.
        func: MathFunction,
        /// The argument expression.
        arg:  Box<Node>,
    },
}
