/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every expression form the grammar can produce: numeric
/// literals, variable references, unary operations, and binary operations.
/// Operands of compound expressions are boxed, so arbitrarily deep trees can
/// be built from the fixed-size variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3`, `0.5` or `120.25`.
    Number(f64),
    /// Reference to a variable by name. Names are case-sensitive.
    Variable(String),
    /// A unary operation (e.g. `-x` or `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines. Every statement produces
/// a console notification when it executes, so a script's visible behavior is
/// the ordered sequence of its statements' effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression, `x = 2 + 2`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// A read statement, `leia(x)`: prompt for a number and bind it.
    Read {
        /// The name of the variable receiving the value.
        name: String,
    },
    /// A print statement, `imprima(expr)`: evaluate and show the value.
    Print {
        /// The expression to print.
        expr: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// A whole parsed program: the statements of one source unit in order.
///
/// In file mode a `Program` covers the entire script; in the REPL each
/// submitted line parses to its own `Program`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// All binary operators are arithmetic; there are no comparisons in the
/// language.
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
    /// Exponentiation (`^`), right-associative.
    Pow,
}

/// Represents a unary operator.
///
/// Unary operators are the prefix signs: negation and the identity plus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    /// Formats the operator as its source symbol.
    ///
    /// # Example
    /// ```
    /// use contar::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.to_string(), "^");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    /// Formats the operator as its source symbol.
    ///
    /// # Example
    /// ```
    /// use contar::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Minus.to_string(), "-");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}
