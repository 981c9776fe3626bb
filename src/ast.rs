use std::collections::{HashMap, HashSet};

/// Binds variable names to values for one evaluation.
///
/// The evaluator only reads from an `Env`. A name that is missing evaluates to
/// `0.0`.
pub type Env = HashMap<String, f64>;

/// The set of variable names an expression refers to.
///
/// Filled in by [`Expr::check`].
pub type VarSet = HashSet<String>;

/// Operators accepted in prefix position: `+x`, `-x` and `!x`.
pub const UNARY_OPERATORS: &[char] = &['+', '-', '!'];

/// Operators accepted between two operands.
pub const BINARY_OPERATORS: &[char] = &['+', '-', '*', '/'];

/// An expression tree node.
///
/// `Expr` is a closed set of five shapes. Every node exclusively owns its
/// children and is never mutated after construction, so one tree can be
/// evaluated against any number of environments.
///
/// Operators are stored as plain characters. A tree built by hand may carry an
/// operator outside [`UNARY_OPERATORS`] or [`BINARY_OPERATORS`]; such trees are
/// rejected by [`Expr::check`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a free variable by name.
    Variable {
        /// Lookup key into an [`Env`].
        name: String,
    },
    /// A numeric constant.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A prefix operation such as `-x`.
    Unary {
        /// The operator character.
        op:      char,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An infix operation such as `x * y`.
    Binary {
        /// The operator character.
        op:    char,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a built-in function, e.g. `pow(x, 2)`.
    Call {
        /// Name of the function being called.
        function:  String,
        /// Arguments, mapped positionally to the function's parameters.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a numeric literal.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Builds a unary operation.
    #[must_use]
    pub fn unary(op: char, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Builds a binary operation.
    ///
    /// ## Example
    /// ```
    /// use expreval::ast::{Env, Expr};
    ///
    /// let expr = Expr::binary('*', Expr::literal(6.0), Expr::literal(7.0));
    /// assert_eq!(expr.eval(&Env::new()), 42.0);
    /// ```
    #[must_use]
    pub fn binary(op: char, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a function call.
    #[must_use]
    pub fn call(function: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Call { function: function.into(),
                     arguments }
    }
}

/// Renders the expression as source text that [`crate::parse`] accepts.
///
/// Binary operations are always parenthesised, so the output does not depend
/// on operator precedence. The parser has no syntax for negative or
/// non-finite numbers, so such literals print as expressions with the same
/// value: `-1` reparses as a negation, NaN prints as `(0 / 0)` and the
/// infinities as `(1 / 0)` and `(-1 / 0)`.
///
/// ## Example
/// ```
/// use expreval::{ast::Expr, parse};
///
/// let expr = parse("5/9 * (F-32)").unwrap();
/// assert_eq!(expr.to_string(), "((5 / 9) * (F - 32))");
/// assert_eq!(parse("pow(x,3)").unwrap().to_string(), "pow(x, 3)");
/// assert_eq!(Expr::literal(f64::NAN).to_string(), "(0 / 0)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable { name } => write!(f, "{name}"),
            Self::Literal { value } if value.is_nan() => write!(f, "(0 / 0)"),
            Self::Literal { value } if value.is_infinite() => {
                write!(f, "({} / 0)", value.signum())
            },
            Self::Literal { value } => write!(f, "{value}"),
            Self::Unary { op, operand } => write!(f, "{op}{operand}"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Call { function,
                         arguments, } => {
                write!(f, "{function}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}
