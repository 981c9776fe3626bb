/// Where an operator appeared in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Prefix position, e.g. `-x`.
    Unary,
    /// Infix position, e.g. `x - y`.
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the first problem found while validating an expression tree.
///
/// Only [`crate::ast::Expr::check`] produces these. Evaluation never returns
/// them.
pub enum CheckError {
    /// An operator outside the legal set for its position.
    InvalidOperator {
        /// The offending operator character.
        operator: char,
        /// Whether it was used as a unary or binary operator.
        kind:     OperatorKind,
    },
    /// Called a function that is not built in.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a built-in function with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name: String,
        /// The number of arguments supplied.
        got:  usize,
        /// The number of arguments the function takes.
        want: usize,
    },
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unary => write!(f, "unary"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperator { operator, kind } => {
                write!(f, "Unexpected {kind} operator {operator:?}.")
            },
            Self::UnknownFunction { name } => write!(f, "Unknown function {name:?}."),
            Self::ArityMismatch { name, got, want } => {
                write!(f, "Call to {name} has {got} arguments, want {want}.")
            },
        }
    }
}

impl std::error::Error for CheckError {}
