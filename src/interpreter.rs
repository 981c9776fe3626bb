/// The checker module validates expression trees.
///
/// The checker walks a tree once, rejecting illegal operators, unknown
/// functions and calls with the wrong arity, and records every variable name
/// it meets along the way.
///
/// # Responsibilities
/// - Reports the first problem found as a [`crate::error::CheckError`].
/// - Collects free variables into a caller-owned set.
pub mod checker;
/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks a tree against an environment and produces a single
/// `f64`. It assumes the tree has passed the checker.
///
/// # Responsibilities
/// - Applies unary and binary operators with IEEE-754 semantics.
/// - Dispatches calls to the built-in function table.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// # Responsibilities
/// - Converts the input into numbers, identifiers, operators and delimiters.
/// - Records the byte offset of each token for error reporting.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an [`crate::ast::Expr`] tree, honouring operator precedence and
/// associativity.
pub mod parser;
