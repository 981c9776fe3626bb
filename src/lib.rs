//! # expreval
//!
//! expreval is a small arithmetic expression evaluator written in Rust.
//! It parses an expression into a tree, validates the tree against a fixed
//! grammar of operators and built-in functions, collects the free variables it
//! references, and evaluates it against a caller-supplied binding.
//!
//! The usual flow is to parse once, check once, then evaluate as many times as
//! needed:
//!
//! ```
//! use expreval::{ast::{Env, VarSet}, parse};
//!
//! let expr = parse("pow(x, 3) + pow(y, 3)").unwrap();
//!
//! let mut vars = VarSet::new();
//! expr.check(&mut vars).unwrap();
//! assert!(vars.contains("x") && vars.contains("y"));
//!
//! let env = Env::from([("x".to_string(), 3.0), ("y".to_string(), 4.0)]);
//! assert_eq!(expr.eval(&env), 91.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use crate::{
    ast::{Env, Expr},
    interpreter::parser::core::parse_source,
};

/// Defines the expression tree.
///
/// This module declares the closed `Expr` enum, the `Env` binding and `VarSet`
/// accumulator types, and the operator tables shared by the checker and the
/// evaluator.
///
/// # Responsibilities
/// - Defines the five expression shapes and their constructors.
/// - Renders trees back to source text.
pub mod ast;
/// Provides error types for parsing and validation.
///
/// Parse errors come from the lexer and parser. Check errors come from the
/// validation pass and describe the first illegal operator, unknown function
/// or arity mismatch found in a tree.
pub mod error;
/// Lexing, parsing, validation and evaluation.
///
/// # Responsibilities
/// - Turns source text into an [`Expr`] tree.
/// - Validates trees and discovers their free variables.
/// - Evaluates validated trees against an [`Env`].
pub mod interpreter;

pub use error::{CheckError, ParseError};

/// Parses source text into an expression tree.
///
/// The parser only guarantees a well-formed tree; function names and call
/// arity are not validated until [`Expr::check`] runs.
///
/// Recursion depth grows with nesting (parentheses, prefix operators, call
/// arguments) and is not bounded, so adversarial input such as a long run of
/// `(` can exhaust the stack.
///
/// # Example
/// ```
/// use expreval::{ast::Expr, parse};
///
/// let expr = parse("-x").unwrap();
/// assert_eq!(expr, Expr::unary('-', Expr::variable("x")));
///
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_source(source)
}

/// Parses, validates and evaluates `source` in one step.
///
/// A validation failure prevents evaluation. Variables missing from `env`
/// evaluate to zero.
///
/// # Example
/// ```
/// use expreval::{ast::Env, evaluate};
///
/// let env = Env::from([("F".to_string(), 212.0)]);
/// assert_eq!(evaluate("5/9 * (F-32)", &env).unwrap(), 100.0);
///
/// // `log` takes one argument.
/// assert!(evaluate("log(x, y)", &env).is_err());
/// ```
pub fn evaluate(source: &str, env: &Env) -> Result<f64, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    expr.free_variables()?;

    Ok(expr.eval(env))
}
