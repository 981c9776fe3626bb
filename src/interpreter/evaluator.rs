/// Core evaluation logic.
///
/// Contains the main dispatch over expression variants.
pub mod core;

/// Unary operator evaluation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators with IEEE-754 semantics.
pub mod binary;

/// Function evaluation.
///
/// Holds the built-in function table and the call dispatch that both the
/// evaluator and the checker consult.
pub mod function;
