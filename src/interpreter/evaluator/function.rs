/// Built-in function implementations.
///
/// The mathematical functions available to expressions.
pub mod builtin;

/// The builtin table and call dispatch.
///
/// Maps each function name to its arity and implementation.
pub mod core;

pub use self::core::{BUILTIN_FUNCTIONS, builtin_arity};
