/// Entry points and the top of the grammar.
pub mod core;

/// Unary operators, primary expressions and calls.
pub mod unary;

/// Left-associative binary operators by precedence level.
pub mod binary;

/// Helpers shared by the other parser modules.
pub mod utils;
