/// Parsing errors.
///
/// Defines the errors that can occur while lexing and parsing source text,
/// before any tree exists.
pub mod parse_error;
/// Validation errors.
///
/// Contains the errors raised by the check pass: an illegal operator, an
/// unknown function, or a call with the wrong number of arguments.
pub mod check_error;

pub use check_error::{CheckError, OperatorKind};
pub use parse_error::ParseError;
