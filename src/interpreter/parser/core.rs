use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// Begins at the lowest-precedence level and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens)
}

/// Tokenizes and parses a complete source string.
///
/// The whole input must form a single expression; anything left over is
/// reported as `UnexpectedTrailingTokens`. Recursion depth follows the
/// nesting of the input and is not bounded.
///
/// # Errors
/// Propagates lexer errors and any error from [`parse_expression`].
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    if let Some((tok, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    format!("{tok:?}"),
                                                          position: *position, });
    }

    tracing::debug!(%source, %expr, "parsed expression");
    Ok(expr)
}
