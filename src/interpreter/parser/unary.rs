use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_parenthesized},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+`, `-` and `!`. Unary operators are
/// right-associative, so `-!x` is parsed as `-(!x)`, and bind tighter than
/// any binary operator.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((token @ (Token::Plus | Token::Minus | Token::Bang), _)) = tokens.peek()
       && let Some(op) = token.operator()
    {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::unary(op, operand));
    }
    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | identifier "(" (expression ("," expression)*)? ")"
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::literal(*value)),
        Some((Token::Identifier(name), _)) => parse_identifier_or_call(tokens, name),
        Some((Token::LParen, open)) => parse_parenthesized(tokens, *open),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses either a variable reference or a function call.
///
/// An identifier immediately followed by `(` is a call; the argument list is
/// parsed with [`parse_comma_separated`]. Function names are not validated
/// here.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::call(name, arguments));
    }
    Ok(Expr::variable(name))
}
