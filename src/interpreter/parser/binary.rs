use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, &['+', '-'], parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, &['*', '/'], parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning tree of
/// `Expr::Binary` nodes.
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `operators`: The operator characters handled at this precedence level.
/// - `parse_operand`: Parser for the next-tighter precedence level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[char],
                                 parse_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token.operator()
           && operators.contains(&op)
        {
            tokens.next();
            let right = parse_operand(tokens)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}
