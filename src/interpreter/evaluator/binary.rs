use crate::ast::Expr;

impl Expr {
    /// Applies a binary arithmetic operator to two evaluated operands.
    ///
    /// Uses plain `f64` arithmetic, so `1 / 0` is `inf` and `0 / 0` is NaN
    /// rather than an error.
    ///
    /// # Panics
    /// Panics if `op` is not one of `+`, `-`, `*` or `/`.
    ///
    /// # Example
    /// ```
    /// use expreval::ast::Expr;
    ///
    /// assert_eq!(Expr::eval_binary('*', 1.5, 2.0), 3.0);
    /// assert_eq!(Expr::eval_binary('/', 1.0, 0.0), f64::INFINITY);
    /// assert!(Expr::eval_binary('/', 0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: char, left: f64, right: f64) -> f64 {
        match op {
            '+' => left + right,
            '-' => left - right,
            '*' => left * right,
            '/' => left / right,
            _ => panic!("Unsupported binary operator: {op:?}"),
        }
    }
}
