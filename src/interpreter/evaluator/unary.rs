use crate::ast::{Env, Expr};

impl Expr {
    /// Evaluates a unary operation.
    ///
    /// Supported operators:
    /// - `+`: identity.
    /// - `-`: arithmetic negation.
    /// - `!`: always `0.0`, whatever the operand. The operand is not
    ///   evaluated.
    ///
    /// # Panics
    /// Panics on any other operator.
    ///
    /// # Example
    /// ```
    /// use expreval::ast::{Env, Expr};
    ///
    /// let env = Env::from([("x".to_string(), -1.0)]);
    ///
    /// assert_eq!(Expr::eval_unary('-', &Expr::variable("x"), &env), 1.0);
    /// assert_eq!(Expr::eval_unary('!', &Expr::variable("x"), &env), 0.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: char, operand: &Self, env: &Env) -> f64 {
        match op {
            '+' => operand.eval(env),
            '-' => -operand.eval(env),
            '!' => 0.0,
            _ => panic!("Unsupported unary operator: {op:?}"),
        }
    }
}
