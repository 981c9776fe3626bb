use crate::ast::{Env, Expr};

impl Expr {
    /// Evaluates the expression against `env` and returns the result.
    ///
    /// This is the main entry point for evaluation. It never fails on an
    /// unbound variable: a name missing from `env` reads as `0.0`. Division
    /// by zero follows IEEE-754 and yields an infinity or NaN.
    ///
    /// The tree is expected to have passed [`Expr::check`]. Recursion depth
    /// equals tree depth and is not bounded.
    ///
    /// # Panics
    /// Panics if the tree contains an operator or function that the checker
    /// rejects, or a call with fewer arguments than its builtin reads.
    /// Reaching this means validation was skipped. Extra call arguments are
    /// ignored.
    ///
    /// # Example
    /// ```
    /// use expreval::{ast::Env, parse};
    ///
    /// let expr = parse("sqrt(pi * pi)").unwrap();
    /// let env = Env::from([("pi".to_string(), std::f64::consts::PI)]);
    ///
    /// assert_eq!(expr.eval(&env), std::f64::consts::PI);
    ///
    /// // `pi` is unbound here, so it reads as zero.
    /// assert_eq!(expr.eval(&Env::new()), 0.0);
    /// ```
    #[must_use]
    pub fn eval(&self, env: &Env) -> f64 {
        match self {
            Self::Variable { name } => env.get(name).copied().unwrap_or_default(),
            Self::Literal { value } => *value,
            Self::Unary { op, operand } => Self::eval_unary(*op, operand, env),
            Self::Binary { op, left, right } => {
                Self::eval_binary(*op, left.eval(env), right.eval(env))
            },
            Self::Call { function,
                         arguments, } => Self::eval_call(function, arguments, env),
        }
    }
}
