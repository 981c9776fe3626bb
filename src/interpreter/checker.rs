use crate::{
    ast::{BINARY_OPERATORS, Expr, UNARY_OPERATORS, VarSet},
    error::{CheckError, OperatorKind},
    interpreter::evaluator::function::builtin_arity,
};

/// Result type used by the checker.
pub type CheckResult<T> = Result<T, CheckError>;

impl Expr {
    /// Validates the expression and records its free variables in `vars`.
    ///
    /// The walk visits operands before siblings, left before right, and call
    /// arguments in order. It stops at the first problem, so after a failure
    /// `vars` holds only the names seen up to that point.
    ///
    /// A tree that passes this check can be evaluated without panicking.
    /// Recursion depth equals tree depth and is not bounded.
    ///
    /// # Errors
    /// - `InvalidOperator` for a unary operator outside `+ - !` or a binary
    ///   operator outside `+ - * /`.
    /// - `UnknownFunction` for a call to a name that is not built in.
    /// - `ArityMismatch` for a builtin called with the wrong number of
    ///   arguments.
    ///
    /// # Example
    /// ```
    /// use expreval::{ast::VarSet, error::CheckError, parse};
    ///
    /// let mut vars = VarSet::new();
    /// parse("5/9 * (F-32)").unwrap().check(&mut vars).unwrap();
    /// assert_eq!(vars, VarSet::from(["F".to_string()]));
    ///
    /// let err = parse("log(x, y)").unwrap().check(&mut VarSet::new()).unwrap_err();
    /// assert_eq!(err,
    ///            CheckError::ArityMismatch { name: "log".to_string(),
    ///                                        got:  2,
    ///                                        want: 1, });
    /// ```
    pub fn check(&self, vars: &mut VarSet) -> CheckResult<()> {
        let result = self.check_node(vars);
        if let Err(e) = &result {
            tracing::debug!(expr = %self, error = %e, "expression failed validation");
        }
        result
    }

    /// Validates the expression and returns its free variables in a fresh
    /// set.
    ///
    /// # Example
    /// ```
    /// use expreval::parse;
    ///
    /// let vars = parse("pow(x, 3) + pow(y, 3) + x").unwrap().free_variables().unwrap();
    /// assert_eq!(vars.len(), 2);
    /// ```
    pub fn free_variables(&self) -> CheckResult<VarSet> {
        let mut vars = VarSet::new();
        self.check(&mut vars)?;
        tracing::debug!(count = vars.len(), "collected free variables");
        Ok(vars)
    }

    fn check_node(&self, vars: &mut VarSet) -> CheckResult<()> {
        match self {
            Self::Variable { name } => {
                tracing::trace!(%name, "registering variable");
                vars.insert(name.clone());
                Ok(())
            },
            Self::Literal { .. } => Ok(()),
            Self::Unary { op, operand } => {
                if !UNARY_OPERATORS.contains(op) {
                    return Err(CheckError::InvalidOperator { operator: *op,
                                                             kind:     OperatorKind::Unary, });
                }
                operand.check_node(vars)
            },
            Self::Binary { op, left, right } => {
                if !BINARY_OPERATORS.contains(op) {
                    return Err(CheckError::InvalidOperator { operator: *op,
                                                             kind:     OperatorKind::Binary, });
                }
                left.check_node(vars)?;
                right.check_node(vars)
            },
            Self::Call { function,
                         arguments, } => {
                let want = builtin_arity(function).ok_or_else(|| {
                                                      CheckError::UnknownFunction { name:
                                                                                        function.clone() }
                                                  })?;
                if arguments.len() != want {
                    return Err(CheckError::ArityMismatch { name: function.clone(),
                                                           got: arguments.len(),
                                                           want });
                }
                arguments.iter().try_for_each(|arg| arg.check_node(vars))
            },
        }
    }
}
