use expreval::{
    ast::{BINARY_OPERATORS, Env, Expr, UNARY_OPERATORS, VarSet},
    error::{CheckError, OperatorKind},
    interpreter::evaluator::function::{BUILTIN_FUNCTIONS, builtin_arity},
};
use proptest::{prelude::*, sample::select};

/// Trees drawn only from legal operators and correctly sized calls.
fn legal_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof!["[a-e]".prop_map(Expr::variable),
                           (-1e6f64..1e6).prop_map(Expr::literal),];

    leaf.prop_recursive(6, 64, 2, |inner| {
            prop_oneof![(select(UNARY_OPERATORS), inner.clone()).prop_map(|(op, operand)| {
                                                                     Expr::unary(op, operand)
                                                                 }),
                        (select(BINARY_OPERATORS), inner.clone(), inner.clone())
                            .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
                        (select(BUILTIN_FUNCTIONS), prop::collection::vec(inner, 2)).prop_map(
                            |(function, arguments)| {
                                let arity = builtin_arity(function).unwrap_or_default();
                                Expr::call(function, arguments.into_iter().take(arity).collect())
                            }
                        ),]
        })
}

fn environment() -> impl Strategy<Value = Env> {
    prop::collection::hash_map("[a-e]", -100.0f64..100.0, 0..5)
}

fn reachable_names(expr: &Expr, out: &mut VarSet) {
    match expr {
        Expr::Variable { name } => {
            out.insert(name.clone());
        },
        Expr::Literal { .. } => {},
        Expr::Unary { operand, .. } => reachable_names(operand, out),
        Expr::Binary { left, right, .. } => {
            reachable_names(left, out);
            reachable_names(right, out);
        },
        Expr::Call { arguments, .. } => {
            for argument in arguments {
                reachable_names(argument, out);
            }
        },
    }
}

proptest! {
    #[test]
    fn literal_evaluates_to_itself(c in proptest::num::f64::ANY, env in environment()) {
        prop_assert_eq!(Expr::literal(c).eval(&env).to_bits(), c.to_bits());
    }

    #[test]
    fn legal_trees_pass_check(expr in legal_expr()) {
        let mut vars = VarSet::new();
        prop_assert!(expr.check(&mut vars).is_ok());

        let mut expected = VarSet::new();
        reachable_names(&expr, &mut expected);
        prop_assert_eq!(vars, expected);
    }

    #[test]
    fn eval_is_repeatable(expr in legal_expr(), env in environment()) {
        prop_assert_eq!(expr.eval(&env).to_bits(), expr.eval(&env).to_bits());
    }

    #[test]
    fn illegal_unary_operator_is_rejected(op in any::<char>().prop_filter("legal", |c| !UNARY_OPERATORS.contains(c)),
                                          operand in legal_expr()) {
        prop_assert_eq!(Expr::unary(op, operand).check(&mut VarSet::new()),
                        Err(CheckError::InvalidOperator { operator: op, kind: OperatorKind::Unary }));
    }

    #[test]
    fn illegal_binary_operator_is_rejected(op in any::<char>().prop_filter("legal", |c| !BINARY_OPERATORS.contains(c)),
                                           left in legal_expr(),
                                           right in legal_expr()) {
        prop_assert_eq!(Expr::binary(op, left, right).check(&mut VarSet::new()),
                        Err(CheckError::InvalidOperator { operator: op, kind: OperatorKind::Binary }));
    }

    #[test]
    fn unknown_function_is_rejected(name in "[a-z]{1,6}".prop_filter("builtin", |n| builtin_arity(n).is_none()),
                                    arguments in prop::collection::vec(legal_expr(), 0..3)) {
        prop_assert_eq!(Expr::call(name.clone(), arguments).check(&mut VarSet::new()),
                        Err(CheckError::UnknownFunction { name }));
    }

    #[test]
    fn wrong_arity_is_rejected(function in select(BUILTIN_FUNCTIONS),
                               arguments in prop::collection::vec(legal_expr(), 0..4)) {
        let want = builtin_arity(function).unwrap_or_default();
        prop_assume!(arguments.len() != want);

        let got = arguments.len();
        prop_assert_eq!(Expr::call(function, arguments).check(&mut VarSet::new()),
                        Err(CheckError::ArityMismatch { name: function.to_string(), got, want }));
    }
}
