use std::f64::consts::PI;

use expreval::{
    ast::{Env, Expr},
    evaluate, parse,
};

fn env(bindings: &[(&str, f64)]) -> Env {
    bindings.iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect()
}

fn assert_evaluates(src: &str, bindings: &[(&str, f64)], want: f64) {
    let got = evaluate(src, &env(bindings)).unwrap_or_else(|e| panic!("{src} failed: {e}"));
    let tolerance = 1e-5 * want.abs().max(1e-12);
    assert!((got - want).abs() <= tolerance,
            "{src} in {bindings:?} = {got}, but want {want}");
}

fn assert_failure(src: &str) {
    if evaluate(src, &Env::new()).is_ok() {
        panic!("{src} succeeded but was expected to fail")
    }
}

#[test]
fn square_roots() {
    assert_evaluates("sqrt(pi * pi)", &[("pi", PI)], 3.14159);
    assert_evaluates("sqrt(four * nine)", &[("four", 4.0), ("nine", 9.0)], 6.0);
}

#[test]
fn powers() {
    assert_evaluates("pow(x, 3) + pow(y, 3)", &[("x", 3.0), ("y", 4.0)], 91.0);
    assert_evaluates("pow(x, 1) + pow(y, 2)", &[("x", 3.0), ("y", 4.0)], 19.0);
}

#[test]
fn logarithm_and_trigonometry() {
    assert_evaluates("log(x)", &[("x", 2.0)], 0.693147);
    assert_evaluates("sin(pi)", &[("pi", PI)], 1.22465e-16);
    assert_evaluates("cos(pi)", &[("pi", PI)], -1.0);
    assert_evaluates("tan(pi)", &[("pi", PI)], -1.22465e-16);
}

#[test]
fn fahrenheit_to_celsius() {
    assert_evaluates("5/9 * (F-32)", &[("F", 41.0)], 5.0);
    assert_evaluates("5/9 * (F-32)", &[("F", 32.0)], 0.0);
    assert_evaluates("5/9 * (F-32)", &[("F", 212.0)], 100.0);
}

#[test]
fn unary_operators() {
    assert_evaluates("-x", &[("x", 1.0)], -1.0);
    assert_evaluates("-x", &[("x", -1.0)], 1.0);
    assert_evaluates("+x", &[("x", 1.0)], 1.0);
    assert_evaluates("+x", &[("x", -1.0)], -1.0);
    assert_evaluates("!x", &[("x", 1.0)], 0.0);
    assert_evaluates("!x", &[("x", -1.0)], 0.0);
    assert_evaluates("!x", &[("x", 0.0)], 0.0);
}

#[test]
fn precedence_and_associativity() {
    assert_evaluates("1 + 2 * 3", &[], 7.0);
    assert_evaluates("(1 + 2) * 3", &[], 9.0);
    assert_evaluates("8 - 4 - 2", &[], 2.0);
    assert_evaluates("8 / 4 / 2", &[], 1.0);
    assert_evaluates("-2 * -3", &[], 6.0);
    assert_evaluates("1.5e1 + .5", &[], 15.5);
}

#[test]
fn unbound_variables_read_as_zero() {
    assert_evaluates("x + 1", &[], 1.0);
    assert_evaluates("pow(y, 0)", &[], 1.0);
}

#[test]
fn division_follows_ieee() {
    let expr = parse("x / y").unwrap();
    assert_eq!(expr.eval(&env(&[("x", 1.0), ("y", 0.0)])), f64::INFINITY);
    assert_eq!(expr.eval(&env(&[("x", -1.0), ("y", 0.0)])), f64::NEG_INFINITY);
    assert!(expr.eval(&env(&[("x", 0.0), ("y", 0.0)])).is_nan());
    assert!(parse("sqrt(-1)").unwrap().eval(&Env::new()).is_nan());
}

#[test]
fn one_tree_many_environments() {
    let expr = parse("pow(x, 2) - y").unwrap();
    expr.free_variables().unwrap();

    for (x, y) in [(1.0, 1.0), (2.0, 3.0), (-4.0, 0.5)] {
        let bindings = env(&[("x", x), ("y", y)]);
        assert_eq!(expr.eval(&bindings), x * x - y);
        assert_eq!(expr.eval(&bindings), expr.eval(&bindings));
    }
}

#[test]
fn validation_failures() {
    assert_failure("log(x, y)");
    assert_failure("asin(pi)");
    assert_failure("pow(2)");
    assert_failure("sqrt()");
}

#[test]
fn parse_failures() {
    assert_failure("");
    assert_failure("(1 + 2");
    assert_failure("1 + ");
    assert_failure("1 2");
    assert_failure("x % 2");
    assert_failure("pow(x 2)");
}

#[test]
fn printed_expressions_parse_back() {
    for src in ["sqrt(pi * pi)", "pow(x, 3) + pow(y, 3)", "5/9 * (F-32)", "-x - !y", "cos(+z)"] {
        let expr = parse(src).unwrap();
        assert_eq!(parse(&expr.to_string()).unwrap(), expr, "{src} printed as {expr}");
    }
}

#[test]
fn extra_call_arguments_are_ignored_by_eval() {
    let expr = parse("log(x, y)").unwrap();
    assert_eq!(expr.eval(&env(&[("x", 2.0), ("y", 4.0)])), 2f64.ln());

    let expr = parse("pow(x, 2, y)").unwrap();
    assert_eq!(expr.eval(&env(&[("x", 3.0), ("y", 4.0)])), 9.0);
}

#[test]
fn one_tree_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expr>();
    assert_send_sync::<Env>();

    let expr = parse("pow(x, 2) + y").unwrap();
    expr.free_variables().unwrap();

    std::thread::scope(|scope| {
        let workers = (0..8).map(|i| {
                                let expr = &expr;
                                scope.spawn(move || {
                                         let x = f64::from(i);
                                         let bindings = env(&[("x", x), ("y", 1.0)]);
                                         (x, expr.eval(&bindings))
                                     })
                            })
                            .collect::<Vec<_>>();

        for worker in workers {
            let (x, got) = worker.join().unwrap();
            assert_eq!(got, x * x + 1.0);
        }
    });
}

#[test]
fn non_finite_literals_print_as_parseable_expressions() {
    let cases = [(f64::NAN, "(0 / 0)"),
                 (f64::INFINITY, "(1 / 0)"),
                 (f64::NEG_INFINITY, "(-1 / 0)")];
    for (value, printed) in cases {
        let expr = Expr::literal(value);
        assert_eq!(expr.to_string(), printed);

        let reparsed = parse(&expr.to_string()).unwrap();
        assert!(reparsed.free_variables().unwrap().is_empty());
        let got = reparsed.eval(&Env::new());
        if value.is_nan() {
            assert!(got.is_nan(), "{printed} = {got}");
        } else {
            assert_eq!(got, value, "{printed}");
        }
    }
}

#[test]
fn deeply_nested_input_parses() {
    let depth = 200;
    let src = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&src).unwrap(), Expr::variable("x"));

    let negations = format!("{}1", "-".repeat(depth));
    assert_evaluates(&negations, &[], 1.0);
}
