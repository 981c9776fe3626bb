//! Each builtin receives its already-evaluated arguments and reads only the
//! leading ones it needs. Extra arguments are ignored; too few panic on
//! indexing.

/// Defines one-argument builtins that forward to the `f64` method of the
/// same name.
///
/// # Example
/// ```
/// use expreval::interpreter::evaluator::function::builtin::cos;
///
/// assert_eq!(cos(&[std::f64::consts::PI]), -1.0);
/// ```
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $fname(args: &[f64]) -> f64 {
                args[0].$real_fn()
            }
        )*
    };
}

real_builtin! {
    log  => ln,
    sqrt => sqrt,
    sin  => sin,
    cos  => cos,
    tan  => tan,
}

/// Raises `args[0]` to the power `args[1]`.
///
/// ```
/// use expreval::interpreter::evaluator::function::builtin::pow;
///
/// assert_eq!(pow(&[3.0, 3.0]), 27.0);
/// ```
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}
