use crate::{
    ast::{Env, Expr},
    interpreter::evaluator::function::builtin,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length
/// matches its arity.
type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every built-in function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "pow"  => { arity: 2, func: builtin::pow },
    "log"  => { arity: 1, func: builtin::log },
    "sqrt" => { arity: 1, func: builtin::sqrt },
    "sin"  => { arity: 1, func: builtin::sin },
    "cos"  => { arity: 1, func: builtin::cos },
    "tan"  => { arity: 1, func: builtin::tan },
}

fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns the number of arguments a built-in function takes, or `None` if
/// `name` is not built in.
///
/// # Example
/// ```
/// use expreval::interpreter::evaluator::function::builtin_arity;
///
/// assert_eq!(builtin_arity("pow"), Some(2));
/// assert_eq!(builtin_arity("log"), Some(1));
/// assert_eq!(builtin_arity("asin"), None);
/// ```
#[must_use]
pub fn builtin_arity(name: &str) -> Option<usize> {
    lookup(name).map(|b| b.arity)
}

impl Expr {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated strictly left to right, then the builtin is
    /// applied to the collected values.
    ///
    /// The argument count is not checked here. A builtin reads only its
    /// leading arguments, so extra ones are ignored.
    ///
    /// # Panics
    /// Panics if `name` is not a builtin, or if fewer arguments are supplied
    /// than the builtin reads. The checker rejects both.
    ///
    /// # Example
    /// ```
    /// use expreval::ast::{Env, Expr};
    ///
    /// let args = [Expr::literal(2.0), Expr::literal(4.0)];
    /// assert_eq!(Expr::eval_call("log", &args, &Env::new()), 2f64.ln());
    /// ```
    #[must_use]
    pub fn eval_call(name: &str, arguments: &[Self], env: &Env) -> f64 {
        let Some(builtin) = lookup(name) else {
            panic!("Unsupported function call: {name}");
        };
        let arg_vals = arguments.iter()
                                .map(|arg| arg.eval(env))
                                .collect::<Vec<_>>();

        (builtin.func)(&arg_vals)
    }
}
