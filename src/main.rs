use std::{fs, process};

use clap::Parser;
use expreval::{
    ast::{Env, Expr},
    parse,
};

/// expreval checks and evaluates arithmetic expressions with free variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells expreval to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, e.g. `--bind x=3`. May be repeated.
    #[arg(short, long = "bind", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, f64)>,

    /// Only validate the expression and list its free variables.
    #[arg(short, long)]
    check: bool,

    contents: String,
}

/// Parses a `NAME=VALUE` pair for `--bind`.
fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

/// Installs a fmt subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=expreval=debug`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let expr = parse(&source).unwrap_or_else(|e| {
                                 eprintln!("{e}");
                                 process::exit(1);
                             });

    let vars = expr.free_variables().unwrap_or_else(|e| {
                                        eprintln!("{e}");
                                        process::exit(1);
                                    });

    let mut names = vars.into_iter().collect::<Vec<_>>();
    names.sort();

    if args.check {
        for name in &names {
            println!("{name}");
        }
        return;
    }

    let env = args.bindings.into_iter().collect::<Env>();
    report_unbound(&expr, &names, &env);

    println!("{}", expr.eval(&env));
}

/// Warns about free variables the bindings do not cover; they evaluate to
/// zero.
fn report_unbound(expr: &Expr, names: &[String], env: &Env) {
    for name in names.iter().filter(|name| !env.contains_key(*name)) {
        tracing::warn!(%expr, %name, "unbound variable");
        eprintln!("Warning: '{name}' is not bound and evaluates to 0.");
    }
}
