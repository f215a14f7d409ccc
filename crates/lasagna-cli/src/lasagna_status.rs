//! Lasagna cook status CLI
//!
//! Usage: lasagna_status <layers> <elapsed> [--strict] [--verbose]
//!
//! Example:
//!   lasagna_status 3 20
//!   lasagna_status 4 45 --strict
//!
//! Without --strict, negative inputs are computed as-is. With --strict they are rejected.
//! Log filtering follows RUST_LOG when set.

use lasagna_timer::{CookStatus, CookTimeError, EXPECTED_COOK_TIME};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "<layers> <elapsed> [--strict] [--verbose]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Args {
    layers_to_prep: i64,
    elapsed_minutes: i64,
    strict: bool,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut positional: Vec<i64> = Vec::new();
    let mut strict = false;
    let mut verbose = false;

    for arg in args {
        match arg.as_str() {
            "--strict" => strict = true,
            "--verbose" | "-v" => verbose = true,
            // Negative numbers are values, not options
            value if !value.starts_with("--") => {
                let parsed = value
                    .parse()
                    .map_err(|_| format!("Error: Invalid number '{}'.", value))?;
                positional.push(parsed);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    match positional.as_slice() {
        [layers_to_prep, elapsed_minutes] => Ok(Args {
            layers_to_prep: *layers_to_prep,
            elapsed_minutes: *elapsed_minutes,
            strict,
            verbose,
        }),
        _ => Err(format!(
            "Error: Expected 2 values (layers, elapsed minutes), got {}.",
            positional.len()
        )),
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "lasagna_status=debug,info"
    } else {
        "lasagna_status=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn build_status(args: &Args) -> Result<CookStatus, CookTimeError> {
    if args.strict {
        CookStatus::checked(args.layers_to_prep, args.elapsed_minutes)
    } else {
        Ok(CookStatus::new(args.layers_to_prep, args.elapsed_minutes))
    }
}

fn main() {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("lasagna_status");

    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Usage: {} {}", program, USAGE);
            std::process::exit(1);
        }
    };

    init_logger(args.verbose);
    debug!(?args, expected = EXPECTED_COOK_TIME, "parsed arguments");

    let status = match build_status(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", status);

    if let Some(message) = status.alarm() {
        info!(remaining = status.remaining_minutes, "lasagna is done");
        println!("{}", message);
    }
}
