//! Entry point for socktop_rates: `socktop_rates <raw.csv>`.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use socktop_rates::{config, convert_file, RatesError};
use tracing_subscriber::EnvFilter;

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<PathBuf, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "socktop_rates".into());
    let rest: Vec<String> = it.collect();
    match rest.as_slice() {
        [path] => Ok(PathBuf::from(path)),
        _ => Err(format!("usage: {prog} <raw.csv>")),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config::log_filter()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let input = match parse_args(env::args()) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(ExitCode::from(2));
        }
    };
    init_tracing();

    match convert_file(&input, config::extra_gauges()) {
        Ok(out) => {
            println!("Wrote: {}", out.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(RatesError::InsufficientData { .. }) => {
            eprintln!("not enough samples to compute rates (need >= 2)");
            Ok(ExitCode::from(1))
        }
        Err(e) => Err::<ExitCode, _>(e)
            .with_context(|| format!("converting {}", input.display())),
    }
}
