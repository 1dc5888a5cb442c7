//! `blastoff`: batch root finding for rocket thrust coefficients.
//!
//! Resolves settings from flags, an optional TOML file, and optional prompts,
//! runs every method for every coefficient, prints a table to stdout, and
//! writes the delimited report.

mod args;
mod config;
mod error;
mod logging;
mod prompt;
mod settings;

use std::{io, process::ExitCode};

use blastoff_batch::{Classification, Method, report, run, run_parallel, table};
use clap::Parser;
use tracing::info;

use crate::{args::Args, config::FileConfig, settings::Settings};

pub use error::{CliError, Result};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<()> {
    let file = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let answers = if args.interactive {
        Some(prompt::ask(&mut io::stdin().lock(), &mut io::stdout())?)
    } else {
        None
    };
    let settings = Settings::resolve(args, file, answers)?;

    let coefficients = settings.coefficients.values();
    info!(
        rockets = coefficients.len(),
        eps = settings.run.eps(),
        max_iters = settings.run.max_iters(),
        parallel = settings.parallel,
        "starting batch"
    );

    let results = if settings.parallel {
        run_parallel(&coefficients, &settings.run)
    } else {
        run(&coefficients, &settings.run)
    };

    println!();
    print!("{}", table::render(&results, settings.show_bracket));

    if let Some(path) = &settings.output {
        report::save(path, &results, &settings.format)?;
    }

    let exploded = results
        .iter()
        .filter(|result| {
            Method::ALL
                .iter()
                .any(|&method| result.outcome(method).classification() == Classification::Exploded)
        })
        .count();
    info!(rockets = results.len(), exploded, "batch finished");

    Ok(())
}
