use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Find where each rocket's thrust vanishes, with four root-finding methods.
///
/// For every coefficient `a`, solves `a·d − d·ln(d) = 0` by bisection, false
/// position, and Newton-Raphson with analytic and numeric derivatives, then
/// flags the rockets whose root exceeds 2.
#[derive(Debug, Parser)]
#[command(name = "blastoff", version, about)]
pub struct Args {
    /// Convergence tolerance.
    #[arg(long)]
    pub eps: Option<f64>,

    /// Iteration budget per method.
    #[arg(long)]
    pub max_iters: Option<usize>,

    /// Number of rockets in a generated sequence.
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// First coefficient of a generated sequence.
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Increment between generated coefficients.
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<f64>,

    /// Explicit coefficients, comma-separated.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with_all = ["count", "start", "step"]
    )]
    pub values: Option<Vec<f64>>,

    /// Report file to write.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the table without writing a report file.
    #[arg(long, conflicts_with = "output")]
    pub no_output: bool,

    /// Write the report with a decimal comma.
    #[arg(long)]
    pub decimal_comma: bool,

    /// Report field separator.
    #[arg(long)]
    pub separator: Option<char>,

    /// Add the starting bracket to the console table.
    #[arg(long)]
    pub show_bracket: bool,

    /// Run coefficients on all cores.
    #[arg(long)]
    pub parallel: bool,

    /// Ask for the rocket count, tolerance, and coefficients on the terminal.
    #[arg(long, short, conflicts_with_all = ["values", "count", "start", "step", "eps"])]
    pub interactive: bool,

    /// TOML config file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log more (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
