//! Resolution of command-line flags, config file, and prompt answers into one
//! validated set of run settings.
//!
//! Precedence is prompt answers, then flags, then the config file, then
//! built-in defaults. Everything is validated here, before any computation.

use std::path::PathBuf;

use blastoff_batch::{Coefficients, report::Format};
use blastoff_solvers::Config;

use crate::{
    CliError, Result,
    args::Args,
    config::{CoefficientsConfig, FileConfig},
    prompt::{Answers, rocket_count},
};

/// Report file written when no other path is given.
pub const DEFAULT_REPORT_PATH: &str = "resultado.csv";

const DEFAULT_START: f64 = 0.5;
const DEFAULT_STEP: f64 = 0.5;
const DEFAULT_COUNT: i64 = 6;

/// Validated settings for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub run: Config,
    pub parallel: bool,
    pub coefficients: Coefficients,
    pub output: Option<PathBuf>,
    pub format: Format,
    pub show_bracket: bool,
}

impl Settings {
    /// Merges every source and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance or iteration budget is invalid, the
    /// rocket count is not positive, a coefficient is not finite, the report
    /// separators are ambiguous, or the report precision is out of range.
    pub fn resolve(args: &Args, file: FileConfig, answers: Option<Answers>) -> Result<Self> {
        let defaults = Config::default();
        let FileConfig {
            run,
            coefficients,
            report,
        } = file;

        let (eps, coefficients) = match answers {
            Some(Answers { eps, coefficients }) => (eps, coefficients),
            None => (
                args.eps.or(run.eps).unwrap_or(defaults.eps()),
                resolve_coefficients(args, coefficients)?,
            ),
        };
        let max_iters = args
            .max_iters
            .or(run.max_iters)
            .unwrap_or(defaults.max_iters());
        let run_config = Config::new(eps, max_iters)?;

        coefficients.validate()?;
        if coefficients.is_empty() {
            return Err(CliError::InvalidArgument(
                "at least one rocket is required".to_owned(),
            ));
        }

        let base = Format::default();
        let decimal_separator = if args.decimal_comma {
            ','
        } else {
            report.decimal_separator.unwrap_or(base.decimal_separator())
        };
        let format = Format::new(
            args.separator
                .or(report.field_separator)
                .unwrap_or(base.field_separator()),
            decimal_separator,
            report.precision.unwrap_or(base.precision()),
        )?;

        let output = if args.no_output {
            None
        } else {
            Some(
                args.output
                    .clone()
                    .or(report.path)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            )
        };

        Ok(Self {
            run: run_config,
            parallel: args.parallel || run.parallel.unwrap_or(false),
            coefficients,
            output,
            format,
            show_bracket: args.show_bracket || report.show_bracket.unwrap_or(false),
        })
    }
}

/// Picks the coefficient sequence from flags or the config file.
///
/// Explicit values win over a generated sequence at the same level, and any
/// generated-sequence flag makes the flags win over the file.
fn resolve_coefficients(args: &Args, file: CoefficientsConfig) -> Result<Coefficients> {
    if let Some(values) = &args.values {
        return Ok(Coefficients::Manual(values.clone()));
    }

    let flags_given = args.count.is_some() || args.start.is_some() || args.step.is_some();
    if !flags_given && let Some(values) = file.values {
        return Ok(Coefficients::Manual(values));
    }

    let count = args.count.or(file.count).unwrap_or(DEFAULT_COUNT);
    Ok(Coefficients::Generated {
        start: args.start.or(file.start).unwrap_or(DEFAULT_START),
        step: args.step.or(file.step).unwrap_or(DEFAULT_STEP),
        count: rocket_count(count)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use blastoff_batch::report::FormatError;
    use blastoff_solvers::ConfigError;
    use clap::Parser;

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("blastoff").chain(flags.iter().copied()))
            .expect("valid flags")
    }

    fn file(text: &str) -> FileConfig {
        FileConfig::from_toml(text).expect("valid config")
    }

    #[test]
    fn defaults() {
        let settings = Settings::resolve(&args(&[]), FileConfig::default(), None)
            .expect("valid settings");

        assert_eq!(settings.run, Config::default());
        assert!(!settings.parallel);
        assert_eq!(
            settings.coefficients,
            Coefficients::Generated {
                start: 0.5,
                step: 0.5,
                count: 6
            }
        );
        assert_eq!(settings.output, Some(PathBuf::from(DEFAULT_REPORT_PATH)));
        assert_eq!(settings.format, Format::default());
        assert!(!settings.show_bracket);
    }

    #[test]
    fn flags_override_file() {
        let file = file(
            r#"
            [run]
            eps = 1e-3
            max_iters = 50

            [coefficients]
            start = 2.0
            step = 1.0
            count = 3

            [report]
            path = "from-file.csv"
            decimal_separator = ","
            "#,
        );
        let settings = Settings::resolve(
            &args(&["--eps", "1e-8", "--count", "2", "--output", "cli.csv"]),
            file,
            None,
        )
        .expect("valid settings");

        assert_eq!(settings.run.eps(), 1e-8);
        assert_eq!(settings.run.max_iters(), 50);
        assert_eq!(
            settings.coefficients,
            Coefficients::Generated {
                start: 2.0,
                step: 1.0,
                count: 2
            }
        );
        assert_eq!(settings.output, Some(PathBuf::from("cli.csv")));
        assert_eq!(settings.format, Format::brazilian());
    }

    #[test]
    fn file_values_unless_flags_generate() {
        let text = "[coefficients]\nvalues = [0.5, 3.0]\n";

        let settings = Settings::resolve(&args(&[]), file(text), None).expect("valid settings");
        assert_eq!(settings.coefficients, Coefficients::Manual(vec![0.5, 3.0]));

        let settings =
            Settings::resolve(&args(&["--count", "1"]), file(text), None).expect("valid settings");
        assert_eq!(settings.coefficients.len(), 1);
    }

    #[test]
    fn answers_take_precedence() {
        let answers = Answers {
            eps: 1e-4,
            coefficients: Coefficients::Manual(vec![1.0]),
        };
        let settings = Settings::resolve(
            &args(&["--interactive", "--no-output"]),
            file("[run]\neps = 0.5\n"),
            Some(answers),
        )
        .expect("valid settings");

        assert_eq!(settings.run.eps(), 1e-4);
        assert_eq!(settings.coefficients, Coefficients::Manual(vec![1.0]));
        assert_eq!(settings.output, None);
    }

    #[test]
    fn rejects_invalid_settings() {
        let result = Settings::resolve(&args(&["--eps", "0"]), FileConfig::default(), None);
        assert!(matches!(result, Err(CliError::Run(ConfigError::Eps(_)))));

        let result = Settings::resolve(&args(&["--count", "0"]), FileConfig::default(), None);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));

        let result = Settings::resolve(&args(&["--count", "-3"]), FileConfig::default(), None);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));

        let result = Settings::resolve(
            &args(&["--separator", ","]),
            file("[report]\ndecimal_separator = \",\"\n"),
            None,
        );
        assert!(matches!(result, Err(CliError::Format(_))));

        let result = Settings::resolve(
            &args(&[]),
            file("[coefficients]\nvalues = []\n"),
            None,
        );
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
        let result = Settings::resolve(
            &args(&["--values", "0.5", "--no-output"]),
            file("[report]\nprecision = 70000\n"),
            None,
        );
        assert!(matches!(
            result,
            Err(CliError::Format(FormatError::Precision(70_000)))
        ));

        let result = Settings::resolve(&args(&["--separator", "n"]), FileConfig::default(), None);
        assert!(matches!(
            result,
            Err(CliError::Format(FormatError::ReservedSeparator('n')))
        ));
    }

    #[test]
    fn switches_combine_flags_and_file() {
        let settings = Settings::resolve(
            &args(&["--decimal-comma", "--separator", "\t"]),
            file("[run]\nparallel = true\n[report]\nshow_bracket = true\nprecision = 3\n"),
            None,
        )
        .expect("valid settings");

        assert!(settings.parallel);
        assert!(settings.show_bracket);
        assert_eq!(settings.format.decimal_separator(), ',');
        assert_eq!(settings.format.field_separator(), '\t');
        assert_eq!(settings.format.precision(), 3);
    }
}
