//! Fixed-width console table of a batch.

use std::fmt::Write;

use crate::{CaseResult, Method};

const COEFFICIENT_WIDTH: usize = 10;
const ROOT_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 10;
const BRACKET_WIDTH: usize = 26;
const PRECISION: usize = 6;

/// Renders results as a right-aligned table with a ruled header.
///
/// Roots are written with a `.` decimal point and six decimals, undefined
/// roots as `nan`. With `show_bracket`, a final column shows the bracket
/// every method started from, or `[N/A, N/A]` when none was found.
#[must_use]
pub fn render(results: &[CaseResult], show_bracket: bool) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:>COEFFICIENT_WIDTH$}", "a");
    for method in Method::ALL {
        let name = method.short_name();
        let _ = write!(
            out,
            "{:>ROOT_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
            format!("{name}Root"),
            format!("{name}Iter"),
            format!("{name}Exp"),
        );
    }
    if show_bracket {
        let _ = write!(out, "{:>BRACKET_WIDTH$}", "Bracket");
    }
    out.push('\n');

    let width = out.len() - 1;
    out.push_str(&"-".repeat(width));
    out.push('\n');

    for result in results {
        let _ = write!(
            out,
            "{:>COEFFICIENT_WIDTH$.PRECISION$}",
            result.coefficient
        );
        for method in Method::ALL {
            let outcome = result.outcome(method);
            let root = outcome
                .root
                .map_or_else(|| "nan".to_owned(), |root| format!("{root:.PRECISION$}"));
            let _ = write!(
                out,
                "{root:>ROOT_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
                outcome.iters,
                outcome.classification().token(),
            );
        }
        if show_bracket {
            let bracket = match result.bracket {
                Some(bracket) => format!(
                    "[{:.PRECISION$}, {:.PRECISION$}]",
                    bracket.low(),
                    bracket.high()
                ),
                None => "[N/A, N/A]".to_owned(),
            };
            let _ = write!(out, "{bracket:>BRACKET_WIDTH$}");
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use blastoff_solvers::Config;

    use crate::run;

    #[test]
    fn header_and_rule_only_for_empty_batch() {
        let table = render(&[], false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 10 + 4 * (12 + 10 + 10));
        assert!(lines[0].trim_start().starts_with("a"));
        assert!(lines[0].ends_with("NRNExp"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[1].len(), lines[0].len());
    }

    #[test]
    fn rows_are_fixed_width() {
        let results = run(&[0.5, 3.0, -1.0], &Config::default());
        let table = render(&results, false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(line.len(), 138);
        }

        assert!(lines[2].starts_with("  0.500000    1.648722"));
        // Bisection runs out of iterations for a = 3 with the default budget.
        assert_eq!(&lines[3][10..32], "         nan        20");
        assert!(lines[3].ends_with("True"));
        assert!(lines[4].ends_with("null"));
    }

    #[test]
    fn optional_bracket_column() {
        let results = run(&[3.0, -1.0], &Config::default());
        let table = render(&results, true);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].ends_with("Bracket"));
        assert!(lines[2].ends_with("[1.000000, 32.000000]"));
        assert!(lines[3].ends_with("[N/A, N/A]"));
        assert_eq!(lines[2].len(), lines[3].len());
    }
}
