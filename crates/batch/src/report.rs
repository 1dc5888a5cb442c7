//! Delimited text report of a batch.
//!
//! One header row, then one row per coefficient: the coefficient followed by
//! root, iteration count, and classification token for each [`Method`] in
//! report order. Numbers use a fixed number of decimals and the decimal
//! separator given by [`Format`]. Undefined roots render as `nan`.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use thiserror::Error;
use tracing::info;

use crate::{CaseResult, Method};

/// Errors that can occur when validating a report format.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("field and decimal separators must differ, both are {0:?}")]
    SameSeparators(char),

    #[error("separator {0:?} is a letter, digit, sign, or line break")]
    ReservedSeparator(char),

    #[error("precision must be at most 17 decimals, got {0}")]
    Precision(usize),
}

/// Largest number of decimals a [`Format`] accepts.
pub const MAX_PRECISION: usize = 17;

/// How numbers and fields are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    field_separator: char,
    decimal_separator: char,
    precision: usize,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            field_separator: ';',
            decimal_separator: '.',
            precision: 6,
        }
    }
}

impl Format {
    /// Creates a new format with validated separators and precision.
    ///
    /// # Errors
    ///
    /// Returns an error if the separators are equal, if either one could be
    /// mistaken for part of a number, a token, or a row break, or if
    /// `precision` exceeds [`MAX_PRECISION`].
    pub fn new(
        field_separator: char,
        decimal_separator: char,
        precision: usize,
    ) -> Result<Self, FormatError> {
        for separator in [field_separator, decimal_separator] {
            if separator.is_alphanumeric() || matches!(separator, '-' | '+' | '\n' | '\r') {
                return Err(FormatError::ReservedSeparator(separator));
            }
        }
        if field_separator == decimal_separator {
            return Err(FormatError::SameSeparators(field_separator));
        }
        if precision > MAX_PRECISION {
            return Err(FormatError::Precision(precision));
        }

        Ok(Self {
            field_separator,
            decimal_separator,
            precision,
        })
    }

    /// Semicolon-delimited with a decimal comma, as spreadsheets in
    /// comma-decimal locales expect.
    #[must_use]
    pub fn brazilian() -> Self {
        Self {
            field_separator: ';',
            decimal_separator: ',',
            precision: 6,
        }
    }

    /// Returns the field separator.
    #[must_use]
    pub fn field_separator(&self) -> char {
        self.field_separator
    }

    /// Returns the decimal separator.
    #[must_use]
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Returns the number of decimals written for real values.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Formats a real value with fixed decimals and the decimal separator.
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        if value.is_nan() {
            return "nan".to_owned();
        }
        let text = format!("{value:.*}", self.precision);
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// Formats a root that may be undefined.
    #[must_use]
    pub fn root(&self, root: Option<f64>) -> String {
        self.number(root.unwrap_or(f64::NAN))
    }
}

/// Returns the header row fields.
#[must_use]
pub fn header() -> Vec<String> {
    let mut fields = vec!["a".to_owned()];
    for method in Method::ALL {
        let name = method.name();
        fields.push(format!("{name}Root"));
        fields.push(format!("{name}Iter"));
        fields.push(format!("{name}Explode"));
    }
    fields
}

/// Returns the fields of one result row.
#[must_use]
pub fn row(result: &CaseResult, format: &Format) -> Vec<String> {
    let mut fields = vec![format.number(result.coefficient)];
    for method in Method::ALL {
        let outcome = result.outcome(method);
        fields.push(format.root(outcome.root));
        fields.push(outcome.iters.to_string());
        fields.push(outcome.classification().token().to_owned());
    }
    fields
}

/// Writes the header and one row per result.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report<W: Write>(
    mut writer: W,
    results: &[CaseResult],
    format: &Format,
) -> io::Result<()> {
    let separator = format.field_separator().to_string();
    writeln!(writer, "{}", header().join(&separator))?;
    for result in results {
        writeln!(writer, "{}", row(result, format).join(&separator))?;
    }
    writer.flush()
}

/// Creates (or truncates) the file at `path` and writes the report to it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save(path: &Path, results: &[CaseResult], format: &Format) -> io::Result<()> {
    let file = File::create(path)?;
    write_report(BufWriter::new(file), results, format)?;
    info!(path = %path.display(), rows = results.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use blastoff_solvers::Config;

    use crate::run;

    fn render(results: &[CaseResult], format: &Format) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, results, format).expect("write to memory");
        String::from_utf8(buffer).expect("utf-8 report")
    }

    #[test]
    fn header_has_thirteen_columns() {
        let header = header();
        assert_eq!(header.len(), 13);
        assert_eq!(header[0], "a");
        assert_eq!(header[1], "BisectionRoot");
        assert_eq!(header[12], "NewtonNumericExplode");
    }

    #[test]
    fn empty_batch_writes_header_only() {
        let text = render(&[], &Format::default());
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("a;BisectionRoot;BisectionIter;BisectionExplode;"));
    }

    #[test]
    fn formats_numbers_with_separator() {
        let format = Format::brazilian();
        assert_eq!(format.number(1.105_164), "1,105164");
        assert_eq!(format.number(-3.0), "-3,000000");
        assert_eq!(format.root(None), "nan");
        assert_eq!(Format::default().number(20.085_536_923), "20.085537");
    }

    #[test]
    fn writes_one_row_per_coefficient() {
        let results = run(&[0.5, -1.0], &Config::default());
        let text = render(&results, &Format::brazilian());
        let rows: Vec<Vec<&str>> = text
            .lines()
            .skip(1)
            .map(|line| line.split(';').collect())
            .collect();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|fields| fields.len() == 13));

        // a = 0.5 converges to e^0.5 ≈ 1.648721 for every method.
        assert_eq!(rows[0][0], "0,500000");
        assert!(rows[0][1].starts_with("1,6487"));
        assert_eq!(rows[0][3], "False");
        assert_eq!(rows[0][12], "False");

        // a = -1 has no bracket.
        assert_eq!(rows[1][0], "-1,000000");
        for method in 0..4 {
            assert_eq!(rows[1][1 + 3 * method], "nan");
            assert_eq!(rows[1][2 + 3 * method], "0");
            assert_eq!(rows[1][3 + 3 * method], "null");
        }
    }

    #[test]
    fn rejects_ambiguous_separators() {
        assert_eq!(
            Format::new(',', ',', 6),
            Err(FormatError::SameSeparators(','))
        );
        assert_eq!(
            Format::new('-', '.', 6),
            Err(FormatError::ReservedSeparator('-'))
        );
        assert_eq!(Format::new('\t', ',', 3).map(|f| f.precision()), Ok(3));
    }

    #[test]
    fn rejects_letters_that_appear_in_tokens() {
        for separator in ['n', 'a', 'T', 'F', 'l', 'e', 'é'] {
            assert_eq!(
                Format::new(separator, '.', 6),
                Err(FormatError::ReservedSeparator(separator))
            );
        }
        assert_eq!(
            Format::new(';', 'u', 6),
            Err(FormatError::ReservedSeparator('u'))
        );
    }

    #[test]
    fn bounds_precision() {
        assert_eq!(
            Format::new(';', '.', MAX_PRECISION).map(|f| f.precision()),
            Ok(MAX_PRECISION)
        );
        assert_eq!(
            Format::new(';', '.', 70_000),
            Err(FormatError::Precision(70_000))
        );

        let format = Format::new(';', ',', MAX_PRECISION).expect("valid format");
        assert_eq!(format.number(1.5), "1,50000000000000000");
    }
}
