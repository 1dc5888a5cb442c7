//! Interactive prompts for a batch.
//!
//! Asks for the rocket count, the tolerance, and how to define the
//! coefficients: mode `1` generates them from a start and a step, mode `2`
//! reads one value per rocket.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use blastoff_batch::Coefficients;

use crate::{CliError, Result};

/// Answers collected from the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    pub eps: f64,
    pub coefficients: Coefficients,
}

/// Runs the prompt flow, reading answers from `input` and writing questions
/// to `output`.
///
/// A non-positive rocket count or an unknown mode is rejected before any
/// coefficient is read.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Answers> {
    let mut prompter = Prompter { input, output };

    let count: i64 = prompter.ask("Number of rockets (n): ")?;
    let count = rocket_count(count)?;
    let eps: f64 = prompter.ask("Tolerance (epsilon): ")?;

    writeln!(prompter.output)?;
    writeln!(prompter.output, "How should the values of 'a' be defined?")?;
    writeln!(prompter.output, "1 - Generate them (start and step)")?;
    writeln!(prompter.output, "2 - Enter each value")?;
    let mode: i64 = prompter.ask("Option: ")?;

    let coefficients = match mode {
        1 => {
            let start = prompter.ask("Initial value of a: ")?;
            let step = prompter.ask("Step of a: ")?;
            Coefficients::Generated { start, step, count }
        }
        2 => {
            let values = (1..=count)
                .map(|rocket| prompter.ask(&format!("Value of a for rocket {rocket}: ")))
                .collect::<Result<Vec<f64>>>()?;
            Coefficients::Manual(values)
        }
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "unknown input mode {mode}, expected 1 or 2"
            )));
        }
    };

    Ok(Answers { eps, coefficients })
}

/// Converts a rocket count, rejecting zero and negative counts.
pub fn rocket_count(count: i64) -> Result<usize> {
    usize::try_from(count)
        .ok()
        .filter(|&count| count > 0)
        .ok_or_else(|| {
            CliError::InvalidArgument(format!("rocket count must be positive, got {count}"))
        })
}

struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn ask<T: FromStr>(&mut self, question: &str) -> Result<T> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InvalidArgument(format!(
                "input ended before an answer to {:?}",
                question.trim_end_matches([':', ' '])
            )));
        }

        let answer = line.trim();
        answer.parse().map_err(|_| {
            CliError::InvalidArgument(format!("{answer:?} is not a valid answer to {question:?}"))
        })
    }
}
