//! Coefficient sequences for a batch.

use thiserror::Error;

/// Errors that can occur when validating a coefficient sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("start must be finite, got {0}")]
    Start(f64),

    #[error("step must be finite, got {0}")]
    Step(f64),

    #[error("coefficient {index} must be finite, got {value}")]
    Value { index: usize, value: f64 },
}

/// The coefficients `a` to study, one per rocket.
#[derive(Debug, Clone, PartialEq)]
pub enum Coefficients {
    /// An arithmetic sequence `start + i·step` for `i` in `0..count`.
    Generated { start: f64, step: f64, count: usize },
    /// Values entered one by one.
    Manual(Vec<f64>),
}

impl Coefficients {
    /// Checks that every coefficient will be finite.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first non-finite start, step, or value.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Coefficients::Generated { start, step, .. } => {
                if !start.is_finite() {
                    return Err(Error::Start(*start));
                }
                if !step.is_finite() {
                    return Err(Error::Step(*step));
                }
                Ok(())
            }
            Coefficients::Manual(values) => values
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite())
                .map_or(Ok(()), |(index, &value)| {
                    Err(Error::Value { index, value })
                }),
        }
    }

    /// Returns the number of coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Coefficients::Generated { count, .. } => *count,
            Coefficients::Manual(values) => values.len(),
        }
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the sequence.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match self {
            Coefficients::Generated { start, step, count } => {
                (0..*count).map(|i| start + i as f64 * step).collect()
            }
            Coefficients::Manual(values) => values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn generates_arithmetic_sequence() {
        let coefficients = Coefficients::Generated {
            start: 0.5,
            step: 0.25,
            count: 4,
        };
        let values = coefficients.values();

        assert_eq!(values.len(), 4);
        for (value, expected) in values.iter().zip([0.5, 0.75, 1.0, 1.25]) {
            assert_relative_eq!(*value, expected);
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let coefficients = Coefficients::Generated {
            start: 1.0,
            step: 1.0,
            count: 0,
        };
        assert!(coefficients.is_empty());
        assert!(coefficients.values().is_empty());
        assert_eq!(coefficients.validate(), Ok(()));
    }

    #[test]
    fn manual_values_pass_through() {
        let coefficients = Coefficients::Manual(vec![3.0, -1.0]);
        assert_eq!(coefficients.len(), 2);
        assert_eq!(coefficients.values(), vec![3.0, -1.0]);
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let generated = Coefficients::Generated {
            start: f64::INFINITY,
            step: 1.0,
            count: 3,
        };
        assert!(matches!(generated.validate(), Err(Error::Start(_))));

        let generated = Coefficients::Generated {
            start: 0.0,
            step: f64::NAN,
            count: 3,
        };
        assert!(matches!(generated.validate(), Err(Error::Step(_))));

        let manual = Coefficients::Manual(vec![1.0, f64::NAN, 2.0]);
        assert!(matches!(
            manual.validate(),
            Err(Error::Value { index: 1, .. })
        ));
    }
}
