use std::fmt;

/// Roots above this value explode.
pub const EXPLOSION_THRESHOLD: f64 = 2.0;

/// Whether a method's root makes the rocket explode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The root is defined and greater than [`EXPLOSION_THRESHOLD`].
    Exploded,
    /// The root is defined and at most [`EXPLOSION_THRESHOLD`].
    Contained,
    /// No root: the bracket search failed or the method did not converge.
    Undefined,
}

impl Classification {
    /// Classifies a root that may be undefined.
    #[must_use]
    pub fn of(root: Option<f64>) -> Self {
        match root {
            None => Classification::Undefined,
            Some(r) if r > EXPLOSION_THRESHOLD => Classification::Exploded,
            Some(_) => Classification::Contained,
        }
    }

    /// Returns the report token: `True`, `False`, or `null`.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Classification::Exploded => "True",
            Classification::Contained => "False",
            Classification::Undefined => "null",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
