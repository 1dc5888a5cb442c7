use std::fmt;

/// The root-finding methods run for every coefficient, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Bisection,
    FalsePosition,
    NewtonAnalytic,
    NewtonNumeric,
}

impl Method {
    /// Every method, in the order reports list them.
    pub const ALL: [Method; 4] = [
        Method::Bisection,
        Method::FalsePosition,
        Method::NewtonAnalytic,
        Method::NewtonNumeric,
    ];

    /// Returns the position of this method in [`Method::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Method::Bisection => 0,
            Method::FalsePosition => 1,
            Method::NewtonAnalytic => 2,
            Method::NewtonNumeric => 3,
        }
    }

    /// Returns the name used in report headers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisection => "Bisection",
            Method::FalsePosition => "FalsePosition",
            Method::NewtonAnalytic => "NewtonAnalytic",
            Method::NewtonNumeric => "NewtonNumeric",
        }
    }

    /// Returns the abbreviation used in console table headers.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Method::Bisection => "Bis",
            Method::FalsePosition => "FP",
            Method::NewtonAnalytic => "NRA",
            Method::NewtonNumeric => "NRN",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_report_order() {
        for (position, method) in Method::ALL.into_iter().enumerate() {
            assert_eq!(method.index(), position);
        }
    }
}
