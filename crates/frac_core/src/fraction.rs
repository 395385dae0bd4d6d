//! Fraction data model and lowest-terms reduction.

use std::fmt;

/// A rational number as a raw numerator/denominator pair.
///
/// Fractions are kept exactly as entered or generated; reduction happens on
/// display and on equation results. The denominator is nonzero once a
/// fraction has passed boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns this fraction reduced to lowest terms.
    #[must_use]
    pub fn reduced(&self) -> Fraction {
        let (numerator, denominator) = simplify(self.numerator, self.denominator);
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// gcd(a, b) = b if a == 0, else gcd(b mod a, a).
// The result carries the sign of its arguments; `simplify` fixes the sign
// after division.
fn gcd(a: i64, b: i64) -> i64 {
    if a == 0 {
        b
    } else {
        gcd(b % a, a)
    }
}

/// Reduces a numerator/denominator pair to canonical lowest-terms form.
///
/// For any nonzero denominator the returned denominator is positive, the
/// pair is coprime, and the rational value is unchanged. A zero numerator
/// reduces to `(0, 1)`. Callers guarantee `denominator != 0`.
pub fn simplify(numerator: i64, denominator: i64) -> (i64, i64) {
    debug_assert!(denominator != 0, "simplify requires a nonzero denominator");

    let g = gcd(numerator, denominator);
    let mut numerator = numerator / g;
    let mut denominator = denominator / g;

    if denominator < 0 {
        numerator = -numerator;
        denominator = -denominator;
    }

    (numerator, denominator)
}
