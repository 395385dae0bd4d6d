//! Parsers for fraction (`3/4`) and expression (`1/2+3/4`) entry.
//!
//! All spaces are stripped before parsing, so `1/2 + 3/4` and `1/2+3/4` are
//! the same entry. Operands are unsigned `digits/digits`; signs never appear
//! in user entry because the accepted range is positive.

use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::map_res;
use nom::sequence::separated_pair;
use nom::IResult;

use frac_core::{Fraction, Op};

use crate::error::ParseError;

/// Exclusive validity bounds for fraction terms.
///
/// Each term must lie strictly between its min and max. The default lower
/// bound of 0 rejects zero numerators, which is what keeps a zero-valued
/// divisor out of the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_numerator: i64,
    pub max_numerator: i64,
    pub min_denominator: i64,
    pub max_denominator: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_numerator: 0,
            max_numerator: 100,
            min_denominator: 0,
            max_denominator: 100,
        }
    }
}

impl Bounds {
    /// A fraction is valid iff both terms lie strictly inside the bounds.
    pub fn validate(&self, fraction: &Fraction) -> Result<(), ParseError> {
        let valid = fraction.numerator > self.min_numerator
            && fraction.numerator < self.max_numerator
            && fraction.denominator > self.min_denominator
            && fraction.denominator < self.max_denominator;
        if valid {
            Ok(())
        } else {
            Err(ParseError::OutOfRange {
                numerator: fraction.numerator,
                denominator: fraction.denominator,
            })
        }
    }
}

fn integer(input: &str) -> IResult<&str, i64> {
    map_res(digit1, str::parse)(input)
}

fn fraction(input: &str) -> IResult<&str, Fraction> {
    let (rest, (numerator, denominator)) =
        separated_pair(integer, tag("/"), integer)(input)?;
    Ok((rest, Fraction::new(numerator, denominator)))
}

fn strip_spaces(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses a `digits/digits` fraction entry and validates it against `bounds`.
pub fn parse_fraction(input: &str, bounds: &Bounds) -> Result<Fraction, ParseError> {
    let cleaned = strip_spaces(input);
    let (rest, parsed) = fraction(&cleaned).map_err(|_| ParseError::Malformed)?;
    if !rest.is_empty() {
        return Err(ParseError::UnconsumedInput(rest.to_string()));
    }
    bounds.validate(&parsed)?;
    Ok(parsed)
}

/// Parses `<fraction> <operator> <fraction>` with operator one of `+ - * /`.
///
/// Both operands are validated independently; the operator must come from
/// the four-element alphabet.
pub fn parse_expression(
    input: &str,
    bounds: &Bounds,
) -> Result<(Fraction, Op, Fraction), ParseError> {
    let cleaned = strip_spaces(input);

    let (rest, operand1) = fraction(&cleaned).map_err(|_| ParseError::Malformed)?;

    let mut chars = rest.chars();
    let symbol = chars.next().ok_or(ParseError::Malformed)?;
    let op = Op::from_char(symbol).map_err(|_| ParseError::InvalidOperator(symbol))?;

    let (rest, operand2) = fraction(chars.as_str()).map_err(|_| ParseError::Malformed)?;
    if !rest.is_empty() {
        return Err(ParseError::UnconsumedInput(rest.to_string()));
    }

    bounds.validate(&operand1)?;
    bounds.validate(&operand2)?;
    Ok((operand1, op, operand2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fraction() {
        let bounds = Bounds::default();
        assert_eq!(parse_fraction("3/4", &bounds), Ok(Fraction::new(3, 4)));
        assert_eq!(parse_fraction(" 3 / 4 ", &bounds), Ok(Fraction::new(3, 4)));
    }

    #[test]
    fn test_parse_fraction_rejects_malformed() {
        let bounds = Bounds::default();
        assert_eq!(parse_fraction("abc", &bounds), Err(ParseError::Malformed));
        assert_eq!(parse_fraction("3", &bounds), Err(ParseError::Malformed));
        assert_eq!(
            parse_fraction("3/4x", &bounds),
            Err(ParseError::UnconsumedInput("x".to_string()))
        );
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let bounds = Bounds::default();
        assert_eq!(
            parse_fraction("0/2", &bounds),
            Err(ParseError::OutOfRange {
                numerator: 0,
                denominator: 2
            })
        );
        assert_eq!(
            parse_fraction("100/2", &bounds),
            Err(ParseError::OutOfRange {
                numerator: 100,
                denominator: 2
            })
        );
        assert!(parse_fraction("99/99", &bounds).is_ok());
        assert!(parse_fraction("1/1", &bounds).is_ok());
    }

    #[test]
    fn test_parse_expression() {
        let bounds = Bounds::default();
        let (f1, op, f2) = parse_expression("1/2+3/4", &bounds).unwrap();
        assert_eq!(f1, Fraction::new(1, 2));
        assert_eq!(op, Op::Add);
        assert_eq!(f2, Fraction::new(3, 4));

        // Spaces anywhere in the entry are stripped.
        let (f1, op, f2) = parse_expression(" 1/2 - 3/4 ", &bounds).unwrap();
        assert_eq!(f1, Fraction::new(1, 2));
        assert_eq!(op, Op::Sub);
        assert_eq!(f2, Fraction::new(3, 4));
    }

    #[test]
    fn test_parse_expression_rejects_unknown_operator() {
        let bounds = Bounds::default();
        assert_eq!(
            parse_expression("1/2%3/4", &bounds),
            Err(ParseError::InvalidOperator('%'))
        );
    }

    // A zero-valued divisor cannot reach the engine: the exclusive lower
    // bound rejects the operand before evaluation.
    #[test]
    fn test_zero_numerator_divisor_is_rejected() {
        let bounds = Bounds::default();
        assert_eq!(
            parse_expression("1/2/0/3", &bounds),
            Err(ParseError::OutOfRange {
                numerator: 0,
                denominator: 3
            })
        );
    }
}
