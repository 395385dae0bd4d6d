//! Two-operand evaluation over fractions.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::fraction::{simplify, Fraction};

/// The four recognized operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Maps an operator symbol to its `Op`, rejecting anything outside the
    /// four-element alphabet.
    pub fn from_char(c: char) -> Result<Self, EvalError> {
        match c {
            '+' => Ok(Op::Add),
            '-' => Ok(Op::Sub),
            '*' => Ok(Op::Mul),
            '/' => Ok(Op::Div),
            other => Err(EvalError::InvalidOperator(other)),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors from operator conversion and evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("invalid operator: {0}")]
    InvalidOperator(char),
    /// Dividing by a zero-valued fraction would give the raw result a zero
    /// denominator. Unreachable through the input boundary, whose lower
    /// bound excludes a zero numerator.
    #[error("division by zero-valued fraction {0}")]
    DivisionByZero(Fraction),
}

/// Applies `op` to two operands and reduces the result to lowest terms.
///
/// Operands are trusted to have nonzero denominators (the boundary
/// validates them before they reach the engine).
pub fn evaluate(operand1: Fraction, op: Op, operand2: Fraction) -> Result<Fraction, EvalError> {
    if op == Op::Div && operand2.is_zero() {
        return Err(EvalError::DivisionByZero(operand2));
    }

    let (n1, d1) = (operand1.numerator, operand1.denominator);
    let (n2, d2) = (operand2.numerator, operand2.denominator);

    let (numerator, denominator) = match op {
        Op::Add => (n1 * d2 + n2 * d1, d1 * d2),
        Op::Sub => (n1 * d2 - n2 * d1, d1 * d2),
        Op::Mul => (n1 * n2, d1 * d2),
        Op::Div => (n1 * d2, d1 * n2),
    };

    let (numerator, denominator) = simplify(numerator, denominator);
    let result = Fraction::new(numerator, denominator);
    debug!(%operand1, %op, %operand2, %result, "evaluated expression");
    Ok(result)
}

/// Two operands, an operator, and the computed result.
///
/// Built only by [`Equation::evaluate`]; the result is populated exactly
/// once, before the equation is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub operand1: Fraction,
    pub op: Op,
    pub operand2: Fraction,
    pub result: Fraction,
}

impl Equation {
    pub fn evaluate(operand1: Fraction, op: Op, operand2: Fraction) -> Result<Self, EvalError> {
        let result = evaluate(operand1, op, operand2)?;
        Ok(Self {
            operand1,
            op,
            operand2,
            result,
        })
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.operand1, self.op, self.operand2, self.result
        )
    }
}
