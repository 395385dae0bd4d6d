//! Fraction arithmetic core.
//!
//! The data model (`Fraction`, `Op`, `Equation`), the Euclidean GCD reducer,
//! and the two-operand evaluation engine. Input validation lives in
//! `frac_parser`; storage lives in `frac_session`. This crate trusts that any
//! fraction it is handed has a nonzero denominator.

pub mod engine;
pub mod fraction;

pub use engine::{evaluate, Equation, EvalError, Op};
pub use fraction::{simplify, Fraction};

#[cfg(test)]
mod property_tests;
