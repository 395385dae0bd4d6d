use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed fraction, expected digits/digits")]
    Malformed,
    #[error("invalid operator: {0}")]
    InvalidOperator(char),
    #[error("fraction {numerator}/{denominator} outside the accepted range")]
    OutOfRange { numerator: i64, denominator: i64 },
    #[error("unconsumed input: {0}")]
    UnconsumedInput(String),
}
