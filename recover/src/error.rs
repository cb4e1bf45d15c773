//! Error types shared by the whole crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input record does not have the expected structure.
    #[error("malformed input: {0}")]
    Parse(String),

    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("unsupported base: {0}")]
    InvalidRadix(String),

    /// A zero denominator, either directly or through two points with the
    /// same x-coordinate.
    #[error("division by zero")]
    DivisionByZero,

    #[error("not enough points to reconstruct (need {threshold}, got {points})")]
    InsufficientPoints { points: usize, threshold: usize },

    #[error("threshold k must be at least 1")]
    InvalidThreshold,
}

pub type Result<T> = std::result::Result<T, Error>;
