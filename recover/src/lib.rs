//! Error-tolerant reconstruction of the constant term of a polynomial from a
//! set of points, some of which may be corrupted.
//!
//! Every subset of `k` points determines a unique polynomial of degree `k-1`.
//! We try all of them, count how many of the `n` points each polynomial
//! reproduces exactly and report the constant term of the best one together
//! with the points that disagree with it.
//!
//! All arithmetic is exact ([`rational::Rational`] over [`num_bigint::BigInt`]),
//! so agreement is decided by equality and never by a tolerance.

pub mod combinations;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod point;
pub mod radix;
pub mod rational;
pub mod report;
pub mod search;

pub use error::{Error, Result};
pub use point::{Point, PointSet};
pub use rational::Rational;
pub use search::{SearchConfig, SearchResult, search, search_with};
