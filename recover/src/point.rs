//! Points and the set of points a secret is reconstructed from.

use std::fmt;

use num_bigint::BigInt;

use crate::error::{Error, Result};

/// A point `(x, y)` on the (possibly corrupted) polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The ordered points together with the threshold `k`, the number of points
/// needed to determine a polynomial of degree `k-1`.
///
/// The order of the points is the order subsets are enumerated in and thus
/// decides ties in the search.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    k: usize,

    /// The `n` the input claimed to have, if it came from one.
    declared_n: Option<usize>,
}

impl PointSet {
    /// Creates a point set. The threshold has to be at least one.
    ///
    /// The points are not checked for duplicate x-coordinates. A subset
    /// containing two of them makes the interpolation fail with
    /// [`Error::DivisionByZero`], and so does searching the whole set.
    pub fn new(points: Vec<Point>, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(Self { points, k, declared_n: None })
    }

    /// Records the number of points the input declared.
    pub fn with_declared_n(mut self, n: usize) -> Self {
        self.declared_n = Some(n);
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The threshold.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The actual number of points.
    pub fn n(&self) -> usize {
        self.points.len()
    }

    pub fn declared_n(&self) -> Option<usize> {
        self.declared_n
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points at the given indices.
    ///
    /// Panics if an index is out of bounds.
    pub fn subset(&self, indices: &[usize]) -> Vec<&Point> {
        indices.iter().map(|&i| &self.points[i]).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_threshold() {
        assert_eq!(
            PointSet::new(vec![Point::new(1, 1)], 0).unwrap_err(),
            Error::InvalidThreshold
        );
    }

    #[test]
    fn subset() {
        let ps = PointSet::new(
            vec![Point::new(1, 10), Point::new(2, 20), Point::new(3, 30)],
            2,
        )
        .unwrap()
        .with_declared_n(3);

        assert_eq!(ps.n(), 3);
        assert_eq!(ps.k(), 2);
        assert_eq!(ps.declared_n(), Some(3));

        let s = ps.subset(&[0, 2]);
        assert_eq!(s, vec![&Point::new(1, 10), &Point::new(3, 30)]);
        assert_eq!(s[1].to_string(), "(3, 30)");
    }
}
