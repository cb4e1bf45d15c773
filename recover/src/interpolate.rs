//! Lagrange interpolation over the rationals.
//!
//! The polynomial through the points is never materialized. Instead it is
//! evaluated directly as `Σ_i y_i · L_i(x)` where `L_i` is the Lagrange basis
//! polynomial of the i-th point. Each product `y_i · L_i(x)` is accumulated
//! as a single integer fraction and only the sum is done in [`Rational`]s.
//! This costs `O(k²)` big integer multiplications for `k` points.

use num_bigint::BigInt;

use crate::error::Result;
use crate::point::Point;
use crate::rational::Rational;

/// Evaluates the polynomial through the points at zero, i.e. returns its
/// constant term:
/// `Σ_i y_i · Π_{j≠i} x_j / (x_j - x_i)`.
///
/// Fails with [`Error::DivisionByZero`](crate::Error::DivisionByZero) if two
/// points have the same x-coordinate.
pub fn evaluate_at_zero(points: &[&Point]) -> Result<Rational> {
    weighted_sum(points, |pi, pj| (pj.x.clone(), &pj.x - &pi.x))
}

/// Evaluates the polynomial through the points at `x`:
/// `Σ_i y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)`.
///
/// Fails with [`Error::DivisionByZero`](crate::Error::DivisionByZero) if two
/// points have the same x-coordinate.
pub fn evaluate_at(points: &[&Point], x: &BigInt) -> Result<Rational> {
    weighted_sum(points, |pi, pj| (x - &pj.x, &pi.x - &pj.x))
}

/// Computes `Σ_i y_i · Π_{j≠i} num(i, j) / den(i, j)` where `factor` returns
/// the `(num, den)` pair of a single factor of the basis polynomial.
fn weighted_sum<F>(points: &[&Point], factor: F) -> Result<Rational>
where
    F: Fn(&Point, &Point) -> (BigInt, BigInt),
{
    let mut sum = Rational::zero();
    for (i, pi) in points.iter().enumerate() {
        let mut num = pi.y.clone();
        let mut den = BigInt::from(1);
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let (n, d) = factor(pi, pj);
            num *= n;
            den *= d;
        }

        // The denominator is zero iff two x-coordinates coincide.
        sum = sum + Rational::new(num, den)?;
    }

    Ok(sum)
}
