//! Exhaustive search for the polynomial that agrees with the most points.
//!
//! This tries every `k`-element subset of the `n` points, so the cost is
//! `C(n, k)` interpolations, each of which is evaluated at all `n` points
//! (`O(n·k²)` big integer operations). That is exponential in general and
//! nothing here tries to be smarter about it.

use itertools::Itertools as _;
use num_bigint::BigInt;

use crate::combinations::Combinations;
use crate::error::{Error, Result};
use crate::interpolate::{evaluate_at, evaluate_at_zero};
use crate::point::{Point, PointSet};
use crate::rational::Rational;
use crate::report::Report;

/// Options for [`search_with`].
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Stop as soon as a subset agrees with every point.
    ///
    /// A later subset would have to agree with strictly more points to
    /// replace it, which is impossible, so this only changes
    /// [`SearchResult::subsets_scored`].
    pub stop_on_unanimous: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { stop_on_unanimous: true }
    }
}

/// How a single subset's polynomial fares against all points.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Score {
    /// The constant term of the polynomial.
    pub secret: Rational,

    /// The number of points that lie on the polynomial.
    pub agreement: usize,

    /// The x-coordinates of the points that don't, in point order.
    pub wrong_points: Vec<BigInt>,
}

/// The outcome of a search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    /// The constant term of the best polynomial.
    /// This is not necessarily an integer.
    pub secret: Rational,

    /// The x-coordinates of the points that disagree with the best polynomial.
    pub wrong_points: Vec<BigInt>,

    /// The indices of the subset that defined the best polynomial.
    pub subset: Vec<usize>,

    /// The number of points that agree with the best polynomial.
    pub agreement: usize,

    /// How many subsets were scored.
    pub subsets_scored: usize,
}

impl SearchResult {
    /// Returns a struct that can be used to display the result.
    pub fn report(&self) -> Report<'_> {
        Report { result: self }
    }
}

/// Scores the polynomial through `subset` against `points`.
///
/// A point agrees if the polynomial evaluates to exactly its y-coordinate
/// there, in particular the value has to be an integer.
pub fn score(subset: &[&Point], points: &[Point]) -> Result<Score> {
    let secret = evaluate_at_zero(subset)?;

    let mut agreement = 0;
    let mut wrong_points = Vec::new();
    for p in points {
        let v = evaluate_at(subset, &p.x)?;
        if v.is_integer() && v.numer() == &p.y {
            agreement += 1;
        } else {
            wrong_points.push(p.x.clone());
        }
    }

    Ok(Score { secret, agreement, wrong_points })
}

/// Searches with the default [`SearchConfig`].
pub fn search(points: &PointSet) -> Result<SearchResult> {
    search_with(points, &SearchConfig::default())
}

/// Finds the `k`-element subset whose polynomial agrees with the most points.
///
/// Subsets are tried in the order of [`Combinations`] and a subset only
/// replaces the current best one if it agrees with strictly more points, so
/// among equally good subsets the first one wins.
///
/// Fails with [`Error::InsufficientPoints`] if there are no points or fewer
/// than `k`. Two points with the same x-coordinate fail with
/// [`Error::DivisionByZero`] before anything is scored, since some subset
/// would contain both. Any error during interpolation aborts the search.
pub fn search_with(points: &PointSet, cfg: &SearchConfig) -> Result<SearchResult> {
    let n = points.n();
    let k = points.k();
    let insufficient = || Error::InsufficientPoints { points: n, threshold: k };
    if points.is_empty() || k > n {
        return Err(insufficient());
    }

    // Only subsets with `k >= 2` can contain two of the points.
    if k >= 2 && points.points().iter().map(|p| &p.x).duplicates().next().is_some() {
        return Err(Error::DivisionByZero);
    }

    let mut best: Option<(Vec<usize>, Score)> = None;
    let mut subsets_scored = 0;
    for indices in Combinations::new(n, k) {
        let s = score(&points.subset(&indices), points.points())?;
        subsets_scored += 1;

        if best.as_ref().is_none_or(|(_, b)| s.agreement > b.agreement) {
            best = Some((indices, s));
        }

        if cfg.stop_on_unanimous && best.as_ref().is_some_and(|(_, b)| b.agreement == n) {
            break;
        }
    }

    // There is at least one subset since `1 <= k <= n`.
    let (subset, best) = best.ok_or_else(insufficient)?;

    Ok(SearchResult {
        secret: best.secret,
        wrong_points: best.wrong_points,
        subset,
        agreement: best.agreement,
        subsets_scored,
    })
}
