//! Enumeration of all `k`-element subsets of `0..n`.

use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::Zero as _;

/// Iterator over all `k`-element subsets of `0..n` as strictly increasing
/// index vectors, in lexicographic order.
///
/// This works like an odometer: the rightmost index that can still move is
/// incremented and all indices after it are reset to the smallest values
/// they can take. E.g. for `n = 4`, `k = 2`:
/// `[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]`.
///
/// There are no subsets if `k > n`, and exactly one (the empty one) if
/// `k = 0`.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    state: State,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    /// `indices` holds the first subset which hasn't been returned yet.
    First,
    /// `indices` holds the subset that was returned last.
    Running,
    Done,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let state = if k > n { State::Done } else { State::First };
        Self { n, indices: (0..k).collect(), state }
    }

    /// The number of subsets, i.e. `n choose k`.
    pub fn count_total(n: usize, k: usize) -> BigUint {
        if k > n {
            return BigUint::zero();
        }
        num_integer::binomial(BigUint::from(n), BigUint::from(k))
    }

    /// Advances `indices` to the next subset.
    /// Returns false if there is none.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();

        // The largest value index `i` can take is `n - k + i`.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::First => self.state = State::Running,
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            },
        }

        Some(self.indices.clone())
    }
}

impl FusedIterator for Combinations {}
