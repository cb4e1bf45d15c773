//! Output formatting of a [`SearchResult`].

use std::fmt;

use itertools::Itertools as _;
use serde::Serialize;

use crate::search::SearchResult;

/// Displays a [`SearchResult`] as two lines: the secret and the
/// comma-separated x-coordinates of the wrong points (or `None`).
///
/// Created by [`SearchResult::report`].
pub struct Report<'a> {
    pub(crate) result: &'a SearchResult,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secret (f(0)) = {}", self.result.secret)?;
        if self.result.wrong_points.is_empty() {
            write!(f, "Wrong Data Points: None")
        } else {
            write!(f, "Wrong Data Points: {}", self.result.wrong_points.iter().format(", "))
        }
    }
}

/// Machine readable form of a [`SearchResult`].
///
/// Numbers are written as decimal strings since they can be arbitrarily
/// large.
#[derive(Serialize, Debug)]
pub struct JsonReport {
    pub secret: String,
    pub wrong_points: Vec<String>,
    pub agreement: usize,
    pub subset: Vec<usize>,
}

impl From<&SearchResult> for JsonReport {
    fn from(r: &SearchResult) -> Self {
        Self {
            secret: r.secret.to_string(),
            wrong_points: r.wrong_points.iter().map(|x| x.to_string()).collect(),
            agreement: r.agreement,
            subset: r.subset.clone(),
        }
    }
}
