//! Decoding of the JSON input record into a [`PointSet`].
//!
//! The record looks like this:
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//! `keys` is reserved. Every other field is a point whose x-coordinate is the
//! (decimal) key and whose y-coordinate is `value` read in base `base`.

use std::io;

use itertools::Itertools as _;
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::point::{Point, PointSet};
use crate::radix;

/// The name of the reserved field.
pub const KEYS_FIELD: &str = "keys";

#[derive(Deserialize)]
struct Keys {
    /// Only reported, so it may be missing or given as a string.
    #[serde(default)]
    n: Option<Value>,
    k: usize,
}

impl Keys {
    fn declared_n(&self) -> Option<usize> {
        match self.n.as_ref()? {
            Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct EncodedValue {
    base: Base,
    value: String,
}

/// The base is usually given as a string, but we accept plain numbers too.
#[derive(Deserialize)]
#[serde(untagged)]
enum Base {
    Text(String),
    Number(u64),
}

impl Base {
    fn radix(&self) -> Result<u32> {
        match self {
            Base::Text(s) => radix::parse_radix(s),
            Base::Number(n) => {
                let b = u32::try_from(*n)
                    .map_err(|_| Error::InvalidRadix(n.to_string()))?;
                radix::check_radix(b)?;
                Ok(b)
            },
        }
    }
}

/// Parses a record from a string.
pub fn parse_str(json: &str) -> Result<PointSet> {
    let record = serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
    from_record(record)
}

/// Parses a record from a reader.
pub fn from_reader<R: io::Read>(reader: R) -> Result<PointSet> {
    let record =
        serde_json::from_reader(reader).map_err(|e| Error::Parse(e.to_string()))?;
    from_record(record)
}

/// Decodes an already parsed record.
///
/// The points are sorted by their x-coordinate, which is the order the
/// search enumerates subsets in. Negative keys and keys of `2^32 - 1` or
/// more are sorted numerically too rather than kept in file order after the
/// others, which can change which of several tied subsets wins.
pub fn from_record(mut record: Map<String, Value>) -> Result<PointSet> {
    let keys = record
        .remove(KEYS_FIELD)
        .ok_or_else(|| Error::Parse(format!("missing `{KEYS_FIELD}` field")))?;
    let keys: Keys = serde_json::from_value(keys)
        .map_err(|e| Error::Parse(format!("`{KEYS_FIELD}`: {e}")))?;

    let mut points = record
        .into_iter()
        .map(|(key, value)| decode_point(&key, value))
        .collect::<Result<Vec<_>>>()?;

    points.sort_by(|a, b| a.x.cmp(&b.x));

    if let Some((p, _)) = points.iter().tuple_windows().find(|(a, b)| a.x == b.x) {
        return Err(Error::Parse(format!("duplicate x-coordinate {}", p.x)));
    }

    let ps = PointSet::new(points, keys.k)?;
    Ok(match keys.declared_n() {
        Some(n) => ps.with_declared_n(n),
        None => ps,
    })
}

/// Decodes a single `"x": { "base": ..., "value": ... }` field.
fn decode_point(key: &str, value: Value) -> Result<Point> {
    let x: BigInt = key
        .parse()
        .map_err(|_| Error::Parse(format!("`{key}` is not an integer x-coordinate")))?;

    let encoded: EncodedValue = serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("point `{key}`: {e}")))?;

    let y = radix::decode(&encoded.value, encoded.base.radix()?)?;
    Ok(Point { x, y })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_record() {
        let ps = parse_str(
            r#"{
                "keys": { "n": 4, "k": 3 },
                "1": { "base": "10", "value": "4" },
                "2": { "base": "2", "value": "111" },
                "3": { "base": "10", "value": "12" },
                "6": { "base": "4", "value": "213" }
            }"#,
        )
        .unwrap();

        assert_eq!(ps.k(), 3);
        assert_eq!(ps.n(), 4);
        assert_eq!(ps.declared_n(), Some(4));
        assert_eq!(
            ps.points(),
            &[
                Point::new(1, 4),
                Point::new(2, 7),
                Point::new(3, 12),
                Point::new(6, 39),
            ]
        );
    }

    #[test]
    fn sorts_numerically() {
        let ps = parse_str(
            r#"{
                "10": { "base": "10", "value": "1" },
                "keys": { "n": 3, "k": 2 },
                "9": { "base": 16, "value": "A" },
                "-1": { "base": "10", "value": "0" }
            }"#,
        )
        .unwrap();

        let xs: Vec<_> = ps.points().iter().map(|p| p.x.clone()).collect();
        assert_eq!(xs, vec![BigInt::from(-1), BigInt::from(9), BigInt::from(10)]);
        assert_eq!(ps.points()[1].y, BigInt::from(10));
    }

    #[test]
    fn malformed() {
        let parse_err = |json: &str| matches!(parse_str(json), Err(Error::Parse(_)));

        assert!(parse_err("not json"));
        assert!(parse_err("[1, 2]"));
        assert!(parse_err(r#"{ "1": { "base": "10", "value": "1" } }"#));
        assert!(parse_err(r#"{ "keys": { "n": 1 } }"#));
        assert!(parse_err(
            r#"{ "keys": { "n": 1, "k": 1 }, "x": { "base": "10", "value": "1" } }"#
        ));
        assert!(parse_err(r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "10" } }"#));
        assert!(parse_err(
            r#"{ "keys": { "n": 2, "k": 1 },
                 "1": { "base": "10", "value": "1" },
                 "01": { "base": "10", "value": "2" } }"#
        ));
    }

    #[test]
    fn propagates_decode_errors() {
        assert_eq!(
            parse_str(r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "16", "value": "g" } }"#)
                .unwrap_err(),
            Error::InvalidDigit { digit: 'g', base: 16 }
        );
        assert!(matches!(
            parse_str(r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "0", "value": "1" } }"#),
            Err(Error::InvalidRadix(_))
        ));
        assert_eq!(
            parse_str(r#"{ "keys": { "n": 1, "k": 0 }, "1": { "base": "10", "value": "1" } }"#)
                .unwrap_err(),
            Error::InvalidThreshold
        );
    }

    #[test]
    fn bases_above_36() {
        let ps = parse_str(
            r#"{
                "keys": { "n": 3, "k": 2 },
                "1": { "base": "40", "value": "1" },
                "2": { "base": "40", "value": "2" },
                "3": { "base": 64, "value": "3" }
            }"#,
        )
        .unwrap();
        assert_eq!(
            ps.points(),
            &[Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
    }

    #[test]
    fn declared_n_is_optional() {
        let point = r#""1": { "base": "10", "value": "1" }"#;

        let ps = parse_str(&format!(r#"{{ "keys": {{ "k": 1 }}, {point} }}"#)).unwrap();
        assert_eq!(ps.declared_n(), None);
        assert_eq!(ps.n(), 1);

        let ps = parse_str(&format!(r#"{{ "keys": {{ "n": "1", "k": 1 }}, {point} }}"#))
            .unwrap();
        assert_eq!(ps.declared_n(), Some(1));

        let ps = parse_str(&format!(r#"{{ "keys": {{ "n": "many", "k": 1 }}, {point} }}"#))
            .unwrap();
        assert_eq!(ps.declared_n(), None);
    }

    #[test]
    fn reader() {
        let json = br#"{ "keys": { "n": 1, "k": 1 }, "5": { "base": "8", "value": "17" } }"#;
        let ps = from_reader(&json[..]).unwrap();
        assert_eq!(ps.points(), &[Point::new(5, 15)]);
    }
}
