//! Decoding of digit strings in an arbitrary base.

use num_bigint::BigInt;
use num_traits::Zero as _;

use crate::error::{Error, Result};

/// The digit alphabet. The value of a digit is its index.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Parses the base of a value, e.g. `"16"`.
pub fn parse_radix(s: &str) -> Result<u32> {
    let base = s
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidRadix(s.to_owned()))?;
    check_radix(base)?;
    Ok(base)
}

/// Makes sure the base is positive.
///
/// Bases above 36 are fine, only the digits are limited to the alphabet.
pub fn check_radix(base: u32) -> Result<()> {
    if base >= 1 {
        Ok(())
    } else {
        Err(Error::InvalidRadix(base.to_string()))
    }
}

/// Decodes a string of digits in the given base into an integer.
///
/// Digits are `0-9` followed by `a-z` (case-insensitive). Any character that
/// is not in the alphabet or whose value is not smaller than the base is an
/// [`Error::InvalidDigit`]. The empty string is zero.
///
/// ```
/// use num_bigint::BigInt;
/// use recover::radix::decode;
/// assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
/// assert_eq!(decode("Zz", 36).unwrap(), BigInt::from(1295));
/// ```
pub fn decode(digits: &str, base: u32) -> Result<BigInt> {
    check_radix(base)?;

    // Cache the base.
    let b = BigInt::from(base);

    let mut n = BigInt::zero();
    for c in digits.chars() {
        let v = digit_value(c)
            .filter(|v| *v < base)
            .ok_or(Error::InvalidDigit { digit: c, base })?;
        n *= &b;
        n += v;
    }

    Ok(n)
}

/// The value of a single digit or `None` if it isn't in the alphabet.
fn digit_value(c: char) -> Option<u32> {
    let c = u8::try_from(c.to_ascii_lowercase()).ok()?;
    DIGITS.iter().position(|d| *d == c).map(|i| i as u32)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes() {
        assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode("FF", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
        assert_eq!(decode("0", 10).unwrap(), BigInt::from(0));
        assert_eq!(decode("", 10).unwrap(), BigInt::from(0));
    }

    #[test]
    fn decodes_big_numbers() {
        let digits = "123456789012345678901234567890123456789";
        assert_eq!(
            decode(digits, 10).unwrap(),
            digits.parse::<BigInt>().unwrap()
        );
        assert_eq!(
            decode("zzzzzzzzzzzzzzzzzzzz", 36).unwrap(),
            BigInt::parse_bytes(b"zzzzzzzzzzzzzzzzzzzz", 36).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_digits() {
        assert_eq!(
            decode("g", 16),
            Err(Error::InvalidDigit { digit: 'g', base: 16 })
        );
        assert_eq!(
            decode("102", 2),
            Err(Error::InvalidDigit { digit: '2', base: 2 })
        );
        assert_eq!(
            decode("1-2", 10),
            Err(Error::InvalidDigit { digit: '-', base: 10 })
        );
        assert_eq!(
            decode("1ä", 36),
            Err(Error::InvalidDigit { digit: 'ä', base: 36 })
        );
    }

    #[test]
    fn large_bases() {
        assert_eq!(decode("1", 40).unwrap(), BigInt::from(1));
        assert_eq!(decode("z", 64).unwrap(), BigInt::from(35));
        assert_eq!(decode("10", 64).unwrap(), BigInt::from(64));
        assert_eq!(decode("zz", 100).unwrap(), BigInt::from(35 * 100 + 35));
        assert_eq!(
            decode("1_", 64),
            Err(Error::InvalidDigit { digit: '_', base: 64 })
        );
    }

    #[test]
    fn unary_base() {
        assert_eq!(decode("000", 1).unwrap(), BigInt::from(0));
        assert_eq!(decode("1", 1), Err(Error::InvalidDigit { digit: '1', base: 1 }));
    }

    #[test]
    fn radix() {
        assert_eq!(parse_radix("16"), Ok(16));
        assert_eq!(parse_radix(" 2 "), Ok(2));
        assert_eq!(parse_radix("40"), Ok(40));
        assert!(matches!(parse_radix("0"), Err(Error::InvalidRadix(_))));
        assert!(matches!(parse_radix("-2"), Err(Error::InvalidRadix(_))));
        assert!(matches!(parse_radix("hex"), Err(Error::InvalidRadix(_))));
        assert!(matches!(decode("1", 0), Err(Error::InvalidRadix(_))));
    }
}
