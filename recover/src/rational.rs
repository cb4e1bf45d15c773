//! Exact rational numbers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// A fraction of two [`BigInt`]s that is always kept in lowest terms with a
/// positive denominator.
///
/// This is a thin wrapper around [`BigRational`]. `BigRational` already
/// normalizes on construction and after every operation, but it panics on a
/// zero denominator. Here every operation that could produce one returns
/// [`Error::DivisionByZero`] instead.
///
/// Since the representation is canonical, the derived equality is equality of
/// the reduced `(numerator, denominator)` pairs.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Rational(BigRational);

impl Rational {
    /// Creates `num/den` in lowest terms.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(BigRational::new(num, den)))
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is the denominator one?
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns the value as an integer if the denominator is one.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.0.numer().clone())
    }

    /// Returns `1/self`.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Returns `self / rhs`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

/// Implements a binary operator for all combinations of owned and borrowed
/// operands by forwarding to the [`BigRational`] implementation.
macro_rules! impl_binop {
    ($tr:ident, $f:ident) => {
        impl $tr<Rational> for Rational {
            type Output = Rational;

            fn $f(self, rhs: Rational) -> Rational {
                Rational($tr::$f(self.0, rhs.0))
            }
        }

        impl $tr<&Rational> for Rational {
            type Output = Rational;

            fn $f(self, rhs: &Rational) -> Rational {
                Rational($tr::$f(self.0, &rhs.0))
            }
        }

        impl $tr<&Rational> for &Rational {
            type Output = Rational;

            fn $f(self, rhs: &Rational) -> Rational {
                Rational($tr::$f(&self.0, &rhs.0))
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
