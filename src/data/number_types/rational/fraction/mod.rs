//! # Fractions
//!
//! A ratio of two signed primitive integers, always stored in reduced form.
use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::data::number_types::rational::Rational;
use crate::data::number_types::traits::{Integral, Sign, Signum};
use crate::error::FractionError;

mod ops;
mod with_primitive;

/// Exact ratio `numerator / denominator`.
///
/// Every live value satisfies:
///
/// * `denominator > 0`, the sign lives in the numerator;
/// * `gcd(|numerator|, denominator) == 1`, so zero is stored as `0 / 1`.
///
/// Because the representation is canonical, the derived equality and hash agree with equality of
/// the represented rational values.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub struct Fraction<I = i64> {
    numerator: I,
    denominator: I,
}

impl<I: Integral> Fraction<I> {
    /// Create the reduced representative of `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: I, denominator: I) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            debug!(%numerator, "rejected fraction with a zero denominator");
            return Err(FractionError::DivisionByZero);
        }

        Ok(Self::reduced(numerator, denominator))
    }

    /// Normalize a pair of integers.
    ///
    /// The caller guarantees that `denominator` is nonzero.
    fn reduced(numerator: I, denominator: I) -> Self {
        debug_assert!(!denominator.is_zero());

        // `gcd(0, d) == |d|`, which makes zero end up as `0 / 1`.
        let common_divisor = numerator.gcd(&denominator);
        let numerator = numerator / common_divisor;
        let denominator = denominator / common_divisor;

        if denominator < I::zero() {
            Self { numerator: -numerator, denominator: -denominator }
        } else {
            Self { numerator, denominator }
        }
    }

    /// A whole number, `value / 1`.
    pub fn from_integer(value: I) -> Self {
        Self { numerator: value, denominator: I::one() }
    }

    pub fn numerator(&self) -> I {
        self.numerator
    }

    pub fn denominator(&self) -> I {
        self.denominator
    }

    /// The fraction as an integer part plus a proper remainder, e.g. `"3 + 1/3"` for `10/3`.
    ///
    /// The integer part is the quotient truncated toward zero and the remainder is always written
    /// without a sign, so `-10/3` reads `"-3 + 1/3"` and `-1/3` reads `"1/3"`.
    pub fn as_mixed_number(&self) -> String {
        let (integer_part, remainder) = self.numerator.div_rem(&self.denominator);
        let remainder = remainder.abs();

        if remainder.is_zero() {
            integer_part.to_string()
        } else if integer_part.is_zero() {
            format!("{}/{}", remainder, self.denominator)
        } else {
            format!("{} + {}/{}", integer_part, remainder, self.denominator)
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator }
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when this value is zero.
    pub fn recip(&self) -> Result<Self, FractionError> {
        Self::new(self.denominator, self.numerator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        (self.numerator % self.denominator).is_zero()
    }

    /// Whether the absolute value is strictly less than one.
    pub fn is_proper(&self) -> bool {
        self.numerator.abs() < self.denominator
    }

    /// Whether the reduced numerator is exactly `1`.
    ///
    /// Only positive values qualify: `-1/2` is not a unit fraction.
    pub fn is_unit(&self) -> bool {
        self.numerator.is_one()
    }

    /// Whether the two values differ by a unit fraction.
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        (self - other).abs().is_unit()
    }

    /// Floating point approximation.
    pub fn to_f64(self) -> f64
    where
        f64: From<Self>,
    {
        f64::from(self)
    }
}

impl<I: Integral> Default for Fraction<I> {
    fn default() -> Self {
        Self::from_integer(I::zero())
    }
}

impl<I: Integral> Rational for Fraction<I> {
    type Numerator = I;
    type Denominator = I;

    fn numerator(&self) -> &Self::Numerator {
        &self.numerator
    }

    fn denominator(&self) -> &Self::Denominator {
        &self.denominator
    }
}

impl<I: Integral> Signum for Fraction<I> {
    fn signum(&self) -> Sign {
        match self.numerator.cmp(&I::zero()) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

impl<I: Integral> Ord for Fraction<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        // Compare floored integer parts first, then the reciprocals of the remainders, so no
        // product of the parts is ever formed.
        let (self_integer, self_remainder) = self.numerator.div_mod_floor(&self.denominator);
        let (other_integer, other_remainder) = other.numerator.div_mod_floor(&other.denominator);

        match self_integer.cmp(&other_integer) {
            Ordering::Equal => match (self_remainder.is_zero(), other_remainder.is_zero()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => {
                    // `gcd(denominator, remainder) == gcd(denominator, numerator) == 1` and the
                    // floored remainders are positive, so both reciprocals are in reduced form.
                    let self_reciprocal = Self {
                        numerator: self.denominator,
                        denominator: self_remainder,
                    };
                    let other_reciprocal = Self {
                        numerator: other.denominator,
                        denominator: other_remainder,
                    };
                    self_reciprocal.cmp(&other_reciprocal).reverse()
                }
            },
            ordering => ordering,
        }
    }
}

impl<I: Integral> PartialOrd for Fraction<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Integral> fmt::Display for Fraction<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
