//! # Arithmetic
//!
//! Every result goes through the reducing constructor; operands are never modified.
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::traits::Pow;
use num::{One, Zero};
use tracing::debug;

use crate::data::number_types::traits::Integral;
use crate::error::FractionError;

use super::Fraction;

impl<I: Integral> Fraction<I> {
    /// Quotient `self / rhs`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `rhs` is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, FractionError> {
        if rhs.numerator.is_zero() {
            debug!(dividend = %self, "rejected division by zero");
            return Err(FractionError::DivisionByZero);
        }

        Ok(Self::reduced(self.numerator * rhs.denominator, self.denominator * rhs.numerator))
    }

    /// Integer power, where a negative exponent raises the reciprocal.
    ///
    /// Anything to the power zero, zero included, is one.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when raising zero to a negative power.
    pub fn try_pow(self, exponent: i32) -> Result<Self, FractionError> {
        let base = if exponent < 0 {
            self.recip()?
        } else {
            self
        };
        let exponent = exponent.unsigned_abs() as usize;

        Ok(Self::reduced(
            num::pow(base.numerator, exponent),
            num::pow(base.denominator, exponent),
        ))
    }
}

fn add<I: Integral>(lhs: Fraction<I>, rhs: Fraction<I>) -> Fraction<I> {
    Fraction::reduced(
        lhs.numerator * rhs.denominator + rhs.numerator * lhs.denominator,
        lhs.denominator * rhs.denominator,
    )
}

fn sub<I: Integral>(lhs: Fraction<I>, rhs: Fraction<I>) -> Fraction<I> {
    Fraction::reduced(
        lhs.numerator * rhs.denominator - rhs.numerator * lhs.denominator,
        lhs.denominator * rhs.denominator,
    )
}

fn mul<I: Integral>(lhs: Fraction<I>, rhs: Fraction<I>) -> Fraction<I> {
    Fraction::reduced(lhs.numerator * rhs.numerator, lhs.denominator * rhs.denominator)
}

fn div<I: Integral>(lhs: Fraction<I>, rhs: Fraction<I>) -> Fraction<I> {
    lhs.try_div(rhs).unwrap_or_else(|error| panic!("{}", error))
}

macro_rules! define_binary_operator {
    ($trait_name:ident, $method:ident) => {
        impl<I: Integral> $trait_name for Fraction<I> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $method(self, rhs)
            }
        }

        impl<I: Integral> $trait_name<&Fraction<I>> for Fraction<I> {
            type Output = Self;

            fn $method(self, rhs: &Fraction<I>) -> Self::Output {
                $method(self, *rhs)
            }
        }

        impl<I: Integral> $trait_name<Fraction<I>> for &Fraction<I> {
            type Output = Fraction<I>;

            fn $method(self, rhs: Fraction<I>) -> Self::Output {
                $method(*self, rhs)
            }
        }

        impl<I: Integral> $trait_name<&Fraction<I>> for &Fraction<I> {
            type Output = Fraction<I>;

            fn $method(self, rhs: &Fraction<I>) -> Self::Output {
                $method(*self, *rhs)
            }
        }
    }
}

define_binary_operator!(Add, add);
define_binary_operator!(Sub, sub);
define_binary_operator!(Mul, mul);
// Panics on a zero divisor, like the primitive integers do. Use `try_div` to handle it instead.
define_binary_operator!(Div, div);

impl<I: Integral> Neg for Fraction<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { numerator: -self.numerator, denominator: self.denominator }
    }
}

impl<I: Integral> Neg for &Fraction<I> {
    type Output = Fraction<I>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

/// Panics when raising zero to a negative power, see `try_pow`.
impl<I: Integral> Pow<i32> for Fraction<I> {
    type Output = Self;

    fn pow(self, exponent: i32) -> Self::Output {
        self.try_pow(exponent).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl<I: Integral> Pow<i32> for &Fraction<I> {
    type Output = Fraction<I>;

    fn pow(self, exponent: i32) -> Self::Output {
        Pow::pow(*self, exponent)
    }
}

impl<I: Integral> Zero for Fraction<I> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<I: Integral> One for Fraction<I> {
    fn one() -> Self {
        Self::from_integer(I::one())
    }
}

impl<I: Integral> Sum for Fraction<I> {
    fn sum<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::zero(), add)
    }
}

impl<'a, I: Integral> Sum<&'a Fraction<I>> for Fraction<I> {
    fn sum<It: Iterator<Item = &'a Self>>(iter: It) -> Self {
        iter.copied().sum()
    }
}

impl<I: Integral> Product for Fraction<I> {
    fn product<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::one(), mul)
    }
}

impl<'a, I: Integral> Product<&'a Fraction<I>> for Fraction<I> {
    fn product<It: Iterator<Item = &'a Self>>(iter: It) -> Self {
        iter.copied().product()
    }
}
