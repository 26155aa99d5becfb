//! # Interactions with fixed size integers
use std::convert::From;
use std::ops::{Add, Div, Mul, Sub};

use num::One;

use super::Fraction;

macro_rules! define_interactions {
    ($t:ident, $module:ident) => {
        mod $module {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for Fraction<$t> {
                    fn from(value: $t) -> Self {
                        Self::from_integer(value)
                    }
                }

                impl From<&$t> for Fraction<$t> {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for Fraction<$t> {
                    fn eq(&self, other: &$t) -> bool {
                        self.denominator.is_one() && self.numerator == *other
                    }
                }
            }

            mod conversion {
                use super::*;

                impl From<Fraction<$t>> for f64 {
                    fn from(value: Fraction<$t>) -> Self {
                        value.numerator as f64 / value.denominator as f64
                    }
                }

                impl From<&Fraction<$t>> for f64 {
                    fn from(value: &Fraction<$t>) -> Self {
                        Self::from(*value)
                    }
                }
            }

            mod field {
                use super::*;

                impl Add<$t> for Fraction<$t> {
                    type Output = Self;

                    fn add(self, rhs: $t) -> Self::Output {
                        Self::reduced(self.numerator + rhs * self.denominator, self.denominator)
                    }
                }

                impl Sub<$t> for Fraction<$t> {
                    type Output = Self;

                    fn sub(self, rhs: $t) -> Self::Output {
                        Self::reduced(self.numerator - rhs * self.denominator, self.denominator)
                    }
                }

                impl Mul<$t> for Fraction<$t> {
                    type Output = Self;

                    fn mul(self, rhs: $t) -> Self::Output {
                        Self::reduced(self.numerator * rhs, self.denominator)
                    }
                }

                /// Panics on a zero divisor.
                impl Div<$t> for Fraction<$t> {
                    type Output = Self;

                    fn div(self, rhs: $t) -> Self::Output {
                        self / Self::from_integer(rhs)
                    }
                }
            }
        }
    }
}

define_interactions!(i8, with_i8);
define_interactions!(i16, with_i16);
define_interactions!(i32, with_i32);
define_interactions!(i64, with_i64);
define_interactions!(i128, with_i128);
define_interactions!(isize, with_isize);
