//! # Traits
//!
//! Properties shared by the exact number types.
use std::fmt::{Debug, Display};

use num::Integer;

/// Signed primitive integers that can back a fraction.
pub trait Integral: Integer + num::Signed + Copy + Display + Debug {}

impl<T> Integral for T
where
    T: Integer + num::Signed + Copy + Display + Debug,
{
}

/// Sign of a number, including zero.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// Numbers that can report their sign without being compared to zero.
pub trait Signum {
    fn signum(&self) -> Sign;

    fn is_positive(&self) -> bool {
        self.signum() == Sign::Positive
    }

    fn is_negative(&self) -> bool {
        self.signum() == Sign::Negative
    }
}
