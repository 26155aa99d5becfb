//! # Exact rational arithmetic
//!
//! Fractions are kept in lowest terms with a positive denominator at all times, so two values
//! compare equal exactly when their stored fields do.
pub mod data;
pub mod error;

pub use data::number_types::rational::{Fraction, Fraction128, Fraction32, Fraction64};
pub use error::FractionError;

/// Shorthand for creating a fraction in tests and demonstrations.
///
/// Panics when the denominator is zero, or when an argument doesn't fit in `i64`.
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::F!($value, 1)
    };
    ($numer:expr, $denom:expr) => {
        $crate::__fraction_of_width!(i64, $numer, $denom)
    };
}

/// Shorthand for creating a `Fraction32`.
#[macro_export]
macro_rules! F32 {
    ($value:expr) => {
        $crate::F32!($value, 1)
    };
    ($numer:expr, $denom:expr) => {
        $crate::__fraction_of_width!(i32, $numer, $denom)
    };
}

/// Shorthand for creating a `Fraction64`.
#[macro_export]
macro_rules! F64 {
    ($value:expr) => {
        $crate::F64!($value, 1)
    };
    ($numer:expr, $denom:expr) => {
        $crate::__fraction_of_width!(i64, $numer, $denom)
    };
}

/// Shorthand for creating a `Fraction128`.
#[macro_export]
macro_rules! F128 {
    ($value:expr) => {
        $crate::F128!($value, 1)
    };
    ($numer:expr, $denom:expr) => {
        $crate::__fraction_of_width!(i128, $numer, $denom)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fraction_of_width {
    ($int:ty, $numer:expr, $denom:expr) => {
        $crate::Fraction::<$int>::new(
            <$int as ::std::convert::TryFrom<_>>::try_from($numer)
                .unwrap_or_else(|error| panic!("numerator out of range: {}", error)),
            <$int as ::std::convert::TryFrom<_>>::try_from($denom)
                .unwrap_or_else(|error| panic!("denominator out of range: {}", error)),
        )
        .unwrap_or_else(|error| panic!("{}", error))
    };
}
