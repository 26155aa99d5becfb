//! # Rational numbers
//!
//! Primary way to do exact computation on ratios of integers.
pub use fraction::Fraction;

mod fraction;

/// Aliased type to ease picking an integer width at the use site.
pub type Fraction32 = Fraction<i32>;
/// Aliased type to ease picking an integer width at the use site.
pub type Fraction64 = Fraction<i64>;
/// Aliased type to ease picking an integer width at the use site.
pub type Fraction128 = Fraction<i128>;

/// Read access to the two parts of a ratio.
///
/// There is no mutable access: changing one part in isolation could break the reduced form.
pub trait Rational {
    type Numerator;
    type Denominator;

    fn numerator(&self) -> &Self::Numerator;
    fn denominator(&self) -> &Self::Denominator;
}

#[cfg(test)]
mod test;
