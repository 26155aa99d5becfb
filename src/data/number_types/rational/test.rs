macro_rules! test_fraction {
    ($t:ident, $test_module_name:ident, $in_t:ident, $int:ident) => {
        #[allow(unused_imports)]
        mod $test_module_name {
            use itertools::iproduct;
            use num::traits::Pow;
            use num::{Integer, One, Zero};

            use crate::data::number_types::rational::{Fraction32, Fraction64, Fraction128};
            use crate::{F32, F64, F128};
            use crate::FractionError;

            /// Small values of both signs, with and without common factors.
            fn samples() -> Vec<$in_t> {
                iproduct!(-6..=6, 1..=6)
                    .map(|(numerator, denominator)| $t!(numerator, denominator))
                    .collect()
            }

            #[test]
            fn field_identities() {
                for i in -10..0 {
                    assert_eq!($t!(0, i), $in_t::zero());
                }
                for i in 1..10 {
                    assert_eq!($t!(0, i), $in_t::zero());
                }
                for i in -10..0 {
                    assert_eq!($t!(i, i), $in_t::one());
                }
                for i in 1..10 {
                    assert_eq!($t!(i, i), $in_t::one());
                }
            }

            #[test]
            #[should_panic]
            fn panic_divide_zero_by_zero() {
                let _result = $t!(0, 0);
            }

            #[test]
            #[should_panic]
            fn panic_divide_nonzero_by_zero() {
                let _result = $t!(3, 0);
            }

            #[test]
            fn new_zero_denominator() {
                assert_eq!($in_t::new(1, 0), Err(FractionError::DivisionByZero));
            }

            #[test]
            fn reduced_form() {
                for (numerator, denominator) in iproduct!(-12..=12, -12..=12) {
                    if denominator == 0 {
                        continue;
                    }
                    let f = $t!(numerator, denominator);
                    assert!(f.denominator() > 0);
                    assert_eq!(f.numerator().gcd(&f.denominator()), 1);
                    if numerator == 0 {
                        assert_eq!((f.numerator(), f.denominator()), (0, 1));
                    }
                    assert_eq!(
                        f.numerator() as $int * denominator as $int,
                        numerator as $int * f.denominator() as $int,
                    );
                }
            }

            #[test]
            fn eq() {
                assert_eq!($t!(3, 2), $t!(6, 4));
                assert_eq!($t!(0, 2), $t!(0, 5));
                assert_eq!($t!(0, 2), $t!(0));
                assert_eq!($t!(1, 2), $t!(3, 6));
                assert_ne!($t!(1, 2), $t!(-1, 2));
            }

            #[test]
            fn display() {
                assert_eq!($t!(3, 6).to_string(), "1/2");
                assert_eq!($t!(-1, -1).to_string(), "1");
                assert_eq!($t!(2, -9).to_string(), "-2/9");
                assert_eq!($t!(-10, 2).to_string(), "-5");
            }

            #[test]
            fn add() {
                assert_eq!($t!(3, 2) + $t!(6, 4), $t!(3));
                assert_eq!($t!(0, 2) + $t!(0, 5), $t!(0, 3));
                assert_eq!($t!(1, 2) + $t!(5, 8), $t!(9, 8));

                let mut x = $t!(0);
                for _ in 0..100 {
                    x = x + $t!(1);
                }
                assert_eq!(x, $t!(100));
            }

            #[test]
            fn sub() {
                assert_eq!($t!(3, 2) - $t!(6, 4), $t!(0, 9));
                assert_eq!($t!(0, 2) - $t!(0, 5), $t!(0, 3));
                assert_eq!($t!(1, 2) - $t!(5, 8), $t!(-1, 8));
            }

            #[test]
            fn mul() {
                assert_eq!($t!(3, 2) * $t!(6, 4), $t!(9, 4));
                assert_eq!($t!(0, 2) * $t!(0, 5), $t!(0, 3));
                assert_eq!($t!(1, 2) * $t!(5, 8), $t!(5, 16));
            }

            #[test]
            fn div() {
                assert_eq!($t!(3, 2) / $t!(6, 4), $in_t::one());
                assert_eq!($t!(0, 2) / $t!(2, 5), $in_t::zero());
                assert_eq!($t!(1, 2) / $t!(5, 8), $t!(4, 5));
            }

            #[test]
            #[should_panic]
            fn div_zero() {
                let _result = $t!(4564, 65468) / $t!(0, 654654);
            }

            #[test]
            fn pow() {
                assert_eq!($t!(1, 2).pow(7), $t!(1, 128));
                assert_eq!($t!(2, 3).pow(-2), $t!(9, 4));
                assert_eq!($t!(-1, 2).pow(-3), $t!(-8));
            }

            #[test]
            fn to_f64() {
                assert_eq!($t!(1, 2).to_f64(), 0.5);
            }

            #[test]
            fn abs() {
                assert_eq!($t!(1, -2).abs(), $t!(1, 2));
                for f in samples() {
                    assert_eq!(f.abs().abs(), f.abs());
                }
            }

            #[test]
            fn is_adjacent_to() {
                assert!($t!(1, 3).is_adjacent_to(&$t!(1, 4)));
                assert!(!$t!(1, 3).is_adjacent_to(&($t!(2, 3) + $t!(1, 4))));
            }

            #[test]
            fn commutativity() {
                for (a, b) in iproduct!(samples(), samples()) {
                    assert_eq!(a + b, b + a);
                    assert_eq!(a * b, b * a);
                }
            }

            #[test]
            fn associativity() {
                let values = [$t!(1, 2), $t!(-2, 3), $t!(5, 4), $t!(0), $t!(-7, 6)];
                for (&a, &b, &c) in iproduct!(values.iter(), values.iter(), values.iter()) {
                    assert_eq!((a + b) + c, a + (b + c));
                    assert_eq!((a * b) * c, a * (b * c));
                }
            }

            #[test]
            fn identities() {
                for a in samples() {
                    assert_eq!(a + $t!(0, 1), a);
                    assert_eq!(a * $t!(1, 1), a);
                    assert_eq!(a - a, $in_t::zero());
                }
            }

            #[test]
            fn round_trip() {
                for (a, b) in iproduct!(samples(), samples()) {
                    if b.is_zero() {
                        continue;
                    }
                    assert_eq!((a * b) / b, a);
                    assert_eq!((a / b) * b, a);
                }
            }
        }
    };
}

test_fraction!(F32, test_32, Fraction32, i32);
test_fraction!(F64, test_64, Fraction64, i64);
test_fraction!(F128, test_128, Fraction128, i128);
