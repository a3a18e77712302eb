//! Numerical comparison and rounding helpers.
//!
//! Verifications throughout the workspace compare computed values against
//! expected ones with the same semantics: two values are close when their
//! difference is within an absolute tolerance, or within a relative
//! tolerance of the larger magnitude.

use crate::types::Scalar;

/// Whether `a` and `b` agree within `rel_tol` relative or `abs_tol` absolute
/// tolerance.
///
/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`. Infinities compare
/// equal only to themselves; NaN is never close to anything.
pub fn is_close<T: Scalar>(a: T, b: T, rel_tol: T, abs_tol: T) -> bool {
    approx::relative_eq!(a, b, epsilon = abs_tol, max_relative = rel_tol)
}

/// Round `x` to `digits` decimal places, mapping negative zero to zero.
pub fn round_to_digits<T: Scalar>(x: T, digits: u32) -> T {
    let scale = <T as Scalar>::from_f64(10f64.powi(digits as i32));
    normalize_zero((x * scale).round() / scale)
}

/// Map `-0.0` to `0.0` so rounded values hash and print consistently.
pub fn normalize_zero<T: Scalar>(x: T) -> T {
    if x == T::zero() {
        T::zero()
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_close() {
        assert!(is_close(1.0, 1.0 + 1e-10, 1e-9, 0.0));
        assert!(!is_close(1.0, 1.001, 1e-9, 0.0));
        assert!(is_close(0.0, 1e-12, 1e-9, 1e-9));
        assert!(!is_close(0.0, 1e-12, 1e-9, 0.0));
        assert!(!is_close(f64::NAN, f64::NAN, 1.0, 1.0));
        assert!(is_close(9.0_f32, 9.000_001, 1e-5, 0.0));
    }

    #[test]
    fn test_round_to_digits() {
        assert_eq!(round_to_digits(1.999_999_999_9, 6), 2.0);
        assert_eq!(round_to_digits(-0.000_000_1, 6), 0.0);
        assert!(round_to_digits(-0.000_000_1_f64, 6).is_sign_positive());
        assert_eq!(round_to_digits(2.345_678_9, 2), 2.35);
    }

    #[test]
    fn test_normalize_zero() {
        assert!(normalize_zero(-0.0f64).is_sign_positive());
        assert_eq!(normalize_zero(-2.5f64), -2.5);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn is_close_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6, rel in 0.0f64..0.1) {
                prop_assert_eq!(is_close(a, b, rel, 1e-12), is_close(b, a, rel, 1e-12));
            }

            #[test]
            fn rounding_is_idempotent(x in -1e4f64..1e4, digits in 0u32..8) {
                let once = round_to_digits(x, digits);
                prop_assert_eq!(round_to_digits(once, digits), once);
            }
        }
    }
}
