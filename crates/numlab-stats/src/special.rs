//! Log-gamma, log-beta and the regularized incomplete beta function.

use numlab_core::{
    error::{NumError, Result},
    types::{constants, Scalar},
};

/// Lanczos shift `g`.
const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients for `g = 7`, `n = 9`.
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Continued-fraction iteration cap.
const MAX_ITER: usize = 200;

fn lanczos_sum<T: Scalar>(z: T) -> T {
    LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(<T as Scalar>::from_f64(LANCZOS_COEFFS[0]), |sum, (i, &c)| {
            sum + <T as Scalar>::from_f64(c) / (z + <T as Scalar>::from_usize(i + 1))
        })
}

/// `ln Γ(x)` by the Lanczos approximation.
///
/// Uses the reflection formula below 0.5. Non-positive integers are poles
/// and return `+∞`.
pub fn ln_gamma<T: Scalar>(x: T) -> T {
    let one = T::one();
    let half = <T as Scalar>::from_f64(0.5);

    if x.is_nan() {
        return x;
    }
    if x <= T::zero() && x == x.floor() {
        return T::infinity();
    }
    if x < half {
        // Γ(x) Γ(1 - x) = π / sin(πx)
        let pi = constants::pi::<T>();
        return (pi / (pi * x).sin().abs()).ln() - ln_gamma(one - x);
    }

    let z = x - one;
    let t = z + <T as Scalar>::from_f64(LANCZOS_G) + half;
    half * constants::tau::<T>().ln() + (z + half) * t.ln() - t + lanczos_sum(z).ln()
}

/// `ln B(a, b) = ln Γ(a) + ln Γ(b) - ln Γ(a + b)`.
pub fn ln_beta<T: Scalar>(a: T, b: T) -> T {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// # Errors
///
/// `DomainError` unless `a > 0`, `b > 0` and `0 ≤ x ≤ 1`;
/// `ConvergenceFailure` if the continued fraction does not settle.
pub fn beta_inc<T: Scalar>(a: T, b: T, x: T) -> Result<T> {
    let zero = T::zero();
    let one = T::one();

    if !(a > zero && b > zero) {
        return Err(NumError::domain_error(format!(
            "beta_inc needs a, b > 0, got a = {a}, b = {b}"
        )));
    }
    if !(x >= zero && x <= one) {
        return Err(NumError::domain_error(format!(
            "beta_inc needs 0 <= x <= 1, got {x}"
        )));
    }
    if x == zero || x == one {
        return Ok(x);
    }

    // The fraction converges fast for x < (a + 1) / (a + b + 2); use the
    // symmetry I_x(a, b) = 1 - I_{1-x}(b, a) on the other side.
    let two = one + one;
    if x > (a + one) / (a + b + two) {
        Ok(one - beta_continued_fraction(b, a, one - x)?)
    } else {
        beta_continued_fraction(a, b, x)
    }
}

/// Modified Lentz evaluation of the incomplete beta continued fraction.
fn beta_continued_fraction<T: Scalar>(a: T, b: T, x: T) -> Result<T> {
    let one = T::one();
    let two = one + one;
    let tiny = <T as Scalar>::from_f64(1e-30);
    let clamp = |v: T| if v.abs() < tiny { tiny } else { v };

    let prefix = (a * x.ln() + b * (one - x).ln() - ln_beta(a, b)).exp() / a;

    let mut c = one;
    let mut d = one / clamp(one - (a + b) * x / (a + one));
    let mut f = d;

    for m in 1..=MAX_ITER {
        let fm = <T as Scalar>::from_usize(m);
        let m2 = two * fm;

        let even = fm * (b - fm) * x / ((a - one + m2) * (a + m2));
        d = one / clamp(one + even * d);
        c = clamp(one + even / c);
        f = f * d * c;

        let odd = -((a + fm) * (a + b + fm) * x) / ((a + m2) * (a + one + m2));
        d = one / clamp(one + odd * d);
        c = clamp(one + odd / c);
        let delta = d * c;
        f = f * delta;

        if (delta - one).abs() <= two * T::EPSILON {
            return Ok(prefix * f);
        }
    }

    Err(NumError::convergence_failure(MAX_ITER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ln_gamma_known_values() {
        assert_relative_eq!(ln_gamma(1.0), 0.0, epsilon = 1e-13);
        assert_relative_eq!(ln_gamma(5.0), 24f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(ln_gamma(0.5), 0.572_364_942_924_700_4, epsilon = 1e-12);
        assert_relative_eq!(ln_gamma(10.5), 13.940_625_219_403_763, epsilon = 1e-10);
        assert_relative_eq!(ln_gamma(100.0), 359.134_205_369_575_4, epsilon = 1e-8);
    }

    #[test]
    fn test_ln_gamma_poles_and_reflection() {
        assert!(ln_gamma(0.0f64).is_infinite());
        assert!(ln_gamma(-3.0f64).is_infinite());
        // |Γ(-0.5)| = 2√π
        assert_relative_eq!(
            ln_gamma(-0.5),
            (2.0 * std::f64::consts::PI.sqrt()).ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_beta_inc_endpoints_and_symmetry() {
        assert_eq!(beta_inc(2.0, 3.0, 0.0).unwrap(), 0.0);
        assert_eq!(beta_inc(2.0, 3.0, 1.0).unwrap(), 1.0);
        assert_relative_eq!(beta_inc(1.0, 1.0, 0.3).unwrap(), 0.3, epsilon = 1e-14);
        let x = 0.37;
        assert_relative_eq!(
            beta_inc(2.5, 4.0, x).unwrap(),
            1.0 - beta_inc(4.0, 2.5, 1.0 - x).unwrap(),
            epsilon = 1e-13
        );
    }

    #[test]
    fn test_beta_inc_closed_form() {
        // I_x(a, 1) = x^a
        assert_relative_eq!(beta_inc(3.0, 1.0, 0.6).unwrap(), 0.216, epsilon = 1e-13);
        assert_relative_eq!(
            beta_inc(2.0, 0.5, 2.0 / 3.0).unwrap(),
            0.230_199_641_079_641_9,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_beta_inc_domain() {
        assert!(matches!(
            beta_inc(0.0, 1.0, 0.5),
            Err(NumError::DomainError { .. })
        ));
        assert!(beta_inc(1.0, 1.0, 1.5).is_err());
        assert!(beta_inc(1.0, 1.0, f64::NAN).is_err());
    }
}
