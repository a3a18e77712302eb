//! Numerical differentiation and integration.
//!
//! Derivatives use the symmetric difference quotient
//!
//! ```text
//! f'(x) ≈ (f(x + h) - f(x - h)) / 2h
//! ```
//!
//! and integrals use the composite midpoint rule. Together they let us check
//! the fundamental theorem of calculus numerically: for
//! `F(x) = ∫₀ˣ f(t) dt`, the derivative `F'(x)` must agree with `f(x)`.
//!
//! # Example
//!
//! ```
//! use numlab_analysis::calculus::{derivative, integral};
//!
//! let d = derivative(|x: f64| x * x, 3.0, 1e-6);
//! assert!((d - 6.0).abs() < 1e-6);
//!
//! let area = integral(|x: f64| x * x, 0.0, 3.0, 10_000).unwrap();
//! assert!((area - 9.0).abs() < 1e-6);
//! ```

use numlab_core::{
    error::{NumError, Result},
    numerical::is_close,
    types::Scalar,
    Tolerances,
};
use tracing::{debug, instrument};

/// Symmetric difference quotient of `f` at `x` with step `h`.
pub fn derivative<T, F>(f: F, x: T, h: T) -> T
where
    T: Scalar,
    F: Fn(T) -> T,
{
    (f(x + h) - f(x - h)) / (h + h)
}

/// [`derivative`] with the configured step `tolerances.derivative_step`.
pub fn derivative_default<T, F>(f: F, x: T, tolerances: &Tolerances) -> T
where
    T: Scalar,
    F: Fn(T) -> T,
{
    derivative(f, x, <T as Scalar>::from_f64(tolerances.derivative_step))
}

/// Composite midpoint rule for `∫ₐᵇ f(t) dt` over `n` sub-intervals.
///
/// Returns exactly zero when `a == b`. For `b < a` the step is negative and
/// the result is the negated integral over `[b, a]`.
pub fn integral<T, F>(f: F, a: T, b: T, n: usize) -> Result<T>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    if n == 0 {
        return Err(NumError::invalid_input(
            "midpoint rule needs at least one sub-interval",
        ));
    }
    if a == b {
        return Ok(T::zero());
    }

    let h = (b - a) / <T as Scalar>::from_usize(n);
    let half = <T as Scalar>::from_f64(0.5);

    // Neumaier compensated summation; the FTC check differentiates this
    // sum, so rounding noise would be amplified by 1/2h.
    let mut sum = T::zero();
    let mut compensation = T::zero();
    for i in 0..n {
        let mid = a + (<T as Scalar>::from_usize(i) + half) * h;
        let term = f(mid);
        let t = sum + term;
        if sum.abs() >= term.abs() {
            compensation = compensation + ((sum - t) + term);
        } else {
            compensation = compensation + ((term - t) + sum);
        }
        sum = t;
    }

    Ok((sum + compensation) * h)
}

/// Outcome of a fundamental-theorem check at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FtcReport<T> {
    /// Point at which the check was made.
    pub x: T,
    /// Numerical `d/dx ∫₀ˣ f(t) dt`.
    pub derivative_of_integral: T,
    /// `f(x)`.
    pub integrand_value: T,
    /// Whether the two agree within the relative tolerance.
    pub passed: bool,
}

/// Verify `d/dx ∫₀ˣ f(t) dt = f(x)` numerically.
///
/// The integral uses `tolerances.integration_intervals` sub-intervals, the
/// derivative uses `tolerances.derivative_step`, and agreement is judged
/// with `tolerances.relative_tolerance`.
#[instrument(skip(f, tolerances))]
pub fn verify_fundamental_theorem<T, F>(f: F, x: T, tolerances: &Tolerances) -> Result<FtcReport<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    tolerances.validate()?;
    let n = tolerances.integration_intervals;
    let h = <T as Scalar>::from_f64(tolerances.derivative_step);

    // The integral is fallible, so the quotient is formed here rather
    // than through `derivative`.
    let upper = integral(&f, T::zero(), x + h, n)?;
    let lower = integral(&f, T::zero(), x - h, n)?;
    let derivative_of_integral = (upper - lower) / (h + h);
    let integrand_value = f(x);

    let passed = is_close(
        derivative_of_integral,
        integrand_value,
        <T as Scalar>::from_f64(tolerances.relative_tolerance),
        T::zero(),
    );

    debug!(
        derivative = derivative_of_integral.as_f64(),
        value = integrand_value.as_f64(),
        passed,
        "fundamental theorem check"
    );

    Ok(FtcReport {
        x,
        derivative_of_integral,
        integrand_value,
        passed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derivative_polynomial() {
        let d = derivative(|x: f64| x.powi(3), 2.0, 1e-5);
        assert_relative_eq!(d, 12.0, epsilon = 1e-8);
    }

    #[test]
    fn test_derivative_trig() {
        let x = std::f64::consts::FRAC_PI_3;
        let d = derivative(f64::sin, x, 1e-6);
        assert_relative_eq!(d, x.cos(), epsilon = 1e-9);
    }

    #[test]
    fn test_derivative_default_step() {
        let tol = Tolerances::default();
        assert_relative_eq!(derivative_default(f64::exp, 1.0, &tol), std::f64::consts::E, max_relative = 1e-7);
    }

    #[test]
    fn test_integral_exact_for_linear() {
        // Midpoint rule is exact for affine integrands.
        let v = integral(|t: f64| 2.0 * t + 1.0, 0.0, 4.0, 7).unwrap();
        assert_relative_eq!(v, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_integral_degenerate_interval() {
        assert_eq!(integral(|t: f64| t.exp(), 1.5, 1.5, 10).unwrap(), 0.0);
    }

    #[test]
    fn test_integral_reversed_bounds() {
        let forward = integral(|t: f64| t * t, 0.0, 2.0, 1_000).unwrap();
        let backward = integral(|t: f64| t * t, 2.0, 0.0, 1_000).unwrap();
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn test_integral_rejects_zero_intervals() {
        assert!(matches!(
            integral(|t: f64| t, 0.0, 1.0, 0),
            Err(NumError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_ftc_square() {
        let report = verify_fundamental_theorem(|x: f64| x * x, 3.0, &Tolerances::default()).unwrap();
        assert!(report.passed);
        assert_relative_eq!(report.integrand_value, 9.0);
        assert_relative_eq!(report.derivative_of_integral, 9.0, max_relative = 1e-5);
    }

    #[test]
    fn test_ftc_sine() {
        let x = std::f64::consts::FRAC_PI_4;
        let report = verify_fundamental_theorem(f64::sin, x, &Tolerances::default()).unwrap();
        assert!(report.passed);
    }
}
