//! Polynomial root finding.
//!
//! Three approaches, from closed form to general:
//!
//! - [`quadratic_roots`]: the quadratic formula with a complex square root of
//!   the discriminant, so real and complex roots come out of the same path.
//! - [`cubic_roots`]: Cardano's method on the depressed cubic.
//! - [`polynomial_roots`]: eigenvalues of the companion matrix, for any
//!   degree.
//!
//! Closed-form solvers take coefficients from the highest degree down
//! (`a x² + b x + c`); [`polynomial_roots`] and [`evaluate_polynomial`] take
//! them in ascending order (`c₀ + c₁x + … + cₙxⁿ`).

use nalgebra::DMatrix;
use num_complex::Complex;
use numlab_core::{
    error::{NumError, Result},
    types::Scalar,
};
use tracing::{debug, warn};

/// Roots of `a x² + b x + c = 0`.
///
/// # Errors
///
/// Returns `InvalidInput` when `a == 0`.
pub fn quadratic_roots<T: Scalar>(a: T, b: T, c: T) -> Result<[Complex<T>; 2]> {
    if a == T::zero() {
        return Err(NumError::invalid_input(
            "leading coefficient of a quadratic must be non-zero",
        ));
    }

    let two = <T as Scalar>::from_f64(2.0);
    let four = <T as Scalar>::from_f64(4.0);
    let discriminant = Complex::new(b * b - four * a * c, T::zero());
    let sqrt_d = discriminant.sqrt();
    let minus_b = Complex::new(-b, T::zero());
    let denom = two * a;

    Ok([(minus_b + sqrt_d) / denom, (minus_b - sqrt_d) / denom])
}

/// Roots of `a x³ + b x² + c x + d = 0` by Cardano's method.
///
/// With `x = t - b/3a` the cubic becomes `t³ + pt + q = 0`. Writing
/// `t = u + v` with `uv = -p/3` gives `u³` and `v³` as the roots of a
/// quadratic; the three solutions are `u + v`, `uω + vω²` and `uω² + vω`
/// where `ω` is a primitive cube root of unity.
///
/// A zero leading coefficient degrades to the quadratic (two roots) or
/// linear (one root) equation.
///
/// # Errors
///
/// Returns `InvalidInput` when every coefficient but `d` is zero.
pub fn cubic_roots<T: Scalar>(a: T, b: T, c: T, d: T) -> Result<Vec<Complex<T>>> {
    let zero = T::zero();
    if a == zero {
        return lower_degree_roots(b, c, d);
    }

    let two = <T as Scalar>::from_f64(2.0);
    let three = <T as Scalar>::from_f64(3.0);
    let four = <T as Scalar>::from_f64(4.0);
    let nine = <T as Scalar>::from_f64(9.0);
    let twenty_seven = <T as Scalar>::from_f64(27.0);

    let p = (three * a * c - b * b) / (three * a * a);
    let q = (two * b * b * b - nine * a * b * c + twenty_seven * a * a * d)
        / (twenty_seven * a * a * a);
    let delta = q * q / four + p * p * p / twenty_seven;

    let sqrt_delta = Complex::new(delta, zero).sqrt();
    let half_q = Complex::new(-q / two, zero);
    let mut u3 = half_q + sqrt_delta;
    let mut v3 = half_q - sqrt_delta;
    // u and v are interchangeable; taking the larger cube keeps -p/3u well
    // conditioned.
    if v3.norm() > u3.norm() {
        std::mem::swap(&mut u3, &mut v3);
    }

    let one_third = T::one() / three;
    let u = u3.powf(one_third);
    let v = if u.norm() == zero {
        v3.powf(one_third)
    } else {
        Complex::new(-p, zero) / (u * three)
    };

    let omega = Complex::from_polar(T::one(), numlab_core::types::constants::tau::<T>() / three);
    let omega2 = omega * omega;
    let shift = Complex::new(b / (three * a), zero);

    let roots = vec![
        u + v - shift,
        u * omega + v * omega2 - shift,
        u * omega2 + v * omega - shift,
    ];
    debug!(p = p.as_f64(), q = q.as_f64(), delta = delta.as_f64(), "cardano");
    Ok(roots)
}

fn lower_degree_roots<T: Scalar>(a: T, b: T, c: T) -> Result<Vec<Complex<T>>> {
    if a != T::zero() {
        return Ok(quadratic_roots(a, b, c)?.to_vec());
    }
    if b == T::zero() {
        return Err(NumError::invalid_input(
            "equation has no variable terms",
        ));
    }
    Ok(vec![Complex::new(-c / b, T::zero())])
}

/// Roots of `c₀ + c₁x + … + cₙxⁿ` as eigenvalues of the companion matrix.
///
/// Trailing zero coefficients (zero leading terms) are dropped first. A
/// polynomial of degree zero has no roots and yields an empty vector.
///
/// ```text
/// ⎡ 0 0 … 0  -c₀/cₙ   ⎤
/// ⎢ 1 0 … 0  -c₁/cₙ   ⎥
/// ⎢ 0 1 … 0  -c₂/cₙ   ⎥
/// ⎣ 0 0 … 1  -cₙ₋₁/cₙ ⎦
/// ```
///
/// # Errors
///
/// Returns `InvalidInput` for non-finite coefficients.
pub fn polynomial_roots(coeffs: &[f64]) -> Result<Vec<Complex<f64>>> {
    if let Some(bad) = coeffs.iter().find(|c| !c.is_finite()) {
        return Err(NumError::invalid_input(format!(
            "polynomial coefficient {bad} is not finite"
        )));
    }

    let significant = coeffs
        .iter()
        .rposition(|&c| c != 0.0)
        .map_or(0, |last| last + 1);
    let trimmed = &coeffs[..significant];
    if trimmed.len() < 2 {
        return Ok(Vec::new());
    }

    let degree = trimmed.len() - 1;
    let lead = trimmed[degree];
    if degree == 1 {
        return Ok(vec![Complex::new(-trimmed[0] / lead, 0.0)]);
    }

    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }
    for (i, &c) in trimmed[..degree].iter().enumerate() {
        companion[(i, degree - 1)] = -c / lead;
    }

    let roots: Vec<Complex<f64>> = companion.complex_eigenvalues().iter().copied().collect();
    debug!(degree, "companion matrix eigenvalues computed");
    Ok(roots)
}

/// Evaluate `c₀ + c₁z + … + cₙzⁿ` at a complex point with Horner's rule.
pub fn evaluate_polynomial<T: Scalar>(coeffs: &[T], z: Complex<T>) -> Complex<T> {
    coeffs
        .iter()
        .rev()
        .fold(Complex::new(T::zero(), T::zero()), |acc, &c| acc * z + c)
}

/// Residual check for a set of roots.
#[derive(Debug, Clone, PartialEq)]
pub struct RootReport<T> {
    /// The roots that were checked.
    pub roots: Vec<Complex<T>>,
    /// `|p(x)|` for each root.
    pub residuals: Vec<T>,
    /// Whether every residual is within the tolerance.
    pub passed: bool,
}

/// Evaluate the polynomial (ascending coefficients) at every root and check
/// that each residual is within `tol` of zero.
pub fn verify_roots<T: Scalar>(coeffs: &[T], roots: &[Complex<T>], tol: T) -> RootReport<T> {
    let residuals: Vec<T> = roots
        .iter()
        .map(|&r| evaluate_polynomial(coeffs, r).norm())
        .collect();
    let passed = residuals.iter().all(|&r| r <= tol);
    if !passed {
        warn!(tol = tol.as_f64(), "root residual above tolerance");
    }
    RootReport {
        roots: roots.to_vec(),
        residuals,
        passed,
    }
}
