//! Student's t-distribution.

use numlab_core::{
    error::{NumError, Result},
    types::{constants, Scalar},
};

use crate::special::{beta_inc, ln_gamma};

/// Student's t-distribution with `ν` degrees of freedom.
///
/// # Example
///
/// ```
/// use numlab_stats::StudentT;
///
/// let t = StudentT::new(10.0_f64).unwrap();
/// assert!((t.cdf(0.0).unwrap() - 0.5).abs() < 1e-14);
/// assert!((t.cdf(2.228).unwrap() - 0.975).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT<T> {
    df: T,
}

impl<T: Scalar> StudentT<T> {
    /// Create the distribution. Requires `df > 0`.
    pub fn new(df: T) -> Result<Self> {
        if !(df > T::zero()) || df.is_infinite() {
            return Err(NumError::invalid_input(format!(
                "degrees of freedom must be positive and finite, got {df}"
            )));
        }
        Ok(Self { df })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> T {
        self.df
    }

    /// Log density.
    pub fn ln_pdf(&self, x: T) -> T {
        let one = T::one();
        let half = <T as Scalar>::from_f64(0.5);
        let v = self.df;
        ln_gamma((v + one) * half)
            - ln_gamma(v * half)
            - half * (v * constants::pi::<T>()).ln()
            - (v + one) * half * (one + x * x / v).ln()
    }

    /// Density.
    pub fn pdf(&self, x: T) -> T {
        self.ln_pdf(x).exp()
    }

    /// `P(|T| >= |t|) = I_{ν/(ν+t²)}(ν/2, 1/2)`.
    ///
    /// Equal to `2 (1 - F(|t|))`, computed without the cancellation in
    /// `1 - F` for large `|t|`.
    pub fn two_sided_tail(&self, t: T) -> Result<T> {
        let half = <T as Scalar>::from_f64(0.5);
        let x = self.df / (self.df + t * t);
        beta_inc(self.df * half, half, x)
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: T) -> Result<T> {
        let half = <T as Scalar>::from_f64(0.5);
        let tail = half * self.two_sided_tail(x)?;
        Ok(if x >= T::zero() { T::one() - tail } else { tail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_bad_df() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-1.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());
    }

    #[test]
    fn test_cauchy_special_case() {
        // ν = 1 is the Cauchy distribution: F(x) = 1/2 + atan(x)/π
        let t = StudentT::new(1.0).unwrap();
        for x in [-3.0f64, -0.5, 0.0, 1.0, 4.0] {
            let expected = 0.5 + x.atan() / std::f64::consts::PI;
            assert_relative_eq!(t.cdf(x).unwrap(), expected, epsilon = 1e-12);
        }
        assert_relative_eq!(t.pdf(0.0), 1.0 / std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_symmetry() {
        let t = StudentT::new(7.5).unwrap();
        for x in [0.3, 1.2, 2.9] {
            assert_relative_eq!(t.cdf(-x).unwrap(), 1.0 - t.cdf(x).unwrap(), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_tail_matches_cdf() {
        let t = StudentT::new(4.0).unwrap();
        let stat = 2f64.sqrt();
        let tail = t.two_sided_tail(stat).unwrap();
        assert_relative_eq!(tail, 2.0 * (1.0 - t.cdf(stat).unwrap()), epsilon = 1e-13);
        assert_relative_eq!(tail, 0.230_199_641_079_641_9, epsilon = 1e-9);
    }
}
