//! One-sample t-test and seeded normal samples.

use std::fmt;

use numlab_core::error::{NumError, Result};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, instrument};

use crate::student_t::StudentT;

/// Arithmetic mean, or `InvalidInput` for an empty sample.
pub fn sample_mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(NumError::invalid_input("sample is empty"));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Bessel-corrected standard deviation (divisor `n - 1`).
pub fn sample_std_dev(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(NumError::invalid_input(format!(
            "standard deviation needs at least 2 observations, got {}",
            data.len()
        )));
    }
    let mean = sample_mean(data)?;
    let squares: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((squares / (data.len() - 1) as f64).sqrt())
}

/// Outcome of a one-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev: f64,
    /// Standard error of the mean
    pub standard_error: f64,
    /// t statistic
    pub t_statistic: f64,
    /// Degrees of freedom (n - 1)
    pub df: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

impl TTestResult {
    /// Whether the null hypothesis is rejected at level `alpha` (`p < alpha`).
    pub fn reject_null(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

impl fmt::Display for TTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean = {:.4}, sd = {:.4}, t = {:.4} (df = {}), p = {:.4}",
            self.mean, self.std_dev, self.t_statistic, self.df, self.p_value
        )
    }
}

/// Test `H₀: μ = mu0` against the two-sided alternative.
///
/// # Errors
///
/// `InvalidInput` for fewer than two observations and `NumericalError`
/// when the sample has zero variance (the statistic is undefined).
#[instrument(skip(data), fields(n = data.len()))]
pub fn one_sample_t_test(data: &[f64], mu0: f64) -> Result<TTestResult> {
    let std_dev = sample_std_dev(data)?;
    let mean = sample_mean(data)?;
    if std_dev == 0.0 {
        return Err(NumError::numerical_error(
            "sample has zero variance, t statistic is undefined",
        ));
    }

    let n = data.len() as f64;
    let standard_error = std_dev / n.sqrt();
    let t_statistic = (mean - mu0) / standard_error;
    let df = n - 1.0;
    let p_value = StudentT::new(df)?.two_sided_tail(t_statistic)?;

    debug!(mean, std_dev, t_statistic, p_value, "t-test computed");
    Ok(TTestResult {
        mean,
        std_dev,
        standard_error,
        t_statistic,
        df,
        p_value,
    })
}

/// `n` draws from `N(mean, std_dev²)`, reproducible for a given seed.
pub fn normal_sample(mean: f64, std_dev: f64, n: usize, seed: u64) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev).map_err(|e| {
        NumError::invalid_input(format!("normal(mean = {mean}, sd = {std_dev}): {e}"))
    })?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(normal.sample_iter(&mut rng).take(n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_small_sample() {
        let result = one_sample_t_test(&[1.0, 2.0, 3.0, 4.0, 5.0], 2.0).unwrap();
        assert_relative_eq!(result.mean, 3.0);
        assert_relative_eq!(result.std_dev, 2.5f64.sqrt(), epsilon = 1e-14);
        assert_relative_eq!(result.t_statistic, 2f64.sqrt(), epsilon = 1e-12);
        assert_eq!(result.df, 4.0);
        assert_relative_eq!(result.p_value, 0.230_199_641_079_641_9, epsilon = 1e-9);
        assert!(!result.reject_null(0.05));
    }

    #[test]
    fn test_degenerate_samples() {
        assert!(matches!(
            one_sample_t_test(&[4.2], 0.0),
            Err(NumError::InvalidInput { .. })
        ));
        assert!(matches!(
            one_sample_t_test(&[3.0, 3.0, 3.0], 1.0),
            Err(NumError::NumericalError { .. })
        ));
        assert!(sample_mean(&[]).is_err());
    }

    #[test]
    fn test_obvious_shift_is_rejected() {
        let data = [10.1, 9.8, 10.3, 10.0, 9.9, 10.2, 10.1, 9.7];
        let result = one_sample_t_test(&data, 5.0).unwrap();
        assert!(result.reject_null(0.05));
        assert!(result.p_value < 1e-10);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = normal_sample(105.0, 15.0, 30, 42).unwrap();
        let b = normal_sample(105.0, 15.0, 30, 42).unwrap();
        let c = normal_sample(105.0, 15.0, 30, 43).unwrap();
        assert_eq!(a.len(), 30);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(normal_sample(0.0, -1.0, 3, 1).is_err());
    }
}
