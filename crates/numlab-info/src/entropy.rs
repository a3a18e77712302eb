//! Entropy, cross-entropy and KL divergence in bits.
//!
//! Logarithms are taken of `p + 1e-12` so that zero-probability outcomes
//! contribute (almost) nothing instead of producing `0 · log 0 = NaN`. The
//! offset biases results by at most about 1e-11 bits per outcome.

use numlab_core::{
    error::{NumError, Result},
    types::Scalar,
};
use tracing::{debug, instrument};

const LOG_OFFSET: f64 = 1e-12;

fn offset_log2<T: Scalar>(x: T) -> T {
    (x + <T as Scalar>::from_f64(LOG_OFFSET)).log2()
}

fn ensure_same_length<T>(p: &[T], q: &[T]) -> Result<()> {
    if p.len() == q.len() {
        Ok(())
    } else {
        Err(NumError::dimension_mismatch(
            format!("{} probabilities", p.len()),
            format!("{} probabilities", q.len()),
        ))
    }
}

/// Shannon entropy `H(p) = -Σ p log₂ p`.
pub fn entropy<T: Scalar>(p: &[T]) -> T {
    -p.iter().fold(T::zero(), |acc, &pi| acc + pi * offset_log2(pi))
}

/// Cross-entropy `H(p, q) = -Σ p log₂ q`.
pub fn cross_entropy<T: Scalar>(p: &[T], q: &[T]) -> Result<T> {
    ensure_same_length(p, q)?;
    Ok(-p
        .iter()
        .zip(q)
        .fold(T::zero(), |acc, (&pi, &qi)| acc + pi * offset_log2(qi)))
}

/// Kullback–Leibler divergence `D(p ‖ q) = H(p, q) - H(p)`.
pub fn kl_divergence<T: Scalar>(p: &[T], q: &[T]) -> Result<T> {
    Ok(cross_entropy(p, q)? - entropy(p))
}

/// Check that `p` is a probability distribution.
///
/// # Errors
///
/// `InvalidInput` for an empty slice or a sum further than `tol` from 1,
/// `DomainError` for a negative or non-finite entry.
pub fn validate_distribution<T: Scalar>(p: &[T], tol: T) -> Result<()> {
    if p.is_empty() {
        return Err(NumError::invalid_input("distribution is empty"));
    }
    if let Some(bad) = p.iter().find(|x| !x.is_finite() || **x < T::zero()) {
        return Err(NumError::domain_error(format!(
            "probability {bad} is negative or not finite"
        )));
    }
    let total = p.iter().fold(T::zero(), |acc, &x| acc + x);
    if (total - T::one()).abs() > tol {
        return Err(NumError::invalid_input(format!(
            "probabilities sum to {total}, not 1"
        )));
    }
    Ok(())
}

/// Probability of one particular sequence of `n` independent outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinProbability<T> {
    /// `pⁿ` computed directly; underflows to 0 for long sequences.
    pub direct: T,
    /// `log₂(pⁿ) = n log₂ p`, which stays representable.
    pub log2: T,
}

/// Probability that `n` tosses all show a face of probability `p`.
pub fn coin_sequence_probability<T: Scalar>(n: u64, p: T) -> Result<CoinProbability<T>> {
    if !(p >= T::zero() && p <= T::one()) {
        return Err(NumError::domain_error(format!(
            "probability {p} is outside [0, 1]"
        )));
    }
    let count = <T as Scalar>::from_f64(n as f64);
    let result = CoinProbability {
        direct: p.powf(count),
        log2: count * p.log2(),
    };
    debug!(n, direct = %result.direct, log2 = %result.log2, "sequence probability");
    Ok(result)
}

/// Outcome of comparing `H(p, p)` with `H(p, q)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GibbsReport<T> {
    /// `H(p, p) = H(p)`
    pub self_entropy: T,
    /// `H(p, q)`
    pub cross_entropy: T,
    /// Whether `H(p, p) <= H(p, q)`
    pub passed: bool,
}

/// Gibbs' inequality: no code is shorter on average than the true one.
#[instrument(skip_all, fields(outcomes = p.len()))]
pub fn verify_gibbs_inequality<T: Scalar>(p: &[T], q: &[T]) -> Result<GibbsReport<T>> {
    let self_entropy = cross_entropy(p, p)?;
    let cross = cross_entropy(p, q)?;
    let passed = self_entropy <= cross;
    debug!(%self_entropy, cross_entropy = %cross, passed, "gibbs inequality checked");
    Ok(GibbsReport {
        self_entropy,
        cross_entropy: cross,
        passed,
    })
}
