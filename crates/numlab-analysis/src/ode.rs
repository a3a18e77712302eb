//! Linear homogeneous ODEs with constant coefficients.
//!
//! For `aₙ y⁽ⁿ⁾ + … + a₁ y' + a₀ y = 0` the trial solution `y = e^(rx)`
//! turns the equation into the characteristic polynomial
//! `aₙ rⁿ + … + a₁ r + a₀ = 0`. Each root contributes basis functions:
//!
//! - a real root `r` of multiplicity `m`: `e^(rx), x e^(rx), …, x^(m-1) e^(rx)`;
//! - a complex pair `α ± βi` of multiplicity `m`:
//!   `x^j e^(αx) cos(βx)` and `x^j e^(αx) sin(βx)` for `j < m`.
//!
//! Repeated roots are ill-conditioned: a root of multiplicity `m` is only
//! recovered to about `ε^(1/m)`. Nearby roots are therefore clustered, and a
//! cluster of `m` roots becomes one root of multiplicity `m` (its centroid,
//! which is well conditioned) when `p, p', …, p^(m-1)` all vanish there.
//! Otherwise its members are distinct roots that merely lie close together.
//! Roots are rounded for display and grouping only after that.

use std::fmt;

use num_complex::Complex;
use numlab_core::{
    error::{NumError, Result},
    numerical::round_to_digits,
    Tolerances,
};
use tracing::debug;

use crate::roots::{evaluate_polynomial, polynomial_roots};

/// A distinct characteristic root and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicRoot {
    /// The (rounded) root.
    pub value: Complex<f64>,
    /// Algebraic multiplicity.
    pub multiplicity: usize,
}

/// Which trigonometric factor an oscillatory term carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oscillation {
    /// `cos(βx)`
    Cos,
    /// `sin(βx)`
    Sin,
}

/// One basis function of the general solution, with its free constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolutionTerm {
    /// `C_k x^power e^(rate·x)`
    Exponential {
        /// Index `k` of the free constant.
        constant: usize,
        /// Power of `x`.
        power: usize,
        /// Real root `r`.
        rate: f64,
    },
    /// `C_k x^power e^(decay·x) cos/sin(frequency·x)`
    Oscillatory {
        /// Index `k` of the free constant.
        constant: usize,
        /// Power of `x`.
        power: usize,
        /// Real part `α`; `None` when it is zero.
        decay: Option<f64>,
        /// Imaginary part `β > 0`.
        frequency: f64,
        /// Cosine or sine.
        kind: Oscillation,
    },
}

fn format_power(power: usize) -> String {
    match power {
        0 => String::new(),
        1 => "x".to_string(),
        p => format!("x^{p}"),
    }
}

impl fmt::Display for SolutionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Exponential {
                constant,
                power,
                rate,
            } => write!(f, "C_{constant}{}e^({rate:?}x)", format_power(power)),
            Self::Oscillatory {
                constant,
                power,
                decay,
                frequency,
                kind,
            } => {
                write!(f, "C_{constant}{}", format_power(power))?;
                if let Some(alpha) = decay {
                    write!(f, "e^({alpha:?}x)")?;
                }
                let name = match kind {
                    Oscillation::Cos => "cos",
                    Oscillation::Sin => "sin",
                };
                write!(f, "{name}({frequency:?}x)")
            }
        }
    }
}

/// General solution of a constant-coefficient homogeneous ODE.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSolution {
    /// Distinct characteristic roots, sorted descending by (real, imaginary).
    pub roots: Vec<CharacteristicRoot>,
    /// Basis terms, constants numbered from 1.
    pub terms: Vec<SolutionTerm>,
}

impl GeneralSolution {
    /// Order of the equation (number of free constants).
    pub fn order(&self) -> usize {
        self.terms.len()
    }
}

impl fmt::Display for GeneralSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y(x) = ")?;
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// Group roots lying within `tol · max(1, |c|)` of a running centroid `c`.
fn cluster_roots(roots: &[Complex<f64>], tol: f64) -> Vec<Vec<Complex<f64>>> {
    let mut clusters: Vec<Vec<Complex<f64>>> = Vec::new();
    for &root in roots {
        let home = clusters.iter_mut().find(|members| {
            let c = centroid(members);
            (c - root).norm() <= tol * c.norm().max(1.0)
        });
        match home {
            Some(members) => members.push(root),
            None => clusters.push(vec![root]),
        }
    }
    clusters
}

fn centroid(members: &[Complex<f64>]) -> Complex<f64> {
    members.iter().sum::<Complex<f64>>() / members.len() as f64
}

/// Ascending coefficients of `p'` from those of `p`.
fn differentiate(coeffs: &[f64]) -> Vec<f64> {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, &c)| k as f64 * c)
        .collect()
}

/// Whether `p, p', …, p^(multiplicity-1)` vanish at `at`, each relative to
/// `Σ |cₖ| |at|^k` over its own coefficients.
fn is_repeated_root(coeffs: &[f64], at: Complex<f64>, multiplicity: usize, tol: f64) -> bool {
    let radius = Complex::new(at.norm(), 0.0);
    let mut current = coeffs.to_vec();
    for _ in 0..multiplicity {
        let magnitudes: Vec<f64> = current.iter().map(|c| c.abs()).collect();
        let scale = evaluate_polynomial(&magnitudes, radius).re;
        if evaluate_polynomial(&current, at).norm() > tol * scale {
            return false;
        }
        current = differentiate(&current);
    }
    true
}

/// Distinct characteristic roots with multiplicities, sorted descending.
pub fn characteristic_roots(
    coeffs_descending: &[f64],
    tolerances: &Tolerances,
) -> Result<Vec<CharacteristicRoot>> {
    if coeffs_descending.iter().all(|&c| c == 0.0) {
        return Err(NumError::invalid_input(
            "characteristic polynomial needs a non-zero coefficient",
        ));
    }

    let ascending: Vec<f64> = coeffs_descending.iter().rev().copied().collect();
    let raw = polynomial_roots(&ascending)?;
    let digits = tolerances.root_rounding_digits;

    let mut candidates: Vec<(Complex<f64>, usize)> = Vec::new();
    for members in cluster_roots(&raw, tolerances.root_cluster_tolerance) {
        let center = centroid(&members);
        let m = members.len();
        if m == 1
            || is_repeated_root(&ascending, center, m, tolerances.root_multiplicity_tolerance)
        {
            candidates.push((center, m));
        } else {
            debug!(cluster = m, %center, "close roots are distinct");
            candidates.extend(members.into_iter().map(|root| (root, 1)));
        }
    }

    let mut distinct: Vec<CharacteristicRoot> = Vec::new();
    for (root, count) in candidates {
        let mut value = Complex::new(
            round_to_digits(root.re, digits),
            round_to_digits(root.im, digits),
        );
        if value.im.abs() < tolerances.imaginary_tolerance {
            value.im = 0.0;
        }
        match distinct.iter_mut().find(|r| r.value == value) {
            Some(existing) => existing.multiplicity += count,
            None => distinct.push(CharacteristicRoot {
                value,
                multiplicity: count,
            }),
        }
    }

    distinct.sort_by(|a, b| {
        b.value
            .re
            .total_cmp(&a.value.re)
            .then(b.value.im.total_cmp(&a.value.im))
    });
    Ok(distinct)
}

/// Solve `aₙ y⁽ⁿ⁾ + … + a₀ y = 0` given `[aₙ, …, a₀]`.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty or all-zero coefficient list, or
/// non-finite coefficients.
///
/// # Example
///
/// ```
/// use numlab_analysis::ode::solve_homogeneous;
/// use numlab_core::Tolerances;
///
/// let solution = solve_homogeneous(&[1.0, -3.0, 2.0], &Tolerances::default()).unwrap();
/// assert_eq!(solution.to_string(), "y(x) = C_1e^(2.0x) + C_2e^(1.0x)");
/// ```
pub fn solve_homogeneous(
    coeffs_descending: &[f64],
    tolerances: &Tolerances,
) -> Result<GeneralSolution> {
    let roots = characteristic_roots(coeffs_descending, tolerances)?;
    let zero_tol = tolerances.imaginary_tolerance;

    let mut terms = Vec::new();
    let mut constant = 1;
    for root in &roots {
        let (alpha, beta) = (root.value.re, root.value.im);
        if beta.abs() < zero_tol {
            for power in 0..root.multiplicity {
                terms.push(SolutionTerm::Exponential {
                    constant,
                    power,
                    rate: alpha,
                });
                constant += 1;
            }
        } else if beta > 0.0 {
            // The negative-imaginary conjugate is covered by this pair.
            let decay = (alpha.abs() > zero_tol).then_some(alpha);
            for power in 0..root.multiplicity {
                for kind in [Oscillation::Cos, Oscillation::Sin] {
                    terms.push(SolutionTerm::Oscillatory {
                        constant,
                        power,
                        decay,
                        frequency: beta,
                        kind,
                    });
                    constant += 1;
                }
            }
        }
    }

    debug!(distinct_roots = roots.len(), terms = terms.len(), "ode solved");
    Ok(GeneralSolution { roots, terms })
}
