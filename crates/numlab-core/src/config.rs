//! Tolerance configuration shared by the numlab demonstrations.
//!
//! A [`Tolerances`] value collects every step size, sample count and
//! comparison tolerance the computations use. It can be built in code with
//! [`TolerancesBuilder`] or, with the `serde` feature, deserialized from a
//! (possibly partial) TOML or JSON document.

use crate::error::{NumError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numerical tolerances and discretization parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    /// Step `h` of the symmetric difference quotient.
    pub derivative_step: f64,
    /// Number of sub-intervals of the midpoint rule.
    pub integration_intervals: usize,
    /// Relative tolerance for "is close" verifications.
    pub relative_tolerance: f64,
    /// Absolute tolerance for "is close to zero" verifications.
    pub absolute_tolerance: f64,
    /// Decimal digits kept when grouping repeated characteristic roots.
    pub root_rounding_digits: u32,
    /// Roots closer than this (relative to `max(1, |r|)`) are candidates
    /// for one repeated root.
    pub root_cluster_tolerance: f64,
    /// A candidate cluster of `m` roots is accepted as one root of
    /// multiplicity `m` only if `p, p', …, p^(m-1)` vanish at its centroid
    /// to within this fraction of their coefficient scale.
    pub root_multiplicity_tolerance: f64,
    /// Below this magnitude an imaginary (or real) part counts as zero.
    pub imaginary_tolerance: f64,
    /// Determinant threshold under which two lines count as parallel.
    pub geometry_epsilon: f64,
    /// Significance level of hypothesis tests.
    pub significance_level: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            derivative_step: 1e-7,
            integration_intervals: 100_000,
            relative_tolerance: 1e-5,
            absolute_tolerance: 1e-9,
            root_rounding_digits: 6,
            root_cluster_tolerance: 1e-3,
            root_multiplicity_tolerance: 1e-10,
            imaginary_tolerance: 1e-6,
            geometry_epsilon: 1e-9,
            significance_level: 0.05,
        }
    }
}

impl Tolerances {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f64) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(NumError::invalid_input(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        }

        positive("derivative_step", self.derivative_step)?;
        positive("relative_tolerance", self.relative_tolerance)?;
        positive("absolute_tolerance", self.absolute_tolerance)?;
        positive("root_cluster_tolerance", self.root_cluster_tolerance)?;
        positive("root_multiplicity_tolerance", self.root_multiplicity_tolerance)?;
        positive("imaginary_tolerance", self.imaginary_tolerance)?;
        positive("geometry_epsilon", self.geometry_epsilon)?;

        if self.integration_intervals == 0 {
            return Err(NumError::invalid_input(
                "integration_intervals must be at least 1",
            ));
        }
        if self.root_rounding_digits > 15 {
            return Err(NumError::invalid_input(format!(
                "root_rounding_digits must be at most 15, got {}",
                self.root_rounding_digits
            )));
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(NumError::invalid_input(format!(
                "significance_level must lie in (0, 1), got {}",
                self.significance_level
            )));
        }
        Ok(())
    }
}

/// Builder for creating a custom [`Tolerances`].
#[derive(Debug, Clone, Default)]
pub struct TolerancesBuilder {
    config: Tolerances,
}

impl TolerancesBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the finite-difference step.
    pub fn derivative_step(mut self, h: f64) -> Self {
        self.config.derivative_step = h;
        self
    }

    /// Set the number of midpoint-rule sub-intervals.
    pub fn integration_intervals(mut self, n: usize) -> Self {
        self.config.integration_intervals = n;
        self
    }

    /// Set the relative verification tolerance.
    pub fn relative_tolerance(mut self, tol: f64) -> Self {
        self.config.relative_tolerance = tol;
        self
    }

    /// Set the absolute verification tolerance.
    pub fn absolute_tolerance(mut self, tol: f64) -> Self {
        self.config.absolute_tolerance = tol;
        self
    }

    /// Set the rounding used to group repeated roots.
    pub fn root_rounding_digits(mut self, digits: u32) -> Self {
        self.config.root_rounding_digits = digits;
        self
    }

    /// Set the distance under which roots are merged as repeated.
    pub fn root_cluster_tolerance(mut self, tol: f64) -> Self {
        self.config.root_cluster_tolerance = tol;
        self
    }

    /// Set the vanishing threshold that confirms a repeated root.
    pub fn root_multiplicity_tolerance(mut self, tol: f64) -> Self {
        self.config.root_multiplicity_tolerance = tol;
        self
    }

    /// Set the threshold below which a component counts as zero.
    pub fn imaginary_tolerance(mut self, tol: f64) -> Self {
        self.config.imaginary_tolerance = tol;
        self
    }

    /// Set the parallel-line threshold.
    pub fn geometry_epsilon(mut self, eps: f64) -> Self {
        self.config.geometry_epsilon = eps;
        self
    }

    /// Set the hypothesis-test significance level.
    pub fn significance_level(mut self, alpha: f64) -> Self {
        self.config.significance_level = alpha;
        self
    }

    /// Build the configuration, validating it.
    pub fn build(self) -> Result<Tolerances> {
        self.config.validate()?;
        Ok(self.config)
    }
}
