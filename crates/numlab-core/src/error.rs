//! The error type shared by every numlab crate.
//!
//! Routines return [`Result`], i.e. `Result<T, NumError>`. A topic crate
//! with a narrower error (such as the algebra crate's `NotPrime`) provides
//! a `From` conversion into the variant that fits it.

use std::fmt::Display;

use thiserror::Error;

/// Why a computation could not produce a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumError {
    /// Arguments the routine does not accept: a zero leading coefficient,
    /// an empty sample, a bit that is neither 0 nor 1.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// Operands of incompatible shape.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Shape the routine needed
        expected: String,
        /// Shape it received
        actual: String,
    },

    /// Division by zero, including by the zero of a finite field.
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// The attempted division
        context: String,
    },

    /// An intermediate result made the computation meaningless, e.g. a
    /// singular eigenvector matrix or a zero-variance sample.
    #[error("numerical failure: {reason}")]
    NumericalError {
        /// The degenerate quantity
        reason: String,
    },

    /// An iteration ran out of steps.
    #[error("no convergence within {iterations} iterations")]
    ConvergenceFailure {
        /// Iteration budget that was exhausted
        iterations: usize,
    },

    /// Argument outside the mathematical domain of a function.
    #[error("domain error: {reason}")]
    DomainError {
        /// The violated domain condition
        reason: String,
    },
}

impl NumError {
    /// [`NumError::InvalidInput`]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// [`NumError::DimensionMismatch`], formatting both shapes.
    pub fn dimension_mismatch(expected: impl Display, actual: impl Display) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// [`NumError::DivisionByZero`]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// [`NumError::NumericalError`]
    pub fn numerical_error(reason: impl Into<String>) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }

    /// [`NumError::ConvergenceFailure`]
    pub fn convergence_failure(iterations: usize) -> Self {
        Self::ConvergenceFailure { iterations }
    }

    /// [`NumError::DomainError`]
    pub fn domain_error(reason: impl Into<String>) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }
}

/// `Result` specialized to [`NumError`].
pub type Result<T> = std::result::Result<T, NumError>;
