//! Core traits and types for the numlab workspace.
//!
//! This crate provides the pieces every topic crate shares: the generic
//! [`Scalar`] trait, a single error type and the
//! tolerance configuration the demonstrations are parameterized by.
//!
//! # Modules
//!
//! - [`config`]: Tolerance configuration and its builder
//! - [`error`]: Error type for numerical computations
//! - [`numerical`]: Closeness checks and rounding
//! - [`types`]: Scalar trait and mathematical constants

pub mod config;
pub mod error;
pub mod numerical;
pub mod types;

// Re-export commonly used items at the crate root
pub use config::{Tolerances, TolerancesBuilder};
pub use error::{NumError, Result};
pub use types::Scalar;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use numlab_core::prelude::*;
///
/// assert!(is_close(1.0, 1.0 + 1e-12, 1e-9, 0.0));
/// ```
pub mod prelude {
    pub use crate::config::{Tolerances, TolerancesBuilder};
    pub use crate::error::{NumError, Result};
    pub use crate::numerical::{is_close, normalize_zero, round_to_digits};
    pub use crate::types::{constants, Scalar};
}
