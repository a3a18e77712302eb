//! Hypothesis testing with Student's t-distribution.
//!
//! # Modules
//!
//! - [`special`]: Log-gamma, log-beta and the regularized incomplete beta function
//! - [`student_t`]: Student's t-distribution (density and CDF)
//! - [`t_test`]: Sample statistics, the one-sample t-test and seeded sampling

pub mod special;
pub mod student_t;
pub mod t_test;

pub use student_t::StudentT;
pub use t_test::{normal_sample, one_sample_t_test, sample_mean, sample_std_dev, TTestResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::special::{beta_inc, ln_beta, ln_gamma};
    pub use crate::student_t::StudentT;
    pub use crate::t_test::{
        normal_sample, one_sample_t_test, sample_mean, sample_std_dev, TTestResult,
    };
}
