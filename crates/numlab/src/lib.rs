//! Worked numerical mathematics.
//!
//! `numlab` bundles a set of small, independent demonstrations. Each one
//! computes something and then checks it against an identity that must hold
//! (the fundamental theorem of calculus, `idft(dft(x)) = x`, `p(r) = 0`, the
//! group axioms, Pythagoras, Gibbs' inequality, single-error correction).
//!
//! Topic crates are re-exported behind features, all enabled by default:
//!
//! | feature    | crate               | contents                                  |
//! |------------|---------------------|-------------------------------------------|
//! | `analysis` | [`analysis`]        | calculus, DFT, roots, ODEs, decompositions |
//! | `algebra`  | [`algebra`]         | 𝔽ₚ, finite groups, primality              |
//! | `geometry` | [`geometry`]        | lines, circles, triangles, intersections  |
//! | `info`     | [`info`]            | entropy measures, Hamming(7,4)            |
//! | `stats`    | [`stats`]           | Student's t, one-sample t-test            |
//!
//! # Example
//!
//! ```
//! use numlab::prelude::*;
//!
//! let tol = Tolerances::default();
//! let report = verify_fundamental_theorem(|t: f64| t * t, 2.0, &tol).unwrap();
//! assert!(report.passed);
//!
//! let solution = solve_homogeneous(&[1.0, 0.0, 4.0], &tol).unwrap();
//! assert_eq!(solution.to_string(), "y(x) = C_1cos(2.0x) + C_2sin(2.0x)");
//! ```

pub use nalgebra;
pub use numlab_core as core;

#[cfg(feature = "algebra")]
pub use numlab_algebra as algebra;
#[cfg(feature = "analysis")]
pub use numlab_analysis as analysis;
#[cfg(feature = "geometry")]
pub use numlab_geometry as geometry;
#[cfg(feature = "info")]
pub use numlab_info as info;
#[cfg(feature = "stats")]
pub use numlab_stats as stats;

pub use numlab_core::{NumError, Result, Scalar, Tolerances, TolerancesBuilder};

/// Everything needed to run the demonstrations.
pub mod prelude {
    pub use numlab_core::prelude::*;

    #[cfg(feature = "algebra")]
    pub use numlab_algebra::prelude::*;
    #[cfg(feature = "analysis")]
    pub use numlab_analysis::prelude::*;
    #[cfg(feature = "geometry")]
    pub use numlab_geometry::prelude::*;
    #[cfg(feature = "info")]
    pub use numlab_info::prelude::*;
    #[cfg(feature = "stats")]
    pub use numlab_stats::prelude::*;
}
