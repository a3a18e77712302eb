//! Numerical analysis demonstrations.
//!
//! # Modules
//!
//! - [`calculus`]: Symmetric difference derivatives, midpoint-rule
//!   integrals and a numerical check of the fundamental theorem of calculus
//! - [`fourier`]: Direct O(N²) discrete Fourier transform and its inverse
//! - [`linalg`]: Cofactor and LU determinants, eigen/SVD reconstruction, PCA
//! - [`ode`]: General solutions of constant-coefficient homogeneous ODEs
//! - [`roots`]: Quadratic formula, Cardano's cubic formula and companion
//!   matrix roots for polynomials of any degree

pub mod calculus;
pub mod fourier;
pub mod linalg;
pub mod ode;
pub mod roots;

pub use num_complex::Complex;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculus::{
        derivative, derivative_default, integral, verify_fundamental_theorem, FtcReport,
    };
    pub use crate::fourier::{dft, dft_real, idft, verify_round_trip};
    pub use crate::linalg::{
        eigen_reconstruct, lu_determinant, pca, recursive_determinant, svd_reconstruct,
        verify_decompositions, DecompositionReport,
    };
    pub use crate::ode::{
        characteristic_roots, solve_homogeneous, CharacteristicRoot, GeneralSolution, Oscillation,
        SolutionTerm,
    };
    pub use crate::roots::{
        cubic_roots, evaluate_polynomial, polynomial_roots, quadratic_roots, verify_roots,
        RootReport,
    };
    pub use crate::Complex;
}
