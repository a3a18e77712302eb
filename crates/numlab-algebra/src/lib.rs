//! Abstract algebra over prime fields.
//!
//! # Modules
//!
//! - [`finite_field`]: The prime field 𝔽ₚ as a const-generic element type
//! - [`group`]: Finite groups over 𝔽ₚ and exhaustive axiom checks
//! - [`primes`]: Trial-division primality and prime ranges

pub mod finite_field;
pub mod group;
pub mod primes;

pub use finite_field::Fp;
pub use group::{
    check_distributivity, check_field_distributivity, check_group_axioms, AdditiveGroup,
    AxiomReport, AxiomViolation, FiniteGroup, MultiplicativeGroup, NotPrime,
};
pub use primes::{is_prime, primes_in_range};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::finite_field::Fp;
    pub use crate::group::{
        check_distributivity, check_field_distributivity, check_group_axioms, AdditiveGroup,
        AxiomViolation, FiniteGroup, MultiplicativeGroup,
    };
    pub use crate::primes::{is_prime, primes_in_range};
}
