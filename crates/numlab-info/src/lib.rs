//! Information theory: entropy measures and error-correcting codes.
//!
//! # Modules
//!
//! - [`entropy`]: Entropy, cross-entropy, KL divergence and Gibbs' inequality
//! - [`hamming`]: Hamming(7,4) encoding, syndromes and single-error correction

pub mod entropy;
pub mod hamming;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::entropy::{
        coin_sequence_probability, cross_entropy, entropy, kl_divergence, validate_distribution,
        verify_gibbs_inequality, CoinProbability, GibbsReport,
    };
    pub use crate::hamming::{correct, decode, encode, parse_bits, syndrome, Codeword, DecodeOutcome};
}
