//! Command-line surface.

#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "numlab")]
#[command(version, about = "Run and verify worked numerical mathematics demonstrations")]
pub struct Cli {
    /// TOML file overriding the default tolerances
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log intermediate results (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Check d/dx ∫₀ˣ f(t) dt = f(x) for x² and sin x
    Calculus,

    /// Forward and inverse DFT of a real signal
    Fourier {
        /// Comma-separated samples
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = vec![1.0, 2.0, 3.0, 4.0])]
        signal: Vec<f64>,
    },

    /// Roots of ax² + bx + c
    #[command(allow_negative_numbers = true)]
    Quadratic {
        /// Coefficient of x²
        a: f64,
        /// Coefficient of x
        b: f64,
        /// Constant term
        c: f64,
    },

    /// Roots of ax³ + bx² + cx + d by Cardano's formula
    #[command(allow_negative_numbers = true)]
    Cubic {
        /// Coefficient of x³
        a: f64,
        /// Coefficient of x²
        b: f64,
        /// Coefficient of x
        c: f64,
        /// Constant term
        d: f64,
    },

    /// Roots of c₀ + c₁x + … + cₙxⁿ via the companion matrix
    #[command(allow_negative_numbers = true)]
    Poly {
        /// Coefficients in ascending order of degree
        #[arg(required = true, num_args = 1..)]
        coeffs: Vec<f64>,
    },

    /// General solution of aₙy⁽ⁿ⁾ + … + a₀y = 0
    #[command(allow_negative_numbers = true)]
    Ode {
        /// Coefficients from the highest derivative down
        #[arg(required = true, num_args = 1..)]
        coeffs: Vec<f64>,
    },

    /// Group and field axioms of 𝔽ₚ
    Field {
        /// Prime modulus
        #[arg(long, default_value_t = 13)]
        p: u64,
    },

    /// Line and circle intersections, perpendicular feet, triangle transforms
    Geometry,

    /// One-sample t-test on a seeded normal sample
    #[command(allow_negative_numbers = true)]
    Ttest {
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Sample size
        #[arg(long, default_value_t = 30)]
        n: usize,
        /// Population mean of the sample
        #[arg(long, default_value_t = 105.0)]
        mean: f64,
        /// Population standard deviation of the sample
        #[arg(long, default_value_t = 15.0)]
        std: f64,
        /// Hypothesized mean
        #[arg(long, default_value_t = 100.0)]
        mu0: f64,
    },

    /// Sequence probabilities, Gibbs' inequality and Hamming(7,4)
    Info {
        /// Four message bits
        #[arg(long, default_value = "1101")]
        bits: String,
        /// 0-based codeword bit to corrupt
        #[arg(long, default_value_t = 2)]
        flip: usize,
        /// Number of fair coin tosses
        #[arg(long, default_value_t = 10_000)]
        tosses: u64,
    },

    /// Determinants, decomposition round trips and PCA
    Linalg,

    /// Primality of n, optionally listing primes up to a limit
    Prime {
        /// Number to test
        n: u64,
        /// Also list every prime from 1 up to this limit
        #[arg(long)]
        up_to: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_coefficients_parse() {
        let cli = Cli::try_parse_from(["numlab", "quadratic", "1", "-3", "2"]).unwrap();
        assert_eq!(cli.command, Command::Quadratic { a: 1.0, b: -3.0, c: 2.0 });

        let cli = Cli::try_parse_from(["numlab", "poly", "-1", "0", "0", "0", "0", "1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Poly {
                coeffs: vec![-1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
            }
        );
    }

    #[test]
    fn test_defaults_and_global_flags() {
        let cli = Cli::try_parse_from(["numlab", "ttest", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Ttest {
                seed: 42,
                n: 30,
                mean: 105.0,
                std: 15.0,
                mu0: 100.0
            }
        );

        let cli = Cli::try_parse_from(["numlab", "fourier", "--signal", "1,-2,3"]).unwrap();
        assert_eq!(cli.command, Command::Fourier { signal: vec![1.0, -2.0, 3.0] });
    }

    #[test]
    fn test_prime_up_to() {
        let cli = Cli::try_parse_from(["numlab", "prime", "97", "--up-to", "30"]).unwrap();
        assert_eq!(cli.command, Command::Prime { n: 97, up_to: Some(30) });
    }
}
