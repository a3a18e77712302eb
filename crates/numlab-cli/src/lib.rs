//! Library half of the `numlab` binary: argument definitions, configuration
//! loading and the report for each subcommand.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use commands::run;
pub use config::load_tolerances;
