//! Tolerance loading from TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use numlab::Tolerances;
use tracing::debug;

/// Defaults, overridden by the keys present in `path` (if given).
pub fn load_tolerances(path: Option<&Path>) -> Result<Tolerances> {
    let Some(path) = path else {
        return Ok(Tolerances::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let tolerances = parse_tolerances(&text)
        .with_context(|| format!("loading config file {}", path.display()))?;
    debug!(?tolerances, "loaded tolerances");
    Ok(tolerances)
}

/// Parse and validate a (possibly partial) TOML tolerance table.
pub fn parse_tolerances(text: &str) -> Result<Tolerances> {
    let tolerances: Tolerances = toml::from_str(text).context("invalid TOML")?;
    tolerances.validate()?;
    Ok(tolerances)
}
