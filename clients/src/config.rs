//! Triple-space configuration for the client binary.
//!
//! The bound is resolved in order: `--bound` flag (or `TRIPACK_BOUND`, via
//! clap), then the `[space]` table of a TOML config file, then
//! [`DEFAULT_BOUND`].
//!
//! ```toml
//! [space]
//! bound = 10        # uniform bound for every axis
//! object = 16       # per-axis overrides (subject / predicate / object)
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tripack::Bounds;

/// Bound used when neither flag, environment, nor config file sets one.
pub const DEFAULT_BOUND: u32 = 10;

/// Parsed config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// `[space]` table.
    #[serde(default)]
    pub space: SpaceSection,
}

/// `[space]` table: a uniform bound and optional per-axis overrides.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaceSection {
    /// Uniform bound for all axes.
    pub bound: Option<u32>,
    /// Subject bound override.
    pub subject: Option<u32>,
    /// Predicate bound override.
    pub predicate: Option<u32>,
    /// Object bound override.
    pub object: Option<u32>,
}

impl ConfigFile {
    /// Parses TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid tripack config")
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Resolves the triple-space bounds from flag and config file.
///
/// # Errors
///
/// Returns an error if the resolved bounds are invalid (zero axis or
/// capacity above the dense limit).
pub fn resolve_bounds(flag: Option<u32>, file: Option<&ConfigFile>) -> Result<Bounds> {
    if let Some(r) = flag {
        tracing::debug!(bound = r, "bound from command line");
        return Bounds::uniform(r).context("invalid --bound");
    }
    let Some(file) = file else {
        return Ok(Bounds::uniform(DEFAULT_BOUND)?);
    };
    let space = &file.space;
    let uniform = space.bound.unwrap_or(DEFAULT_BOUND);
    let bounds = Bounds::new(
        space.subject.unwrap_or(uniform),
        space.predicate.unwrap_or(uniform),
        space.object.unwrap_or(uniform),
    )
    .context("invalid [space] bounds in config")?;
    tracing::debug!(?bounds, "bounds from config file");
    Ok(bounds)
}
