//! CLI command implementations

pub mod convert;
pub mod generate;
pub mod inspect;

use anyhow::{Context, Result, bail};
use std::path::Path;
use swatch_catalog::SwatchConfig;
use swatch_core::CanonicalColor;

/// Loads the configuration for a project directory.
pub fn load_config(project: &Path, explicit: Option<&Path>) -> Result<SwatchConfig> {
    SwatchConfig::load_for(project, explicit)
        .with_context(|| format!("Failed to load configuration for: {}", project.display()))
}

/// Splits a `key=value` argument.
pub fn parse_component(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("expected key=value, got {arg:?}"),
    }
}

/// One-line rendering of a color: hex plus the four channels.
pub fn format_color(color: &CanonicalColor) -> String {
    format!(
        "#{} rgba({:.4}, {:.4}, {:.4}, {:.4})",
        color.to_hex(),
        color.red(),
        color.green(),
        color.blue(),
        color.alpha()
    )
}
