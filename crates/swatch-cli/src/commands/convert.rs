//! Single color conversion command.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use swatch_color::{ColorSpaceConverter, ComponentEncoding, check_components};
use swatch_core::{ColorSpaceTag, RawColorComponents};
use tracing::warn;

/// Runs the convert command.
///
/// Conversion always succeeds; missing or malformed components are reported
/// as warnings and read as zero.
pub fn run(args: ConvertArgs) -> Result<()> {
    let tag: ColorSpaceTag = args
        .tag
        .parse()
        .with_context(|| format!("Unknown color space: {}", args.tag))?;

    let mut components = RawColorComponents::new();
    for arg in &args.components {
        let (key, value) = super::parse_component(arg)?;
        components.insert(key, value);
    }

    let encoding = if args.decimal {
        ComponentEncoding::Decimal
    } else {
        ComponentEncoding::Lexical
    };
    if let Err(e) = check_components(tag, &components, encoding) {
        warn!(%tag, error = %e, "component problem, reading as zero");
        eprintln!("warning: {e}");
    }

    let color = ColorSpaceConverter::new().convert_with(tag, &components, encoding);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&color)?);
    } else {
        println!("{}", super::format_color(&color));
    }
    Ok(())
}
