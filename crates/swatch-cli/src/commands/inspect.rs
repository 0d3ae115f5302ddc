//! Catalog inspection command.
//!
//! Classifies every entry of a catalog root and prints the result. Never
//! writes.

use crate::InspectArgs;
use anyhow::{Context, Result, bail};
use swatch_catalog::{AssetReconciler, AssetRecord};
use swatch_color::ColorSpaceConverter;

/// Runs the inspect command.
pub fn run(args: InspectArgs) -> Result<()> {
    if !args.catalog.is_dir() {
        bail!("not a directory: {}", args.catalog.display());
    }
    let project = args.catalog.parent().unwrap_or(args.catalog.as_path());
    let config = super::load_config(project, args.config.as_deref())?;
    let converter = ColorSpaceConverter::with_lookup(config.named_color_table());
    let reconciler = AssetReconciler::with_converter(config.catalog, converter);

    let records = reconciler
        .scan(&args.catalog)
        .with_context(|| format!("Failed to list: {}", args.catalog.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_text(&records);
    }
    Ok(())
}

fn print_text(records: &[AssetRecord]) {
    for record in records {
        let name = record.current_name.as_deref().unwrap_or("?");
        print!("{:<17} {:<24} {}", record.lifecycle.as_str(), name, super::format_color(&record.color));
        match record.original_name.as_deref() {
            Some(original) if original != name => println!("  (was {original})"),
            _ => println!(),
        }
    }
    println!("{} entries", records.len());
}
