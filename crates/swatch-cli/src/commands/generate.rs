//! Catalog generation command.
//!
//! Plans a run over the project, prints it, and commits unless `--dry-run`.

use crate::GenerateArgs;
use anyhow::{Context, Result, bail};
use swatch_catalog::{Generator, HexNamer, RunPlan, RunReport};
use tracing::{debug, info, trace};

/// Runs the generate command.
pub fn run(args: GenerateArgs, verbose: u8) -> Result<()> {
    trace!(source = %args.source.display(), "generate::run");
    if !args.source.is_dir() {
        bail!("not a directory: {}", args.source.display());
    }

    let config = super::load_config(&args.source, args.config.as_deref())?;
    let mut generator = Generator::new(config);
    if let Some(catalog) = args.catalog {
        debug!(catalog = %catalog.display(), "catalog root override");
        generator = generator.with_catalog_root(catalog);
    }

    let plan = generator
        .plan(&args.source)
        .with_context(|| format!("Failed to scan: {}", args.source.display()))?;
    print_plan(&plan, verbose);

    if args.dry_run {
        info!("dry run, nothing written");
        return Ok(());
    }

    let report = plan
        .commit(&HexNamer)
        .context("Failed to prepare the catalog root")?;
    print_report(&report);

    if !report.is_complete() {
        bail!("{} operation(s) failed", report.failures.len());
    }
    Ok(())
}

fn print_plan(plan: &RunPlan, verbose: u8) {
    let modified = plan.documents().iter().filter(|d| d.is_modified()).count();
    println!("Catalog:   {}", plan.catalog_root().display());
    println!("Entries:   {}", plan.records().len());
    println!("Documents: {} ({} to rewrite)", plan.documents().len(), modified);
    println!("New:       {} colors", plan.colors().len());

    if verbose > 0 {
        for record in plan.records() {
            println!(
                "  {:<17} {}",
                record.lifecycle.as_str(),
                record.current_name.as_deref().unwrap_or("?")
            );
        }
        for color in plan.colors() {
            println!("  + {}", super::format_color(color));
        }
    }
    for failure in plan.failures() {
        eprintln!("  skipped {}: {}", failure.path.display(), failure.error);
    }
}

fn print_report(report: &RunReport) {
    println!(
        "Deleted {}, kept {}, adopted {}, created {}, rewrote {} document(s)",
        report.deleted.len(),
        report.preserved,
        report.provenance_updated.len(),
        report.created.len(),
        report.documents_rewritten.len()
    );
    for failure in &report.failures {
        eprintln!("  failed {}: {}", failure.path.display(), failure.error);
    }
}
