//! swatch - asset catalog color generator
//!
//! Collects the colors used in interface documents, normalizes them to sRGB
//! and keeps a color asset catalog in sync with them.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Asset catalog color generator")]
#[command(long_about = "
Finds every color used in the interface documents of a project, converts it to
sRGB, and writes one color asset per distinct color. Entries created or renamed
by hand are detected and left alone.

Examples:
  swatch generate MyApp                       # Update MyApp's color catalog
  swatch generate MyApp --dry-run             # Show what would change
  swatch generate MyApp --catalog UI.xcassets # Use a specific catalog
  swatch inspect MyApp/Colors.xcassets --json # Classify catalog entries
  swatch convert display-p3 red=1 green=0 blue=0 alpha=1
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize document colors and update the catalog
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Classify catalog entries without changing anything
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Convert one color record to sRGB
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

/// Arguments for the `generate` command.
#[derive(Args)]
struct GenerateArgs {
    /// Project directory to scan
    source: PathBuf,

    /// Catalog root (default: first catalog in the project, or Colors.xcassets)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Configuration file (default: swatch.yaml in the project)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the plan without writing anything
    #[arg(short = 'n', long)]
    dry_run: bool,
}

/// Arguments for the `inspect` command.
#[derive(Args)]
struct InspectArgs {
    /// Catalog root directory
    catalog: PathBuf,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Color space tag, e.g. srgb, display-p3, gray-gamma-2.2
    tag: String,

    /// Components as key=value
    components: Vec<String>,

    /// Read components as plain decimals (document encoding)
    #[arg(long)]
    decimal: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Convert(args) => commands::convert::run(args),
    }
}
