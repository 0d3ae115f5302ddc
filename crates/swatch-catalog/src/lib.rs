//! # swatch-catalog
//!
//! Asset catalog reconciliation and writing.
//!
//! A catalog root holds one directory per named color. Entries written by a
//! previous run carry a provenance sidecar; entries the user created or
//! renamed are recognized and adopted instead of overwritten.
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`asset`] | Entry records and lifecycle classification |
//! | [`provenance`] | Sidecar read and write |
//! | [`contents`] | Content records (`Contents.json`) |
//! | [`layout`] | File names, entry listing, root discovery |
//! | [`reconcile`] | Classify, delete, adopt |
//! | [`writer`] | Create roots and entries |
//! | [`naming`] | Name assignment for new colors |
//! | [`pipeline`] | Plan and commit a full run |
//! | [`config`] | `swatch.yaml` |
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use swatch_catalog::{Generator, HexNamer, SwatchConfig};
//!
//! let source = Path::new("MyApp");
//! let config = SwatchConfig::load_for(source, None)?;
//! let plan = Generator::new(config).plan(source)?;
//! println!("{} new colors", plan.colors().len());
//!
//! let report = plan.commit(&HexNamer)?;
//! assert!(report.is_complete());
//! # Ok::<(), swatch_catalog::CatalogError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod asset;
pub mod config;
pub mod contents;
pub mod error;
pub mod layout;
pub mod naming;
pub mod pipeline;
pub mod provenance;
pub mod reconcile;
pub mod writer;

pub use asset::{AssetLifecycleType, AssetRecord};
pub use config::{DEFAULT_CONFIG_FILE, NamedColorSpec, SourceSettings, SwatchConfig};
pub use contents::StoredColor;
pub use error::{CatalogError, CatalogResult};
pub use layout::CatalogLayout;
pub use naming::{ColorNamer, HexNamer, NamedColor};
pub use pipeline::{Generator, RunPlan, RunReport};
pub use provenance::Provenance;
pub use reconcile::{AssetReconciler, BatchOutcome, EntryFailure};
pub use writer::CatalogWriter;
