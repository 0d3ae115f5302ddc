//! A full generation run over a project tree.
//!
//! A run has two phases. [`Generator::plan`] scans the catalog and the source
//! documents and decides everything without touching disk. [`RunPlan::commit`]
//! then applies the decisions in a fixed order:
//!
//! 1. create the catalog root if needed (failure aborts the run)
//! 2. delete `original` entries
//! 3. persist provenance for `customAdded` and `customRenamed` entries
//! 4. write back rewritten source documents
//! 5. create one entry per color of the generation set
//!
//! Per-entry failures from steps 2 to 5 are collected in the [`RunReport`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use swatch_color::{ColorSpaceConverter, NamedColorTable};
use swatch_core::CanonicalColor;
use swatch_source::{SourceDocument, SourceError};
use tracing::{debug, info, warn};

use crate::asset::AssetRecord;
use crate::config::SwatchConfig;
use crate::error::CatalogResult;
use crate::layout::CatalogLayout;
use crate::naming::ColorNamer;
use crate::reconcile::{AssetReconciler, EntryFailure};
use crate::writer::CatalogWriter;

/// Plans generation runs for a configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: SwatchConfig,
    catalog_root: Option<PathBuf>,
    converter: ColorSpaceConverter<NamedColorTable>,
}

impl Generator {
    /// Generator for a configuration.
    pub fn new(config: SwatchConfig) -> Self {
        let converter = ColorSpaceConverter::with_lookup(config.named_color_table());
        Self {
            config,
            catalog_root: None,
            converter,
        }
    }

    /// Uses `root` as catalog root instead of searching the source tree.
    pub fn with_catalog_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.catalog_root = Some(root.into());
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &SwatchConfig {
        &self.config
    }

    /// Catalog root for `source_root`: the override, the first existing root
    /// in the tree, or the default root.
    pub fn catalog_root_for(&self, source_root: &Path) -> CatalogResult<PathBuf> {
        if let Some(root) = &self.catalog_root {
            return Ok(root.clone());
        }
        let layout = &self.config.catalog;
        let found = layout.find_root(source_root, &self.config.source_filter())?;
        Ok(found.unwrap_or_else(|| layout.default_root_for(source_root)))
    }

    /// Scans `source_root` and decides the run. Nothing is written.
    pub fn plan(&self, source_root: &Path) -> CatalogResult<RunPlan> {
        let layout = self.config.catalog.clone();
        let catalog_root = self.catalog_root_for(source_root)?;
        debug!(root = %catalog_root.display(), "catalog root");

        let reconciler = AssetReconciler::with_converter(layout.clone(), self.converter.clone());
        let entries = layout.list_entries(&catalog_root)?;
        let records = reconciler.reconcile(&entries.paths);
        let mut failures = walk_failures(&catalog_root, entries.errors);

        let discovered = self.config.source_filter().discover(source_root)?;
        failures.extend(walk_failures(source_root, discovered.errors));
        let loaded: Vec<_> = discovered
            .paths
            .par_iter()
            .map(|path| SourceDocument::load(path, &self.converter).map_err(|e| EntryFailure::new(path, e)))
            .collect();
        let mut documents = Vec::with_capacity(loaded.len());
        for result in loaded {
            match result {
                Ok(doc) => documents.push(doc),
                Err(failure) => {
                    warn!(path = %failure.path.display(), error = %failure.error, "skipping source document");
                    failures.push(failure);
                }
            }
        }

        let held: BTreeSet<CanonicalColor> =
            records.iter().filter(|r| r.is_preserved()).map(|r| r.color).collect();
        let colors: BTreeSet<CanonicalColor> = documents
            .iter()
            .flat_map(|doc| doc.colors().iter().copied())
            .filter(|color| !held.contains(color))
            .collect();
        let reserved: BTreeSet<String> = records
            .iter()
            .filter(|r| r.is_preserved())
            .filter_map(|r| r.current_name.clone())
            .collect();

        info!(
            entries = records.len(),
            documents = documents.len(),
            colors = colors.len(),
            "run planned"
        );
        Ok(RunPlan {
            layout,
            catalog_root,
            records,
            documents,
            colors,
            reserved,
            failures,
        })
    }

    /// Plans and commits in one step.
    pub fn run<N: ColorNamer + ?Sized>(&self, source_root: &Path, namer: &N) -> CatalogResult<RunReport> {
        self.plan(source_root)?.commit(namer)
    }
}

/// Walk errors as failures; an error without a path is charged to `root`.
fn walk_failures(root: &Path, errors: Vec<SourceError>) -> Vec<EntryFailure> {
    errors
        .into_iter()
        .map(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            EntryFailure::new(path, e)
        })
        .collect()
}

/// Everything a run decided, before any mutation.
#[derive(Debug)]
pub struct RunPlan {
    layout: CatalogLayout,
    catalog_root: PathBuf,
    records: Vec<AssetRecord>,
    documents: Vec<SourceDocument>,
    colors: BTreeSet<CanonicalColor>,
    reserved: BTreeSet<String>,
    failures: Vec<EntryFailure>,
}

impl RunPlan {
    /// Catalog root the run writes to.
    pub fn catalog_root(&self) -> &Path {
        &self.catalog_root
    }

    /// Classified catalog entries.
    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    /// Loaded source documents.
    pub fn documents(&self) -> &[SourceDocument] {
        &self.documents
    }

    /// Colors that get a new entry.
    pub fn colors(&self) -> &BTreeSet<CanonicalColor> {
        &self.colors
    }

    /// Names held by preserved entries.
    pub fn reserved_names(&self) -> &BTreeSet<String> {
        &self.reserved
    }

    /// Unreadable subtrees and source documents that could not be loaded.
    pub fn failures(&self) -> &[EntryFailure] {
        &self.failures
    }

    /// Applies the plan.
    ///
    /// Only a failure to create the catalog root is returned as an error;
    /// everything else lands in [`RunReport::failures`].
    pub fn commit<N: ColorNamer + ?Sized>(self, namer: &N) -> CatalogResult<RunReport> {
        let writer = CatalogWriter::new(self.layout.clone());
        writer.create_root(&self.catalog_root)?;

        let reconciler = AssetReconciler::new(self.layout);
        let mut failures = self.failures;

        let deleted = reconciler.delete_machine_generated(&self.records);
        failures.extend(deleted.failures);
        let adopted = reconciler.persist_provenance(&self.records);
        failures.extend(adopted.failures);

        let mut documents_rewritten = Vec::new();
        for doc in &self.documents {
            match doc.save() {
                Ok(true) => documents_rewritten.push(doc.path().to_path_buf()),
                Ok(false) => {}
                Err(e) => {
                    warn!(path = %doc.path().display(), error = %e, "cannot write source document");
                    failures.push(EntryFailure::new(doc.path(), e));
                }
            }
        }

        let mut created = Vec::new();
        for named in namer.assign_names(&self.colors, &self.reserved) {
            match writer.write(&self.catalog_root, named.color, &named.name) {
                Ok(path) => created.push(path),
                Err(e) => {
                    warn!(name = %named.name, error = %e, "cannot create entry");
                    let path = writer.layout().entry_dir(&self.catalog_root, &named.name);
                    failures.push(EntryFailure::new(path, e));
                }
            }
        }

        let report = RunReport {
            catalog_root: self.catalog_root,
            deleted: deleted.done,
            preserved: self.records.iter().filter(|r| r.is_preserved()).count(),
            provenance_updated: adopted.done,
            documents_rewritten,
            created,
            failures,
        };
        info!(
            deleted = report.deleted.len(),
            preserved = report.preserved,
            created = report.created.len(),
            failed = report.failures.len(),
            "run committed"
        );
        Ok(report)
    }
}

/// What a committed run did.
#[derive(Debug)]
pub struct RunReport {
    /// Catalog root written to.
    pub catalog_root: PathBuf,
    /// Removed `original` entries.
    pub deleted: Vec<PathBuf>,
    /// Number of user entries kept.
    pub preserved: usize,
    /// Entries whose provenance was rewritten.
    pub provenance_updated: Vec<PathBuf>,
    /// Source documents written back.
    pub documents_rewritten: Vec<PathBuf>,
    /// New entries.
    pub created: Vec<PathBuf>,
    /// Everything that failed, with its path.
    pub failures: Vec<EntryFailure>,
}

impl RunReport {
    /// Returns `true` when nothing failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
