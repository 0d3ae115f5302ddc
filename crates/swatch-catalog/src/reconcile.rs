//! Catalog reconciliation: classify, delete machine entries, adopt user entries.
//!
//! [`AssetReconciler::reconcile`] only reads. The two mutating steps,
//! [`AssetReconciler::delete_machine_generated`] and
//! [`AssetReconciler::persist_provenance`], take the finished records, so the
//! whole catalog is classified before anything on disk changes.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use swatch_color::{CatalogLookup, ColorSpaceConverter, NoCatalog};
use tracing::{debug, info, trace, warn};

use crate::asset::AssetRecord;
use crate::contents::StoredColor;
use crate::error::{CatalogError, CatalogResult};
use crate::layout::CatalogLayout;
use crate::provenance::Provenance;

/// A per-entry storage failure; the batch continues past it.
#[derive(Debug)]
pub struct EntryFailure {
    /// Entry or document the failure belongs to.
    pub path: PathBuf,
    /// What went wrong.
    pub error: CatalogError,
}

impl EntryFailure {
    /// Wraps an error for `path`.
    pub fn new(path: impl Into<PathBuf>, error: impl Into<CatalogError>) -> Self {
        Self {
            path: path.into(),
            error: error.into(),
        }
    }
}

/// Outcome of a mutating batch step.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Entries successfully processed.
    pub done: Vec<PathBuf>,
    /// Entries that failed.
    pub failures: Vec<EntryFailure>,
}

/// Reads catalog entries and applies lifecycle decisions.
#[derive(Debug, Clone, Default)]
pub struct AssetReconciler<L = NoCatalog> {
    layout: CatalogLayout,
    converter: ColorSpaceConverter<L>,
}

impl AssetReconciler {
    /// Reconciler without catalog name lookup.
    pub fn new(layout: CatalogLayout) -> Self {
        Self {
            layout,
            converter: ColorSpaceConverter::new(),
        }
    }
}

impl<L: CatalogLookup> AssetReconciler<L> {
    /// Reconciler decoding stored colors with `converter`.
    pub fn with_converter(layout: CatalogLayout, converter: ColorSpaceConverter<L>) -> Self {
        Self { layout, converter }
    }

    /// Layout in use.
    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    /// Lists and classifies every entry below `root`.
    ///
    /// Fails on the first unreadable subtree rather than return a partial
    /// catalog.
    pub fn scan(&self, root: &Path) -> CatalogResult<Vec<AssetRecord>> {
        let entries = self.layout.list_entries(root)?.into_complete()?;
        Ok(self.reconcile(&entries))
    }

    /// Classifies existing entries, in input order.
    ///
    /// Never fails: unreadable content decodes to zero and unreadable
    /// provenance to its defaults.
    pub fn reconcile(&self, entries: &[PathBuf]) -> Vec<AssetRecord> {
        trace!(count = entries.len(), "reconciling catalog entries");
        let records: Vec<AssetRecord> = entries.par_iter().map(|entry| self.record(entry)).collect();
        debug!(
            original = records.iter().filter(|r| r.lifecycle.is_machine_generated()).count(),
            preserved = records.iter().filter(|r| r.is_preserved()).count(),
            "catalog classified"
        );
        records
    }

    /// Classifies one entry directory.
    pub fn record(&self, entry: &Path) -> AssetRecord {
        let color = StoredColor::read(&self.layout.contents_path(entry)).decode(&self.converter);
        let provenance = Provenance::read(&self.layout.sidecar_path(entry));
        let record = AssetRecord::new(
            entry.to_path_buf(),
            self.layout.entry_name(entry),
            provenance.as_ref(),
            color,
        );
        trace!(entry = %entry.display(), lifecycle = %record.lifecycle, "entry classified");
        record
    }

    /// Removes the directory of every `original` record.
    pub fn delete_machine_generated(&self, records: &[AssetRecord]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for record in records.iter().filter(|r| r.lifecycle.is_machine_generated()) {
            match fs::remove_dir_all(&record.location) {
                Ok(()) => outcome.done.push(record.location.clone()),
                Err(e) => {
                    warn!(entry = %record.location.display(), error = %e, "cannot delete entry");
                    outcome
                        .failures
                        .push(EntryFailure::new(&record.location, CatalogError::io(&record.location, e)));
                }
            }
        }
        info!(deleted = outcome.done.len(), failed = outcome.failures.len(), "machine entries removed");
        outcome
    }

    /// Marks every `customAdded` and `customRenamed` record as user owned
    /// under its current name.
    pub fn persist_provenance(&self, records: &[AssetRecord]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for record in records.iter().filter(|r| r.lifecycle.needs_provenance()) {
            let sidecar = self.layout.sidecar_path(&record.location);
            match record.user_provenance().write(&sidecar) {
                Ok(()) => outcome.done.push(record.location.clone()),
                Err(e) => {
                    warn!(entry = %record.location.display(), error = %e, "cannot write provenance");
                    outcome.failures.push(EntryFailure::new(&record.location, e));
                }
            }
        }
        info!(adopted = outcome.done.len(), failed = outcome.failures.len(), "user entries adopted");
        outcome
    }
}
