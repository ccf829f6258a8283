//! Service for exporting the selected subset of photos.
//!
//! Two independent operations over "the selected photos at call time":
//! a manifest of display names (CSV) and a zip archive of the original
//! files. Archive builds are gated by a single in-flight flag held by a
//! guard, so the flag is cleared on success, failure, and panic alike.

use crate::archive;
use crate::config;
use crate::error::{AppError, Result};
use crate::file_save::{FileSaveSink, SaveOutcome};
use crate::state::PhotoCollection;
use log::warn;
use std::sync::{Arc, Mutex};

/// Success information for a manifest export.
#[derive(Debug)]
pub struct ManifestSuccess {
    pub entry_count: usize,
    pub outcome: SaveOutcome,
}

/// Clears the archive-exporting flag when dropped.
pub struct ArchiveExportGuard {
    exporting: Arc<Mutex<bool>>,
}

impl Drop for ArchiveExportGuard {
    fn drop(&mut self) {
        if let Ok(mut exporting) = self.exporting.lock() {
            *exporting = false;
        }
    }
}

/// Service for manifest and archive exports.
#[derive(Clone)]
pub struct ExportService {
    collection: Arc<Mutex<PhotoCollection>>,
    exporting: Arc<Mutex<bool>>,
}

impl ExportService {
    /// Creates a new export service.
    pub fn new(collection: Arc<Mutex<PhotoCollection>>, exporting: Arc<Mutex<bool>>) -> Self {
        Self {
            collection,
            exporting,
        }
    }

    /// Number of photos currently selected.
    pub fn selected_count(&self) -> usize {
        self.collection.lock().unwrap().selected_count()
    }

    /// Exports the manifest: one display name per line, collection order.
    ///
    /// Returns [`AppError::EmptySelection`] without touching the sink when
    /// nothing is selected.
    pub fn export_manifest(&self, sink: &dyn FileSaveSink) -> Result<ManifestSuccess> {
        let names: Vec<String> = {
            let collection = self.collection.lock().unwrap();
            collection
                .selected_photos()
                .map(|photo| photo.display_name.clone())
                .collect()
        };

        if names.is_empty() {
            return Err(AppError::EmptySelection);
        }

        let payload = names.join("\n");
        let outcome = sink.save(
            config::MANIFEST_FILE_NAME,
            config::CSV_CONTENT_TYPE,
            payload.as_bytes(),
        )?;

        Ok(ManifestSuccess {
            entry_count: names.len(),
            outcome,
        })
    }

    /// Marks an archive export as in flight.
    ///
    /// Returns `None` while another export is already running; otherwise
    /// the returned guard keeps the flag set until it is dropped.
    pub fn try_begin_archive(&self) -> Option<ArchiveExportGuard> {
        let mut exporting = self.exporting.lock().unwrap();
        if *exporting {
            warn!("Archive export already in progress");
            return None;
        }
        *exporting = true;
        Some(ArchiveExportGuard {
            exporting: self.exporting.clone(),
        })
    }

    /// Whether an archive export is currently in flight.
    pub fn is_exporting(&self) -> bool {
        *self.exporting.lock().unwrap()
    }

    /// Builds the zip payload from the selected subset at call time.
    ///
    /// Each selected photo is packed under its original file name (not the
    /// extension-stripped display name). Safe to call from a worker thread;
    /// the collection lock is only held while the entries are copied out.
    pub fn build_archive(&self) -> Result<Vec<u8>> {
        self.build_archive_with(archive::pack)
    }

    /// Like [`Self::build_archive`], but with the archive packer supplied
    /// by the caller.
    fn build_archive_with<F>(&self, pack: F) -> Result<Vec<u8>>
    where
        F: FnOnce(&[(String, Arc<Vec<u8>>)]) -> Result<Vec<u8>>,
    {
        let entries: Vec<(String, Arc<Vec<u8>>)> = {
            let collection = self.collection.lock().unwrap();
            collection
                .selected_photos()
                .map(|photo| (photo.file_name.clone(), photo.bytes.clone()))
                .collect()
        };

        if entries.is_empty() {
            return Err(AppError::EmptySelection);
        }

        pack(&entries)
    }
}
