//! File-save sink: hands an export payload to the user as a named file.

use crate::config;
use crate::error::{AppError, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Outcome of a save request.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user dismissed the save dialog; not an error.
    Cancelled,
}

/// Opaque "save these bytes under this name" boundary.
///
/// Exports go through this trait so the service layer can be exercised
/// without opening dialogs.
pub trait FileSaveSink {
    fn save(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> Result<SaveOutcome>;
}

/// Production sink: a native save dialog pre-filled with the suggested
/// file name, then a plain filesystem write.
///
/// Must be called on the event-loop thread (the dialog blocks it while
/// open, like any modal dialog).
pub struct DialogFileSaveSink;

impl FileSaveSink for DialogFileSaveSink {
    fn save(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> Result<SaveOutcome> {
        let mut dialog = rfd::FileDialog::new().set_file_name(file_name);
        if content_type == config::CSV_CONTENT_TYPE {
            dialog = dialog.add_filter("CSV", &["csv"]);
        } else if content_type == config::ZIP_CONTENT_TYPE {
            dialog = dialog.add_filter("Zip archive", &["zip"]);
        }

        let Some(path) = dialog.save_file() else {
            info!("Save of {} cancelled by user", file_name);
            return Ok(SaveOutcome::Cancelled);
        };

        fs::write(&path, bytes)
            .map_err(|e| AppError::FileSave(format!("{}: {}", path.display(), e)))?;

        info!("Saved {} ({} bytes) to {:?}", file_name, bytes.len(), path);
        Ok(SaveOutcome::Saved(path))
    }
}
