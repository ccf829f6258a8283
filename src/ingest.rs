//! File ingestion: turns user-picked paths into in-memory file records.
//!
//! The collection only keeps entries whose mime type begins with `image/`;
//! everything else in a picked batch is filtered out further down the line.

use crate::config::{IMAGE_MIME_TYPES, UNKNOWN_MIME_TYPE};
use chrono::{DateTime, Utc};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// One picked file, read into memory with the metadata the collection needs.
pub struct IngestedFile {
    /// Original file name, extension included.
    pub name: String,
    /// Modification time as Unix milliseconds; 0 when the filesystem
    /// does not report one.
    pub modified_millis: i64,
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

/// Guesses the mime type of a path from its extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return UNKNOWN_MIME_TYPE;
    };
    let ext = ext.to_lowercase();
    IMAGE_MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

/// Reads the picked paths into [`IngestedFile`] records.
///
/// Unreadable entries are skipped with a warning rather than failing the
/// whole batch.
pub fn read_files(paths: &[PathBuf]) -> Vec<IngestedFile> {
    paths
        .iter()
        .filter_map(|path| match read_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("Skipping unreadable file {:?}: {}", path, e);
                None
            }
        })
        .collect()
}

fn read_file(path: &Path) -> crate::error::Result<IngestedFile> {
    let bytes = fs::read(path)?;

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());

    let modified_millis = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(|time| DateTime::<Utc>::from(time).timestamp_millis())
        .unwrap_or(0);

    Ok(IngestedFile {
        name,
        modified_millis,
        bytes,
        mime_type: mime_type_for(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_follows_extension_case_insensitively() {
        assert_eq!(mime_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("b.PNG")), "image/png");
        assert_eq!(mime_type_for(Path::new("c.webp")), "image/webp");
    }

    #[test]
    fn unknown_extensions_get_the_fallback_mime() {
        assert_eq!(mime_type_for(Path::new("notes.txt")), UNKNOWN_MIME_TYPE);
        assert_eq!(mime_type_for(Path::new("no_extension")), UNKNOWN_MIME_TYPE);
    }

    #[test]
    fn read_files_reads_content_and_skips_missing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("photo.png");
        fs::write(&good, b"not-really-a-png").unwrap();
        let missing = dir.path().join("gone.jpg");

        let files = read_files(&[good, missing]);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "photo.png");
        assert_eq!(files[0].mime_type, "image/png");
        assert_eq!(files[0].bytes, b"not-really-a-png");
        assert!(files[0].modified_millis > 0);
    }
}
