//! The photo collection: ordered records, selection flags, and the
//! navigation cursor.
//!
//! The collection owns the display-handle lifecycle of its records: a batch
//! replacement or teardown releases every handle exactly once before the
//! records are dropped.

use crate::display_handle::{DisplayHandle, DisplayHandleStore};
use crate::ingest::IngestedFile;
use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

/// Direction for navigating through photos.
#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

/// One ingested photo plus its selection flag and display handle.
pub struct Photo {
    /// Unique within a collection; disambiguates same-named files.
    pub id: String,
    /// Original file name, extension included (used for archive entries).
    pub file_name: String,
    /// File name with the extension stripped (used in UI and manifest).
    pub display_name: String,
    /// Original file content; only copied out at archive-export time.
    pub bytes: Arc<Vec<u8>>,
    pub handle: DisplayHandle,
    pub selected: bool,
}

/// Ordered photo records with a circular navigation cursor.
///
/// The cursor is `None` exactly when the collection is empty, and always a
/// valid index otherwise.
#[derive(Default)]
pub struct PhotoCollection {
    photos: Vec<Photo>,
    cursor: Option<usize>,
}

impl PhotoCollection {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection with a fresh batch.
    ///
    /// The previous batch's handles are released first, so back-to-back
    /// loads never leak. Non-image entries are filtered out; files that
    /// fail to decode are skipped with a warning. The cursor lands on the
    /// first photo, or `None` for an empty result.
    pub fn load(&mut self, files: Vec<IngestedFile>, store: &mut DisplayHandleStore) {
        self.teardown(store);

        let mut photos: Vec<Photo> = Vec::new();
        for file in files {
            if !file.mime_type.starts_with("image/") {
                debug!("Filtering non-image file: {}", file.name);
                continue;
            }

            let handle = match store.acquire(&file.bytes) {
                Ok(handle) => handle,
                Err(e) => {
                    warn!("Skipping undecodable image {}: {}", file.name, e);
                    continue;
                }
            };

            let id = format!("{}-{}-{}", file.name, file.modified_millis, photos.len());
            debug!("Ingested photo {}", id);
            let display_name = Path::new(&file.name)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.name.clone());

            photos.push(Photo {
                id,
                file_name: file.name,
                display_name,
                bytes: Arc::new(file.bytes),
                handle,
                selected: false,
            });
        }

        self.cursor = if photos.is_empty() { None } else { Some(0) };
        self.photos = photos;
    }

    /// Releases every display handle and empties the collection.
    pub fn teardown(&mut self, store: &mut DisplayHandleStore) {
        for photo in self.photos.drain(..) {
            store.release(photo.handle);
        }
        self.cursor = None;
    }

    /// Moves the cursor one step, wrapping around at both ends.
    ///
    /// Returns the new cursor index, or `None` (no-op) on an empty
    /// collection.
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let len = self.photos.len();
        if len == 0 {
            warn!("No photos available for navigation");
            return None;
        }

        let current = self.cursor.unwrap_or(0);
        let new_index = match direction {
            Direction::Forward => (current + 1) % len,
            Direction::Backward => (current + len - 1) % len,
        };

        self.cursor = Some(new_index);
        Some(new_index)
    }

    /// Flips the selection flag of the photo at `index`.
    ///
    /// Out-of-range indices are a silent no-op.
    pub fn toggle_selected(&mut self, index: usize) {
        match self.photos.get_mut(index) {
            Some(photo) => photo.selected = !photo.selected,
            None => debug!("Toggle ignored for out-of-range index {}", index),
        }
    }

    /// Flips the selection flag of the photo under the cursor.
    ///
    /// Returns the new selection state, or `None` when the collection is
    /// empty.
    pub fn toggle_current(&mut self) -> Option<bool> {
        let index = self.cursor?;
        self.toggle_selected(index);
        self.photos.get(index).map(|photo| photo.selected)
    }

    /// Ordered view over the photos with `selected == true`.
    pub fn selected_photos(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter().filter(|photo| photo.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_photos().count()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Current cursor position; `None` when the collection is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The photo under the cursor, if any.
    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.cursor?)
    }

    pub fn photo(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }
}
