//! Display handle management for loaded photos.
//!
//! Decoded RGB8 pixel data is held behind opaque handles issued by
//! [`DisplayHandleStore`]. Every acquire is a fresh handle, even for
//! identical bytes, and each handle must be released exactly once when its
//! photo leaves the collection.

use crate::error::{AppError, Result};
use log::{debug, warn};
use std::collections::HashMap;

/// Opaque reference to a decoded image held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandle(u64);

/// Decoded RGB8 image data ready for display.
#[derive(Clone)]
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Issues and tracks display handles for decoded images.
#[derive(Default)]
pub struct DisplayHandleStore {
    entries: HashMap<u64, DecodedImage>,
    next_id: u64,
}

impl DisplayHandleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the bytes and issues a fresh handle for the result.
    pub fn acquire(&mut self, bytes: &[u8]) -> Result<DisplayHandle> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| AppError::ImageLoad(e.to_string()))?
            .to_rgb8();

        let (width, height) = decoded.dimensions();
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            id,
            DecodedImage {
                data: decoded.into_raw(),
                width,
                height,
            },
        );

        debug!("Handle acquired: {} ({}x{})", id, width, height);
        Ok(DisplayHandle(id))
    }

    /// Releases a previously issued handle.
    ///
    /// Releasing an unknown or already-released handle is a logged no-op.
    pub fn release(&mut self, handle: DisplayHandle) {
        if self.entries.remove(&handle.0).is_some() {
            debug!("Handle released: {}", handle.0);
        } else {
            warn!("Release of unknown or already-released handle: {}", handle.0);
        }
    }

    /// Looks up the decoded image behind a handle.
    pub fn get(&self, handle: DisplayHandle) -> Option<&DecodedImage> {
        self.entries.get(&handle.0)
    }

    /// Number of handles currently live.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::png_bytes;

    #[test]
    fn acquire_issues_fresh_handles_even_for_identical_bytes() {
        let mut store = DisplayHandleStore::new();
        let bytes = png_bytes();

        let first = store.acquire(&bytes).unwrap();
        let second = store.acquire(&bytes).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.active_count(), 2);
        assert_eq!(store.get(first).unwrap().width, 2);
        assert_eq!(store.get(first).unwrap().height, 2);
    }

    #[test]
    fn release_drops_the_entry_exactly_once() {
        let mut store = DisplayHandleStore::new();
        let handle = store.acquire(&png_bytes()).unwrap();

        store.release(handle);
        assert_eq!(store.active_count(), 0);
        assert!(store.get(handle).is_none());

        // Double release is tolerated.
        store.release(handle);
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn acquire_rejects_undecodable_bytes() {
        let mut store = DisplayHandleStore::new();
        let result = store.acquire(b"definitely not an image");

        assert!(matches!(result, Err(AppError::ImageLoad(_))));
        assert_eq!(store.active_count(), 0);
    }
}
