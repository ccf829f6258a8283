//! State management for the photo culling application.

use crate::display_handle::DisplayHandleStore;
use std::sync::{Arc, Mutex};

pub mod collection;

pub use collection::{Direction, Photo, PhotoCollection};

/// Application-wide state container.
pub struct AppState {
    pub collection: Arc<Mutex<PhotoCollection>>,
    /// Store backing the display handles held by the collection.
    pub display_handles: Arc<Mutex<DisplayHandleStore>>,
    /// True while an archive export is in flight; gates concurrent builds.
    pub archive_exporting: Arc<Mutex<bool>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            collection: Arc::new(Mutex::new(PhotoCollection::new())),
            display_handles: Arc::new(Mutex::new(DisplayHandleStore::new())),
            archive_exporting: Arc::new(Mutex::new(false)),
        }
    }
}
