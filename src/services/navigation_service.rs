//! Service for cursor movement and selection toggling.

use crate::state::{Direction, PhotoCollection};
use std::sync::{Arc, Mutex};

/// Service dispatching the three culling commands against the collection.
#[derive(Clone)]
pub struct NavigationService {
    collection: Arc<Mutex<PhotoCollection>>,
}

impl NavigationService {
    /// Creates a new navigation service.
    pub fn new(collection: Arc<Mutex<PhotoCollection>>) -> Self {
        Self { collection }
    }

    /// Advances the cursor to the next photo, wrapping at the end.
    ///
    /// Returns the new cursor index, or `None` on an empty collection.
    pub fn next(&self) -> Option<usize> {
        self.collection.lock().unwrap().advance(Direction::Forward)
    }

    /// Moves the cursor to the previous photo, wrapping at the start.
    pub fn previous(&self) -> Option<usize> {
        self.collection.lock().unwrap().advance(Direction::Backward)
    }

    /// Toggles the selection flag of the photo under the cursor.
    ///
    /// Returns the new selection state, or `None` on an empty collection.
    pub fn toggle_current(&self) -> Option<bool> {
        self.collection.lock().unwrap().toggle_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_handle::DisplayHandleStore;
    use crate::test_utils::image_file;

    fn service_with_photos(count: usize) -> NavigationService {
        let mut store = DisplayHandleStore::new();
        let mut collection = PhotoCollection::new();
        let files = (0..count)
            .map(|i| image_file(&format!("photo{}.png", i)))
            .collect();
        collection.load(files, &mut store);
        NavigationService::new(Arc::new(Mutex::new(collection)))
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let service = service_with_photos(2);

        assert_eq!(service.next(), Some(1));
        assert_eq!(service.next(), Some(0));
        assert_eq!(service.previous(), Some(1));
    }

    #[test]
    fn toggle_current_flips_the_cursor_photo() {
        let service = service_with_photos(2);

        assert_eq!(service.toggle_current(), Some(true));
        assert_eq!(service.toggle_current(), Some(false));
    }

    #[test]
    fn commands_are_no_ops_on_an_empty_collection() {
        let service = NavigationService::new(Arc::new(Mutex::new(PhotoCollection::new())));

        assert_eq!(service.next(), None);
        assert_eq!(service.previous(), None);
        assert_eq!(service.toggle_current(), None);
    }
}
