//! Helper functions to set multiple ViewerState properties in a grouped manner.

use crate::state::PhotoCollection;
use log::error;
use slint::ComponentHandle;

/// Sets all collection-derived properties at once.
///
/// Groups: current-index, total-photos, selected-count, current-selected.
/// An empty collection maps to index -1.
pub fn set_collection_info(ui: &crate::AppWindow, collection: &PhotoCollection) {
    let viewer_state = ui.global::<crate::ViewerState>();
    let cursor = collection.cursor().map(|index| index as i32).unwrap_or(-1);
    viewer_state.set_current_index(cursor);
    viewer_state.set_total_photos(collection.len() as i32);
    viewer_state.set_selected_count(collection.selected_count() as i32);
    viewer_state.set_current_selected(
        collection
            .current()
            .map(|photo| photo.selected)
            .unwrap_or(false),
    );
}

/// Sets the archive-export in-progress flag shown by the controls bar.
pub fn set_export_in_progress(ui: &crate::AppWindow, in_progress: bool) {
    ui.global::<crate::ViewerState>().set_exporting(in_progress);
}

/// Sets the status line and clears any stale error.
pub fn set_status(ui: &crate::AppWindow, message: &str) {
    let viewer_state = ui.global::<crate::ViewerState>();
    viewer_state.set_status_message(message.into());
    viewer_state.set_error_message("".into());
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewerState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewerState>()
        .set_error_message(error_message.into());
}
