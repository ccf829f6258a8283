//! Converts display handles into Slint images and refreshes the photo view.

use crate::display_handle::{DecodedImage, DisplayHandleStore};
use crate::state::PhotoCollection;
use slint::{ComponentHandle, Rgb8Pixel, SharedPixelBuffer};

/// Wraps decoded RGB8 data in a `slint::Image`.
pub fn create_slint_image(decoded: &DecodedImage) -> slint::Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(
        &decoded.data,
        decoded.width,
        decoded.height,
    );
    slint::Image::from_rgb8(buffer)
}

/// Repaints everything derived from the collection: the current photo, the
/// filmstrip of selected photos, and the counters.
pub fn refresh_photo_view(
    ui: &crate::AppWindow,
    collection: &PhotoCollection,
    store: &DisplayHandleStore,
) {
    let viewer_state = ui.global::<crate::ViewerState>();

    let current_image = collection
        .current()
        .and_then(|photo| store.get(photo.handle))
        .map(create_slint_image)
        .unwrap_or_default();
    viewer_state.set_current_image(current_image);

    let thumbnails: Vec<slint::Image> = collection
        .selected_photos()
        .filter_map(|photo| store.get(photo.handle))
        .map(create_slint_image)
        .collect();
    viewer_state.set_selected_thumbnails(slint::ModelRc::new(slint::VecModel::from(thumbnails)));

    crate::ui::set_collection_info(ui, collection);
}
