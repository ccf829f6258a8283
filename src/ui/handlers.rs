//! Event handlers for UI callbacks.
//!
//! Registers all Logic callbacks (load-photos, next/prev, toggle-selected,
//! both exports) using the appropriate threading model for each operation
//! type. The callbacks live exactly as long as the window, so the keyboard
//! commands they serve never outlive the view.

use crate::config;
use crate::display_handle::DisplayHandleStore;
use crate::error::AppError;
use crate::file_save::{DialogFileSaveSink, FileSaveSink, SaveOutcome};
use crate::ingest;
use crate::services::{ExportService, NavigationService};
use crate::state::{AppState, PhotoCollection};
use crate::ui::image_display;
use log::debug;
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    let navigation = NavigationService::new(state.collection.clone());
    let export = ExportService::new(state.collection.clone(), state.archive_exporting.clone());

    setup_load_handler(ui, &state);
    setup_navigation_handlers(ui, &state, &navigation);
    setup_export_handlers(ui, &export);
}

/// Repaints the photo view from the current collection state.
fn refresh(
    ui_handle: &slint::Weak<crate::AppWindow>,
    collection: &Arc<Mutex<PhotoCollection>>,
    handles: &Arc<Mutex<DisplayHandleStore>>,
) {
    if let Some(ui) = ui_handle.upgrade() {
        let collection = collection.lock().unwrap();
        let store = handles.lock().unwrap();
        image_display::refresh_photo_view(&ui, &collection, &store);
    }
}

fn setup_load_handler(ui: &crate::AppWindow, state: &AppState) {
    // Uses slint::spawn_local because AsyncFileDialog must run on the main
    // thread; the batch is then read and decoded on a rayon worker.
    ui.global::<crate::Logic>().on_load_photos({
        let ui_handle = ui.as_weak();
        let collection = state.collection.clone();
        let handles = state.display_handles.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let collection = collection.clone();
            let handles = handles.clone();
            let _ = slint::spawn_local(async move {
                let extensions: Vec<&str> = config::IMAGE_MIME_TYPES
                    .iter()
                    .map(|(ext, _)| *ext)
                    .collect();
                let Some(picked) = AsyncFileDialog::new()
                    .add_filter("Images", &extensions)
                    .pick_files()
                    .await
                else {
                    debug!("Photo selection cancelled");
                    return;
                };

                let paths: Vec<PathBuf> = picked
                    .iter()
                    .map(|handle| handle.path().to_path_buf())
                    .collect();

                let picked_count = paths.len();
                rayon::spawn(move || {
                    let files = ingest::read_files(&paths);
                    {
                        let mut collection = collection.lock().unwrap();
                        let mut store = handles.lock().unwrap();
                        collection.load(files, &mut store);
                    }

                    let _ = slint::invoke_from_event_loop(move || {
                        let Some(ui) = ui_handle.upgrade() else {
                            return;
                        };
                        let loaded = {
                            let collection = collection.lock().unwrap();
                            let store = handles.lock().unwrap();
                            image_display::refresh_photo_view(&ui, &collection, &store);
                            collection.len()
                        };
                        if loaded == 0 {
                            crate::ui::set_status(&ui, "No image files in the selection");
                        } else {
                            crate::ui::set_status(
                                &ui,
                                &format!("Loaded {} of {} files", loaded, picked_count),
                            );
                        }
                    });
                });
            });
        }
    });
}

fn setup_navigation_handlers(
    ui: &crate::AppWindow,
    state: &AppState,
    navigation: &NavigationService,
) {
    // Next photo handler
    ui.global::<crate::Logic>().on_next_photo({
        let ui_handle = ui.as_weak();
        let navigation = navigation.clone();
        let collection = state.collection.clone();
        let handles = state.display_handles.clone();
        move || {
            if navigation.next().is_some() {
                refresh(&ui_handle, &collection, &handles);
            }
        }
    });

    // Previous photo handler
    ui.global::<crate::Logic>().on_prev_photo({
        let ui_handle = ui.as_weak();
        let navigation = navigation.clone();
        let collection = state.collection.clone();
        let handles = state.display_handles.clone();
        move || {
            if navigation.previous().is_some() {
                refresh(&ui_handle, &collection, &handles);
            }
        }
    });

    // Toggle-selected handler
    ui.global::<crate::Logic>().on_toggle_selected({
        let ui_handle = ui.as_weak();
        let navigation = navigation.clone();
        let collection = state.collection.clone();
        let handles = state.display_handles.clone();
        move || {
            if navigation.toggle_current().is_some() {
                refresh(&ui_handle, &collection, &handles);
            }
        }
    });
}

fn setup_export_handlers(ui: &crate::AppWindow, export: &ExportService) {
    // Manifest export: synchronous, the payload is tiny.
    ui.global::<crate::Logic>().on_export_manifest({
        let ui_handle = ui.as_weak();
        let export = export.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            match export.export_manifest(&DialogFileSaveSink) {
                Ok(success) => match success.outcome {
                    SaveOutcome::Saved(path) => crate::ui::set_status(
                        &ui,
                        &format!(
                            "Saved manifest of {} photos to {}",
                            success.entry_count,
                            path.display()
                        ),
                    ),
                    SaveOutcome::Cancelled => crate::ui::set_status(&ui, ""),
                },
                Err(e) => {
                    crate::ui::set_error_with_prefix(&ui, "Manifest export failed", e.to_string())
                }
            }
        }
    });

    // Archive export: zip assembly runs on a rayon worker while the
    // in-flight guard blocks a second build.
    ui.global::<crate::Logic>().on_export_archive({
        let ui_handle = ui.as_weak();
        let export = export.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            // Reject an empty selection before the in-flight flag is raised.
            if export.selected_count() == 0 {
                crate::ui::set_error_with_prefix(
                    &ui,
                    "Archive export failed",
                    AppError::EmptySelection.to_string(),
                );
                return;
            }

            let Some(guard) = export.try_begin_archive() else {
                return;
            };

            crate::ui::set_export_in_progress(&ui, true);
            crate::ui::set_status(&ui, "Building archive…");

            let export = export.clone();
            let ui_handle = ui_handle.clone();
            rayon::spawn(move || {
                let result = export.build_archive();

                let _ = slint::invoke_from_event_loop(move || {
                    // The guard lives to the end of this closure, so the
                    // in-flight flag clears on every path back to the loop.
                    let _guard = guard;
                    let Some(ui) = ui_handle.upgrade() else {
                        return;
                    };
                    crate::ui::set_export_in_progress(&ui, false);

                    match result {
                        Ok(bytes) => match DialogFileSaveSink.save(
                            config::ARCHIVE_FILE_NAME,
                            config::ZIP_CONTENT_TYPE,
                            &bytes,
                        ) {
                            Ok(SaveOutcome::Saved(path)) => crate::ui::set_status(
                                &ui,
                                &format!("Archive saved to {}", path.display()),
                            ),
                            Ok(SaveOutcome::Cancelled) => crate::ui::set_status(&ui, ""),
                            Err(e) => crate::ui::set_error_with_prefix(
                                &ui,
                                "Failed to save archive",
                                e.to_string(),
                            ),
                        },
                        Err(e) => crate::ui::set_error_with_prefix(
                            &ui,
                            "Failed to export archive",
                            e.to_string(),
                        ),
                    }
                });
            });
        }
    });
}
