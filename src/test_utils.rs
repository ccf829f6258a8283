//! Shared helpers for unit tests.

use crate::error::Result;
use crate::file_save::{FileSaveSink, SaveOutcome};
use crate::ingest::IngestedFile;
use std::io::Cursor;
use std::sync::Mutex;

/// A tiny valid 2x2 PNG, encoded in memory.
pub fn png_bytes() -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(2, 2, image::Rgb([40, 90, 140]));
    let mut buffer = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .expect("encoding a fixture PNG never fails");
    buffer.into_inner()
}

/// An ingested record carrying decodable PNG bytes and an image mime type.
pub fn image_file(name: &str) -> IngestedFile {
    IngestedFile {
        name: name.to_string(),
        modified_millis: 1_700_000_000_000,
        bytes: png_bytes(),
        mime_type: "image/png",
    }
}

/// An ingested record with a non-image mime type.
pub fn text_file(name: &str) -> IngestedFile {
    IngestedFile {
        name: name.to_string(),
        modified_millis: 1_700_000_000_000,
        bytes: b"plain text".to_vec(),
        mime_type: "text/plain",
    }
}

/// Save sink that records every request instead of writing files.
#[derive(Default)]
pub struct RecordingSink {
    pub saves: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl FileSaveSink for RecordingSink {
    fn save(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> Result<SaveOutcome> {
        self.saves.lock().unwrap().push((
            file_name.to_string(),
            content_type.to_string(),
            bytes.to_vec(),
        ));
        Ok(SaveOutcome::Saved(std::path::PathBuf::from(file_name)))
    }
}
