//! Application configuration constants.

/// Mime types, by lowercased file extension, for the formats the culler accepts.
pub const IMAGE_MIME_TYPES: [(&str, &str); 6] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
];

/// Mime type assigned to files with an unknown or missing extension.
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Suggested file name for the manifest export.
pub const MANIFEST_FILE_NAME: &str = "selected_photos.csv";

/// Suggested file name for the archive export.
pub const ARCHIVE_FILE_NAME: &str = "selected_photos.zip";

pub const CSV_CONTENT_TYPE: &str = "text/csv";

pub const ZIP_CONTENT_TYPE: &str = "application/zip";
