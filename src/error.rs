//! Unified error types for the photo culling application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error decoding an image file into display pixels
    ImageLoad(String),
    /// Error reading a picked file from disk
    Ingest(String),
    /// An export was requested with zero photos selected
    EmptySelection,
    /// Error assembling the zip archive
    ArchiveExport(String),
    /// Error writing an export payload to its destination
    FileSave(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::Ingest(msg) => write!(f, "File ingestion error: {}", msg),
            AppError::EmptySelection => write!(f, "No photos selected to export"),
            AppError::ArchiveExport(msg) => write!(f, "Archive export error: {}", msg),
            AppError::FileSave(msg) => write!(f, "File save error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Ingest(err.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::ArchiveExport(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
