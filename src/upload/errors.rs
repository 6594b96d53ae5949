//! Upload rejection errors

use thiserror::Error;

/// Result type for upload acceptance checks
pub type UploadResult<T> = Result<T, UploadError>;

/// Why an upload was rejected.
///
/// The `Display` text is shown directly to the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Only PDF files are allowed")]
    UnsupportedMediaType,

    #[error("File size must be less than 50MB")]
    FileTooLarge,

    #[error("Invalid file name")]
    InvalidFileName,
}

impl UploadError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            UploadError::UnsupportedMediaType => 415,
            UploadError::FileTooLarge => 413,
            UploadError::InvalidFileName => 400,
        }
    }
}
