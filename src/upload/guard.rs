//! Upload acceptance checks
//!
//! Checks run in a fixed order and stop at the first failure: an upload
//! is rejected outright, so only the first reason is reported.

use super::errors::{UploadError, UploadResult};
use super::types::FileDescriptor;

/// The only media type accepted for submissions
pub const ACCEPTED_MEDIA_TYPE: &str = "application/pdf";

/// Size ceiling for one upload (50 MiB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Longest accepted file name, in characters
pub const MAX_FILE_NAME_LEN: usize = 255;

/// Characters never accepted in a file name
const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Validates upload metadata against the fixed acceptance policy.
///
/// Check order: media type, byte size, name well-formedness, forbidden
/// name patterns.
pub fn validate_file_upload(descriptor: &FileDescriptor) -> UploadResult<()> {
    if descriptor.media_type != ACCEPTED_MEDIA_TYPE {
        return Err(UploadError::UnsupportedMediaType);
    }

    if descriptor.size > MAX_FILE_SIZE {
        return Err(UploadError::FileTooLarge);
    }

    let name = descriptor.name.as_str();
    if name.is_empty() || name.chars().count() > MAX_FILE_NAME_LEN {
        return Err(UploadError::InvalidFileName);
    }

    if has_forbidden_pattern(name) {
        return Err(UploadError::InvalidFileName);
    }

    Ok(())
}

/// Checks a file name against the forbidden pattern list: traversal
/// sequences, reserved characters, hidden-file prefix, NUL bytes.
fn has_forbidden_pattern(name: &str) -> bool {
    name.contains("..")
        || name.contains(FORBIDDEN_NAME_CHARS)
        || name.starts_with('.')
        || name.contains('\0')
}
