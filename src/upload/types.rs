//! Upload metadata

use serde::{Deserialize, Serialize};

/// Metadata describing one upload request.
///
/// Only metadata crosses this boundary: the declared media type, the
/// byte size and the client-supplied file name. Byte content is never
/// inspected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Declared media type (e.g. `application/pdf`)
    pub media_type: String,
    /// Payload size in bytes
    pub size: u64,
    /// Client-supplied file name
    pub name: String,
}

impl FileDescriptor {
    /// Create a new descriptor
    pub fn new(media_type: impl Into<String>, size: u64, name: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            size,
            name: name.into(),
        }
    }
}
