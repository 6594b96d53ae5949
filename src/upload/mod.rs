//! Upload acceptance subsystem
//!
//! Gates PDF submissions on metadata alone: declared media type, byte
//! size and file name. Checks short-circuit at the first failure and the
//! rejection message is shown to the user as-is. File content is out of
//! scope; it never reaches this crate.

mod errors;
mod guard;
mod types;

pub use errors::{UploadError, UploadResult};
pub use guard::{validate_file_upload, ACCEPTED_MEDIA_TYPE, MAX_FILE_NAME_LEN, MAX_FILE_SIZE};
pub use types::FileDescriptor;
