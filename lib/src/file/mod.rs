//! Transfer of the files: content upload and download link resolution

pub mod download;
pub mod upload;

/// Content type sent with an upload when the caller doesn't know it
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";
