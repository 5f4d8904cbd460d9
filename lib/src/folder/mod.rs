//! Resolution of a path into a chain of folders of the drive

pub mod create;
pub mod ensure;
pub mod exists;

/// Conflict policy applied when creating a folder: the provider picks a new name
/// when an item with the same name already exists.
pub const CONFLICT_BEHAVIOR: &str = "rename";
