use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key/value storage.
pub trait StorageBackend {
    /// Returns Ok(None) if nothing is stored under `key`.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Where `key` lives. For FsBackend, the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}
