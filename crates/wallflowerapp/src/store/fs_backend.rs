use super::backend::StorageBackend;
use crate::error::{Result, WallflowerError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `wf:search:filters` -> `wf_search_filters.json`
    fn entry_filename(key: &str) -> String {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}.json", stem)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WallflowerError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.location(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(WallflowerError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(WallflowerError::Store("Storage key cannot be empty".to_string()));
        }
        self.ensure_dir()?;

        let target = self.location(key);

        // Atomic Write
        let tmp = self.root.join(format!(".entry-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, value).map_err(WallflowerError::Io)?;
        fs::rename(&tmp, target).map_err(WallflowerError::Io)?;

        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.root.join(Self::entry_filename(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_filename_sanitizes_key() {
        assert_eq!(
            FsBackend::entry_filename("wf:search:filters"),
            "wf_search_filters.json"
        );
        assert_eq!(FsBackend::entry_filename("../etc"), "___etc.json");
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert!(matches!(
            backend.write("", "x"),
            Err(WallflowerError::Store(_))
        ));
    }
}
