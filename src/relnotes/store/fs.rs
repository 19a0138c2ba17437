use super::DocumentStore;
use crate::error::{RelnotesError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads and writes documents relative to a base directory.
///
/// Absolute paths are used as given.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl DocumentStore for FileStore {
    fn read(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        debug!(path = %full.display(), "reading document");
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RelnotesError::DocumentNotFound(full),
            _ => RelnotesError::Io(e),
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        debug!(path = %full.display(), bytes = contents.len(), "writing document");
        fs::write(&full, contents)?;
        Ok(())
    }
}
