use super::DocumentStore;
use crate::error::{RelnotesError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.documents.insert(path.into(), contents.to_string());
        self
    }
}

impl DocumentStore for InMemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| RelnotesError::DocumentNotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.documents
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_overwrites() {
        let mut store = InMemoryStore::new().with_document("a.md", "one");
        store.write(Path::new("a.md"), "two").unwrap();
        assert_eq!(store.read(Path::new("a.md")).unwrap(), "two");
    }

    #[test]
    fn missing_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.read(Path::new("x.md")),
            Err(RelnotesError::DocumentNotFound(_))
        ));
    }
}
