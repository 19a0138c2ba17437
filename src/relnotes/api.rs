//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for the changelog operations, whatever UI drives them.
//!
//! The facade dispatches to `commands/*.rs` and returns structured
//! `Result<CmdResult>` values. It does no business logic, no terminal I/O and no
//! formatting.
//!
//! `RelnotesApi<S: DocumentStore>` is generic over the storage backend:
//! `RelnotesApi<FileStore>` in production, `RelnotesApi<InMemoryStore>` in
//! tests.

use crate::commands;
use crate::config::RelnotesConfig;
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

pub struct RelnotesApi<S: DocumentStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DocumentStore> RelnotesApi<S> {
    pub fn new(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            config_dir: config_dir.into(),
        }
    }

    /// Project defaults, falling back to built-ins when no config file exists.
    pub fn load_config(&self) -> Result<RelnotesConfig> {
        RelnotesConfig::load(&self.config_dir)
    }

    pub fn extract_section(
        &mut self,
        changelog: &Path,
        section: &str,
        strip_comments: bool,
        output: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::extract::run(&mut self.store, changelog, section, strip_comments, output)
    }

    pub fn merge_notes(
        &mut self,
        manual: &Path,
        generated: &Path,
        fallback: &str,
        output: &Path,
    ) -> Result<commands::CmdResult> {
        commands::merge::run(&mut self.store, manual, generated, fallback, output)
    }

    pub fn update_changelog(
        &mut self,
        changelog: &Path,
        version: &str,
        notes: &Path,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, changelog, version.trim(), notes)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::tempdir;

    const CHANGELOG: &str = "# CHANGELOG\n\n## next\n\n- wip\n\n## 1.0.0\n\n- one\n";

    fn api() -> (RelnotesApi<InMemoryStore>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = InMemoryStore::new()
            .with_document("CHANGELOG.md", CHANGELOG)
            .with_document("notes.md", "- two\n");
        (RelnotesApi::new(store, dir.path()), dir)
    }

    #[test]
    fn extract_dispatches_to_store() {
        let (mut api, _dir) = api();
        let result = api
            .extract_section(Path::new("CHANGELOG.md"), "1.0.0", false, None)
            .unwrap();
        assert_eq!(result.output.as_deref(), Some("- one\n"));
    }

    #[test]
    fn update_trims_version() {
        let (mut api, _dir) = api();
        api.update_changelog(Path::new("CHANGELOG.md"), " 1.1.0 ", Path::new("notes.md"))
            .unwrap();
        let doc = api.store().read(Path::new("CHANGELOG.md")).unwrap();
        assert!(doc.contains("\n## 1.1.0\n\n- two\n"));
    }

    #[test]
    fn config_uses_config_dir() {
        let (api, dir) = api();
        api.config(ConfigAction::Set("changelog".into(), "HISTORY.md".into()))
            .unwrap();
        assert_eq!(api.load_config().unwrap().changelog, "HISTORY.md");
        assert!(dir.path().join("config.json").is_file());
    }
}
