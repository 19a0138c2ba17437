use crate::changelog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RelnotesError, Result};
use crate::store::DocumentStore;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$")
        .expect("valid semver pattern")
});

pub fn validate_version(version: &str) -> Result<()> {
    if SEMVER_RE.is_match(version) {
        Ok(())
    } else {
        Err(RelnotesError::InvalidInput(format!(
            "'{}' is not a semantic version (expected e.g. 1.4.0)",
            version
        )))
    }
}

pub fn run<S: DocumentStore>(
    store: &mut S,
    changelog_path: &Path,
    version: &str,
    notes_path: &Path,
) -> Result<CmdResult> {
    validate_version(version)?;

    let document = store.read(changelog_path)?;
    let notes = store.read(notes_path)?;

    if changelog::has_section(&document, version) {
        return Err(RelnotesError::InvalidInput(format!(
            "{} already has a '{}' section",
            changelog_path.display(),
            changelog::heading(version)
        )));
    }

    let had_pending = changelog::has_section(&document, changelog::PENDING_SECTION);
    let updated = changelog::update(&document, version, &notes);
    debug!(
        version,
        had_pending,
        before = document.len(),
        after = updated.len(),
        "changelog updated"
    );
    store.write(changelog_path, &updated)?;

    let mut result = CmdResult::default();
    if !had_pending {
        result.add_message(CmdMessage::info(format!(
            "No '{}' section found, added one",
            changelog::heading(changelog::PENDING_SECTION)
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Added '{}' to {}",
        changelog::heading(version),
        changelog_path.display()
    )));
    Ok(result.with_written(changelog_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    const CHANGELOG: &str =
        "# CHANGELOG\n\n## next\n\nSome manual notes here.\n\n## 0.0.59\n\n- Old entry\n";

    #[test]
    fn rewrites_changelog_in_place() {
        let mut store = InMemoryStore::new()
            .with_document("CHANGELOG.md", CHANGELOG)
            .with_document("notes.md", "- Release notes\n");

        run(
            &mut store,
            Path::new("CHANGELOG.md"),
            "0.0.60",
            Path::new("notes.md"),
        )
        .unwrap();

        let updated = store.read(Path::new("CHANGELOG.md")).unwrap();
        assert_eq!(
            changelog::extract(&updated, "0.0.60", false),
            "- Release notes\n"
        );
        assert_eq!(changelog::extract(&updated, "next", true), "");
        assert!(updated.ends_with("## 0.0.59\n\n- Old entry\n"));
    }

    #[test]
    fn rejects_duplicate_version() {
        let mut store = InMemoryStore::new()
            .with_document("CHANGELOG.md", CHANGELOG)
            .with_document("notes.md", "- again\n");

        let err = run(
            &mut store,
            Path::new("CHANGELOG.md"),
            "0.0.59",
            Path::new("notes.md"),
        )
        .unwrap_err();

        assert!(matches!(err, RelnotesError::InvalidInput(_)));
        assert_eq!(store.read(Path::new("CHANGELOG.md")).unwrap(), CHANGELOG);
    }

    #[test]
    fn rejects_non_semver() {
        assert!(validate_version("0.0.60").is_ok());
        assert!(validate_version("1.0.0-rc.1+build.5").is_ok());
        assert!(validate_version("v1.0.0").is_err());
        assert!(validate_version("1.0").is_err());
        assert!(validate_version("").is_err());
    }

    #[test]
    fn reports_added_pending_section() {
        let mut store = InMemoryStore::new()
            .with_document("CHANGELOG.md", "# CHANGELOG\n\n## 0.1.0\n\n- x\n")
            .with_document("notes.md", "- y\n");

        let result = run(
            &mut store,
            Path::new("CHANGELOG.md"),
            "0.2.0",
            Path::new("notes.md"),
        )
        .unwrap();

        assert_eq!(result.messages.len(), 2);
        assert!(store
            .read(Path::new("CHANGELOG.md"))
            .unwrap()
            .contains("## next\n"));
    }

    #[test]
    fn missing_notes_leave_changelog_untouched() {
        let mut store = InMemoryStore::new().with_document("CHANGELOG.md", CHANGELOG);

        let err = run(
            &mut store,
            Path::new("CHANGELOG.md"),
            "0.0.60",
            Path::new("notes.md"),
        )
        .unwrap_err();

        assert!(matches!(err, RelnotesError::DocumentNotFound(_)));
        assert_eq!(store.read(Path::new("CHANGELOG.md")).unwrap(), CHANGELOG);
    }
}
