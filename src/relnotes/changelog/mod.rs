//! # Changelog Transforms
//!
//! Pure text functions over changelog documents. Nothing in here touches the
//! file system; the command layer reads documents through a
//! [`DocumentStore`](crate::store::DocumentStore) and hands the text in.
//!
//! A document is a sequence of lines. The only structure recognized is the
//! second-level heading: a line starting with `"## "` opens a section that runs
//! until the next such line or the end of the document. Headings are compared
//! by exact trimmed equality, so `0.0.6` never matches `## 0.0.60`.
//!
//! - [`section`]: pull the body of one section out of a document
//! - [`notes`]: merge manual and generated release notes
//! - [`update`]: rotate the pending section into a new version entry

pub mod notes;
pub mod section;
pub mod update;

/// Prefix shared by every section heading.
pub const SECTION_PREFIX: &str = "## ";

/// Name of the section that collects notes for the next, unreleased version.
pub const PENDING_SECTION: &str = "next";

/// Comment left under the pending heading after each release.
pub const PENDING_PLACEHOLDER: &str = "<!-- Add notes for the next release here. -->";

pub use notes::merge;
pub use section::{extract, strip_comments};
pub use update::{pending_template, update};

/// Returns the heading line for a section name, e.g. `## 0.0.60`.
pub fn heading(name: &str) -> String {
    format!("{}{}", SECTION_PREFIX, name.trim())
}

/// True when the changelog already has a section with exactly this name.
pub fn has_section(document: &str, name: &str) -> bool {
    let target = heading(name);
    document.lines().any(|line| line.trim() == target)
}
