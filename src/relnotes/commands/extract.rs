use crate::changelog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::Path;

pub fn run<S: DocumentStore>(
    store: &mut S,
    changelog_path: &Path,
    section: &str,
    strip_comments: bool,
    output: Option<&Path>,
) -> Result<CmdResult> {
    let document = store.read(changelog_path)?;
    let body = changelog::extract(&document, section, strip_comments);

    let mut result = CmdResult::default();
    if body.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Section '{}' is missing or empty in {}",
            changelog::heading(section),
            changelog_path.display()
        )));
    }

    match output {
        Some(path) => {
            store.write(path, &body)?;
            result.add_message(CmdMessage::success(format!(
                "Wrote '{}' to {}",
                changelog::heading(section),
                path.display()
            )));
            Ok(result.with_written(path.to_path_buf()))
        }
        None => Ok(result.with_output(body)),
    }
}
