use crate::changelog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::Path;

pub fn run<S: DocumentStore>(
    store: &mut S,
    manual: &Path,
    generated: &Path,
    fallback: &str,
    output: &Path,
) -> Result<CmdResult> {
    // Both sources are read before anything is written.
    let manual_notes = store.read(manual)?;
    let generated_notes = store.read(generated)?;

    let merged = changelog::merge(&manual_notes, &generated_notes, fallback);
    store.write(output, &merged)?;

    let mut result = CmdResult::default();
    if manual_notes.trim().is_empty() && generated_notes.trim().is_empty() {
        result.add_message(CmdMessage::info("Both note sources are empty, using fallback text"));
    }
    result.add_message(CmdMessage::success(format!(
        "Release notes written to {}",
        output.display()
    )));
    Ok(result.with_written(output.to_path_buf()))
}
