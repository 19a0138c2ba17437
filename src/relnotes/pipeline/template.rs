use crate::error::{RelnotesError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder pattern"));

/// Names of every `{name}` placeholder in `text`, in order.
pub fn placeholders(text: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Replaces `{name}` placeholders with values. Braces around anything that is
/// not an identifier (JSON, shell snippets) are left alone.
pub fn substitute(text: &str, values: &BTreeMap<String, String>, step: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = values
            .get(name.as_str())
            .ok_or_else(|| RelnotesError::UnresolvedPlaceholder {
                step: step.to_string(),
                name: name.as_str().to_string(),
            })?;
        out.push_str(&text[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}

/// A template rendered to a fixed path. The file is removed when this value
/// is dropped, whether or not the step that used it succeeded.
#[derive(Debug)]
pub struct RenderedFile {
    path: PathBuf,
}

impl RenderedFile {
    pub fn create(template: &Path, token: &str, value: &str, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(template).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RelnotesError::DocumentNotFound(template.to_path_buf()),
            _ => RelnotesError::Io(e),
        })?;

        if !contents.contains(token) {
            warn!(
                template = %template.display(),
                token,
                "template does not contain the placeholder token"
            );
        }

        fs::write(path, contents.replace(token, value))?;
        debug!(path = %path.display(), "rendered template");
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RenderedFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed rendered file"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "could not remove rendered file"),
        }
    }
}
