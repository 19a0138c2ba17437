use super::config::Capture;
use crate::error::{RelnotesError, Result};
use serde_json::Value;

/// Value of the first `MARKER: value` line in `output`.
///
/// The text before the first colon is trimmed and compared to the marker
/// exactly. The first matching line with a non-empty value wins; a bare
/// `ID:` line is skipped, never captured as an empty identifier.
pub fn marked_value(output: &str, marker: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        let value = value.trim();
        (key.trim() == marker && !value.is_empty()).then(|| value.to_string())
    })
}

/// Value at a dotted path (`data.id`) in JSON output. Strings are returned
/// as is, numbers in their JSON form.
pub fn json_value(output: &str, field: &str) -> Option<String> {
    let root: Value = serde_json::from_str(output.trim()).ok()?;
    let found = field
        .split('.')
        .try_fold(&root, |node, key| match node {
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => node.get(key),
        })?;

    match found {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Applies a capture rule to a step's output.
pub fn apply(capture: &Capture, step: &str, output: &str) -> Result<String> {
    let (found, marker) = match &capture.json_field {
        Some(field) => (json_value(output, field), field.as_str()),
        None => (marked_value(output, &capture.marker), capture.marker.as_str()),
    };

    found.ok_or_else(|| RelnotesError::MarkerNotFound {
        step: step.to_string(),
        marker: marker.to_string(),
        output: output.to_string(),
    })
}
