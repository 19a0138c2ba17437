/// Joins manual and generated notes with a blank line.
///
/// Whitespace-only inputs count as absent. With nothing to join the fallback is
/// used instead. The result always ends with a single newline.
pub fn merge(manual: &str, generated: &str, fallback: &str) -> String {
    let parts: Vec<&str> = [manual, generated]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        format!("{}\n", fallback)
    } else {
        format!("{}\n", parts.join("\n\n"))
    }
}
