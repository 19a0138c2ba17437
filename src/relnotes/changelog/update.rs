use super::{heading, PENDING_PLACEHOLDER, PENDING_SECTION};
use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^## \d").expect("valid version heading pattern"));

// Top-level title plus the blank line that usually follows it.
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^# changelog[ \t]*(?:\r?\n|\z)(?:[ \t]*\r?\n)?").expect("valid title pattern")
});

/// The pending section as it looks right after a release.
pub fn pending_template() -> String {
    format!("{}\n\n{}\n", heading(PENDING_SECTION), PENDING_PLACEHOLDER)
}

fn entry(version: &str, notes: &str) -> String {
    let notes = notes.trim();
    if notes.is_empty() {
        format!("{}\n", heading(version))
    } else {
        format!("{}\n\n{}\n", heading(version), notes)
    }
}

/// Pending template, blank line, version entry, blank line.
fn release_block(version: &str, notes: &str) -> String {
    format!("{}\n{}\n", pending_template(), entry(version, notes))
}

fn splice(head: &str, block: &str, rest: &str) -> String {
    let mut out = String::with_capacity(head.len() + block.len() + rest.len());
    out.push_str(head);
    if rest.is_empty() {
        out.push_str(block.trim_end());
        out.push('\n');
    } else {
        out.push_str(block);
        out.push_str(rest);
    }
    out
}

/// Inserts a `## <version>` entry and resets the pending section.
///
/// With a `## next` section present, everything from that heading up to the
/// next version heading (or the end of the document) is replaced by the
/// canonical pending template followed by the new entry. Without one, the
/// template and entry go right after the `# CHANGELOG` title, or at the very
/// top when there is no title either. All other text is passed through as is.
pub fn update(changelog: &str, version: &str, notes: &str) -> String {
    let block = release_block(version, notes);
    let pending = heading(PENDING_SECTION);
    let lines: Vec<&str> = changelog.split_inclusive('\n').collect();

    if let Some(start) = lines.iter().position(|line| line.trim() == pending) {
        let end = lines[start + 1..]
            .iter()
            .position(|line| VERSION_HEADING_RE.is_match(line))
            .map_or(lines.len(), |offset| start + 1 + offset);
        return splice(&lines[..start].concat(), &block, &lines[end..].concat());
    }

    if let Some(title) = TITLE_RE.find(changelog) {
        let mut head = changelog[..title.end()].to_string();
        if !head.ends_with('\n') {
            head.push('\n');
        }
        if !head.ends_with("\n\n") && !head.ends_with("\r\n\r\n") {
            head.push('\n');
        }
        return splice(&head, &block, &changelog[title.end()..]);
    }

    splice("", &block, changelog)
}
