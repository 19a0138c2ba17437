use super::{heading, SECTION_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank-run pattern"));

/// Returns the body of the `## <section>` section.
///
/// The body runs from the line after the heading up to (not including) the
/// next `## ` line. A missing section yields an empty string. The result is
/// trimmed and, when non-empty, ends with exactly one newline.
pub fn extract(document: &str, section: &str, strip: bool) -> String {
    let target = heading(section);

    let mut lines = document.lines();
    if !lines.by_ref().any(|line| line.trim() == target) {
        return String::new();
    }

    let body = lines
        .take_while(|line| !line.starts_with(SECTION_PREFIX))
        .collect::<Vec<_>>()
        .join("\n");

    let body = if strip { strip_comments(&body) } else { body };
    finish(&body)
}

/// Removes `<!-- ... -->` blocks (which may span lines) and collapses any run
/// of three or more newlines down to a single blank line.
///
/// Removal repeats until no comment is left, since text on either side of a
/// removed comment can join into a new one.
pub fn strip_comments(text: &str) -> String {
    let mut without = text.to_string();
    while COMMENT_RE.is_match(&without) {
        without = COMMENT_RE.replace_all(&without, "").into_owned();
    }
    BLANK_RUN_RE.replace_all(&without, "\n\n").into_owned()
}

fn finish(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# CHANGELOG\n\
        \n\
        ## next\n\
        \n\
        <!-- Add notes for the next release here. -->\n\
        \n\
        ## 0.0.60\n\
        \n\
        - Added batch setup\n\
        - Fixed filters\n\
        \n\
        ## 0.0.59\n\
        \n\
        - Old entry\n";

    #[test]
    fn extracts_section_body() {
        assert_eq!(
            extract(DOC, "0.0.60", false),
            "- Added batch setup\n- Fixed filters\n"
        );
    }

    #[test]
    fn extracts_last_section_to_end_of_document() {
        assert_eq!(extract(DOC, "0.0.59", false), "- Old entry\n");
    }

    #[test]
    fn missing_section_is_empty() {
        assert_eq!(extract(DOC, "1.0.0", false), "");
        assert_eq!(extract(DOC, "1.0.0", true), "");
        assert_eq!(extract("", "next", false), "");
    }

    #[test]
    fn heading_match_is_exact_not_prefix() {
        let doc = "## 0.0.60\n\n- newer\n";
        assert_eq!(extract(doc, "0.0.6", false), "");
    }

    #[test]
    fn heading_line_is_trimmed_before_matching() {
        let doc = "## 1.0.0   \n\n- spaced\n";
        assert_eq!(extract(doc, "1.0.0", false), "- spaced\n");
    }

    #[test]
    fn keeps_comments_unless_stripping() {
        assert_eq!(
            extract(DOC, "next", false),
            "<!-- Add notes for the next release here. -->\n"
        );
        assert_eq!(extract(DOC, "next", true), "");
    }

    #[test]
    fn strips_multiline_comments_and_collapses_blank_runs() {
        let doc = "## next\n\n- one\n\n<!--\nhidden\nlines\n-->\n\n\n- two\n";
        assert_eq!(extract(doc, "next", true), "- one\n\n- two\n");
    }

    #[test]
    fn comment_stripping_is_non_greedy() {
        let text = "a <!-- x --> b <!-- y --> c";
        assert_eq!(strip_comments(text), "a  b  c");
    }

    #[test]
    fn comment_stripping_is_idempotent() {
        let text = "- one\n<!-- a -->\n\n\n\n- two\n<!--\nb\n-->\n- three\n";
        let once = strip_comments(text);
        assert_eq!(strip_comments(&once), once);
    }

    #[test]
    fn nested_comment_fragments_are_fully_removed() {
        let text = "keep <!<!-- x -->-- y --> end";
        let once = strip_comments(text);
        assert_eq!(once, "keep  end");
        assert_eq!(strip_comments(&once), once);

        let doc = format!("## next\n\n{}\n\n## 1.0.0\n", text);
        let extracted = extract(&doc, "next", true);
        assert_eq!(extracted, "keep  end\n");
        assert_eq!(strip_comments(&extracted), extracted);
    }

    #[test]
    fn level_three_headings_stay_in_body() {
        let doc = "## 2.0.0\n\n### Added\n\n- thing\n\n## 1.0.0\n";
        assert_eq!(extract(doc, "2.0.0", false), "### Added\n\n- thing\n");
    }

    #[test]
    fn empty_section_is_empty_string() {
        let doc = "## next\n\n## 0.1.0\n\n- x\n";
        assert_eq!(extract(doc, "next", false), "");
    }
}
