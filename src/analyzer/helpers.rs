use regex::Regex;
use std::sync::LazyLock;

/// Matches 3 or more consecutive new lines
static EXTRA_NEW_LINES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// A `## Motivation` heading, capturing any text that follows it on the same
/// line.
static MOTIVATION_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#{2,}[ \t]*Motivation\b[ \t]*:?[ \t]*(.*)$").unwrap()
});

/// Any heading that ends the motivation section.
static SECTION_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{2,}[ \t]").unwrap());

/// Opening or closing line of a fenced code block.
static CODE_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]{0,3}(?:```|~~~)").unwrap());

/// Extract the motivation section of a pull request description: text on
/// the heading line plus everything up to the next level 2+ heading or the
/// end of the body. Lines inside fenced code blocks never end the section.
/// Returns `None` when the body has no such section or it is empty.
pub fn extract_motivation(body: Option<&str>) -> Option<String> {
    let body = body?.replace("\r\n", "\n");

    let mut section: Option<Vec<&str>> = None;
    let mut in_fence = false;

    for line in body.lines() {
        if let Some(lines) = section.as_mut() {
            if !in_fence && SECTION_HEADING_REGEX.is_match(line) {
                break;
            }
            lines.push(line);
        } else if !in_fence
            && let Some(captures) = MOTIVATION_HEADING_REGEX.captures(line)
        {
            let inline = captures.get(1).map_or("", |m| m.as_str());
            section = Some(vec![inline]);
            continue;
        }

        if CODE_FENCE_REGEX.is_match(line) {
            in_fence = !in_fence;
        }
    }

    let motivation = section?.join("\n");
    let motivation = motivation.trim();

    if motivation.is_empty() {
        return None;
    }

    Some(motivation.to_string())
}

/// Anchor for a Markdown heading: lower-cased, parentheses and dots removed,
/// spaces replaced with dashes.
pub fn anchor(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['(', ')', '.'], "")
        .replace(' ', "-")
}

/// Normalize formatting by replacing consecutive blank lines (3+) with
/// double newlines and trimming whitespace.
pub fn strip_extra_lines(notes: &str) -> String {
    EXTRA_NEW_LINES_REGEX
        .replace_all(notes, "\n\n")
        .trim()
        .to_string()
}
