//! Extraction of changelog bullets that reference a marker such as `#31`.
//!
//! A top-level bullet (`- ` at column 0) whose line contains the marker is
//! copied together with its sub-bullets, indented continuation lines and
//! blank lines, with the marker removed. The block ends at the next
//! top-level bullet or at any other non-indented line.
use regex::Regex;
use std::sync::LazyLock;

static TOP_LEVEL_BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s").unwrap());

static SUB_BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{2,}-\s").unwrap());

/// Marker used in changelogs to reference a pull request.
pub fn pr_marker(number: u64) -> String {
    format!("#{number}")
}

/// Byte offsets of marker occurrences that are not immediately followed by
/// an ASCII alphanumeric character.
fn marker_positions(line: &str, marker: &str) -> Vec<usize> {
    if marker.is_empty() {
        return vec![];
    }

    line.match_indices(marker)
        .map(|(start, _)| start)
        .filter(|start| {
            line[start + marker.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric())
        })
        .collect()
}

/// Whether `line` references `marker`.
pub fn contains_marker(line: &str, marker: &str) -> bool {
    !marker_positions(line, marker).is_empty()
}

/// Removes every occurrence of `marker`, along with one preceding space
/// when present.
pub fn strip_marker(line: &str, marker: &str) -> String {
    let positions = marker_positions(line, marker);

    if positions.is_empty() {
        return line.to_string();
    }

    let mut stripped = String::with_capacity(line.len());
    let mut cursor = 0;

    for start in positions {
        let cut = if start > cursor && line.as_bytes()[start - 1] == b' ' {
            start - 1
        } else {
            start
        };

        stripped.push_str(&line[cursor..cut]);
        cursor = start + marker.len();
    }

    stripped.push_str(&line[cursor..]);
    stripped
}

/// Collects every bullet block whose top-level line references `marker`.
pub fn extract_marked_bullets<I, S>(lines: I, marker: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = vec![];
    let mut capturing = false;

    for line in lines {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);

        if TOP_LEVEL_BULLET_REGEX.is_match(line) {
            capturing = contains_marker(line, marker);
            if capturing {
                results.push(strip_marker(line, marker));
            }
            continue;
        }

        if !capturing {
            continue;
        }

        if SUB_BULLET_REGEX.is_match(line)
            || line.starts_with(' ')
            || line.is_empty()
        {
            results.push(strip_marker(line, marker));
        } else {
            capturing = false;
        }
    }

    results
}
