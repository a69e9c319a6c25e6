// crates/ts_nocheck_marker/src/lib.rs

//! The marker line shared by the tool-chain, plus the two rules that
//! decide how it is detected and how it is inserted.

/// Marker written at the top of every processed TypeScript file.
pub const TS_NOCHECK_MARKER: &str = "// @ts-nocheck";

const BOM: char = '\u{feff}';

/// Returns `true` if the marker is already present.
///
/// The marker counts as present when the first line that is not blank
/// (after stripping a leading BOM) equals `marker`, both sides trimmed.
/// A marker buried further down the file does not count.
pub fn has_marker(content: &str, marker: &str) -> bool {
    let marker = marker.trim();
    content
        .trim_start_matches(BOM)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map_or(false, |first| first == marker)
}

/// Builds the new file content with `marker` as its first line.
///
/// The line ending follows the original first line (`\r\n` or `\n`), and a
/// leading BOM is kept at the very start of the file.
pub fn prepend_marker(content: &str, marker: &str) -> String {
    let (bom, body) = match content.strip_prefix(BOM) {
        Some(rest) => (Some(BOM), rest),
        None => (None, content),
    };
    let eol = line_ending_of(body);

    let mut output = String::with_capacity(content.len() + marker.len() + eol.len() + 3);
    if let Some(bom) = bom {
        output.push(bom);
    }
    output.push_str(marker);
    output.push_str(eol);
    output.push_str(body);
    output
}

/// Returns the rewritten content, or `None` when the file already carries
/// the marker and must be left alone.
///
/// A blank marker is never inserted: it could not be detected afterwards.
pub fn ensure_marker(content: &str, marker: &str) -> Option<String> {
    if marker.trim().is_empty() || has_marker(content, marker) {
        None
    } else {
        Some(prepend_marker(content, marker))
    }
}

/// Line ending used by the first line of `content`; `\n` when it has none.
fn line_ending_of(content: &str) -> &'static str {
    match content.find('\n') {
        Some(idx) if idx > 0 && content.as_bytes()[idx - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}
