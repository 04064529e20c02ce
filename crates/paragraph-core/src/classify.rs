//! Line classification: paragraph content vs. paragraph separator.

/// Returns `true` if `text` counts as a blank (separator) line.
///
/// With `ignore_blank_lines`, surrounding whitespace is trimmed first, so a line holding only
/// spaces or tabs is blank. Otherwise only a zero-length line is blank.
pub fn is_blank(text: &str, ignore_blank_lines: bool) -> bool {
    if ignore_blank_lines {
        text.trim().is_empty()
    } else {
        text.is_empty()
    }
}
