//! Text buffer capability
//!
//! The navigation core never owns text. It reads the host's document through the [`TextBuffer`]
//! trait, which exposes just enough to enumerate line records and inspect characters.
//!
//! [`RopeBuffer`] is the bundled implementation: an immutable snapshot over a `ropey::Rope`,
//! supporting O(log N) line lookups.

use ropey::{Rope, RopeSlice};
use std::ops::Range;

/// A single logical line record.
///
/// `begin..end` is a half-open range of character offsets covering the line content, excluding
/// its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Character offset of the first character of the line.
    pub begin: usize,
    /// Character offset just past the last content character (the terminator is not included).
    pub end: usize,
}

impl Line {
    /// Create a line record.
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end);
        Self { begin, end }
    }

    /// Length of the line content in characters.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Returns `true` if the line has no content characters.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Read-only access to a host document.
///
/// All offsets are character offsets in `0..=size()`. Callers must not pass offsets beyond
/// `size()`; implementations may clamp or panic.
pub trait TextBuffer {
    /// Total number of characters in the document.
    fn size(&self) -> usize;

    /// Line records intersecting `range`, in document order.
    ///
    /// A line `l` intersects when `l.begin < range.end && l.end >= range.start`. Every yielded
    /// record is the full line, never a clipped piece of it. The empty line that follows a
    /// trailing terminator begins at `size()` and so is never yielded.
    fn lines_in(&self, range: Range<usize>) -> impl DoubleEndedIterator<Item = Line>;

    /// Content of `line`, without its terminator.
    fn text_of(&self, line: Line) -> String;

    /// Character at `offset`, or `None` at (or past) the end of the document.
    fn char_at(&self, offset: usize) -> Option<char>;
}

/// Returns `true` for every character ropey treats as a line break.
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Number of trailing characters of a rope line that form its terminator.
fn terminator_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    let last = line.char(len - 1);
    if last == '\n' && len >= 2 && line.char(len - 2) == '\r' {
        2
    } else if is_line_break(last) {
        1
    } else {
        0
    }
}

/// Immutable document snapshot backed by a rope.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a buffer from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Wrap an existing rope.
    pub fn from_rope(rope: Rope) -> Self {
        Self { rope }
    }

    /// Underlying rope.
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Number of line records, counting the empty line after a trailing terminator the way the
    /// rope does.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line record at `line_number`, or `None` if out of range.
    pub fn line(&self, line_number: usize) -> Option<Line> {
        if line_number >= self.rope.len_lines() {
            return None;
        }
        Some(self.line_at_index(line_number))
    }

    /// Line record containing `offset` (clamped to the document).
    pub fn line_at(&self, offset: usize) -> Line {
        let offset = offset.min(self.rope.len_chars());
        self.line_at_index(self.rope.char_to_line(offset))
    }

    /// Complete text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    fn line_at_index(&self, line_number: usize) -> Line {
        let begin = self.rope.line_to_char(line_number);
        let slice = self.rope.line(line_number);
        let end = begin + slice.len_chars() - terminator_len(slice);
        Line::new(begin, end)
    }
}

impl From<&str> for RopeBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl TextBuffer for RopeBuffer {
    fn size(&self) -> usize {
        self.rope.len_chars()
    }

    fn lines_in(&self, range: Range<usize>) -> impl DoubleEndedIterator<Item = Line> {
        let end = range.end.min(self.rope.len_chars());
        let start = range.start.min(end);
        let first = self.rope.char_to_line(start);
        let last = self.rope.char_to_line(end);

        (first..=last)
            .map(move |idx| self.line_at_index(idx))
            .filter(move |line| line.begin < end && line.end >= start)
    }

    fn text_of(&self, line: Line) -> String {
        self.rope.slice(line.begin..line.end).to_string()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }
}
