//! Cursors and the cursor/selection update policy.

use crate::buffer::{TextBuffer, is_line_break};
use crate::policy::Direction;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A caret with an optional selection, in character offsets.
///
/// `anchor` is the fixed end and `active` the moving end (the caret). The cursor is collapsed when
/// both are equal; otherwise its orientation is given by the sign of `active - anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// Fixed end.
    pub anchor: usize,
    /// Moving end (the caret).
    pub active: usize,
}

impl Cursor {
    /// Create a cursor from its two ends.
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Collapsed cursor at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns `true` if no text is selected.
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.active
    }

    /// Lower of the two ends.
    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// Higher of the two ends.
    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    /// Selected range, lowest offset first.
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Number of selected characters.
    pub fn selected_len(&self) -> usize {
        self.end() - self.start()
    }

    /// Returns `true` if `active` lies before `anchor`.
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }
}

/// Offset a paragraph scan starts from.
///
/// Extending scans from the caret so a selection can both grow and shrink. A plain move scans
/// from the selection edge facing `direction`, so it never lands inside the old selection.
pub fn scan_start(cursor: Cursor, direction: Direction, extend: bool) -> usize {
    if extend {
        return cursor.active;
    }
    match direction {
        Direction::Forward => cursor.end(),
        Direction::Backward => cursor.start(),
    }
}

/// Derives the cursor that results from moving to a paragraph boundary.
#[derive(Debug)]
pub struct CursorUpdater<'a, B> {
    buffer: &'a B,
}

impl<'a, B: TextBuffer> CursorUpdater<'a, B> {
    /// Create an updater over `buffer`.
    pub fn new(buffer: &'a B) -> Self {
        Self { buffer }
    }

    /// New cursor after moving `cursor` to `boundary` in `direction`.
    ///
    /// Without `extend` the result is a caret at `boundary`. With `extend` the anchor stays put
    /// and the caret moves:
    /// - forward, a boundary at a line start is pulled back onto the preceding terminator, so the
    ///   selection ends on the separator line instead of swallowing the next paragraph's first
    ///   character. No pull-back happens at the buffer end, or when it would leave the caret where
    ///   the scan started.
    /// - backward, the caret goes to `boundary`, ending up before the anchor.
    ///
    /// The anchor itself is never adjusted, in either direction. A backward boundary is a
    /// paragraph begin or a content end, so there is no terminator on the anchor side to exclude.
    pub fn update(
        &self,
        cursor: Cursor,
        boundary: usize,
        extend: bool,
        direction: Direction,
    ) -> Cursor {
        if !extend {
            return Cursor::caret(boundary);
        }

        let active = match direction {
            Direction::Forward => self.trim_forward(cursor.active, boundary),
            Direction::Backward => boundary,
        };
        Cursor::new(cursor.anchor, active)
    }

    fn trim_forward(&self, from: usize, boundary: usize) -> usize {
        if boundary == 0 || boundary >= self.buffer.size() {
            return boundary;
        }
        let at_line_start = self
            .buffer
            .char_at(boundary - 1)
            .is_some_and(is_line_break);
        if at_line_start && boundary - 1 > from {
            boundary - 1
        } else {
            boundary
        }
    }
}
