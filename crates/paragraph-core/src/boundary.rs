//! Paragraph boundary detection
//!
//! A paragraph is a maximal run of non-blank lines. Scanning walks adjacent line pairs away from
//! a start offset and stops at the first pair that forms a qualifying boundary:
//!
//! - **begin boundary**: a blank line followed (in reading order) by a non-blank line; the result
//!   is the begin offset of the non-blank line.
//! - **end boundary**: a non-blank line followed by a blank line; the result is the end offset of
//!   the non-blank line.
//!
//! Begin is tested before end within a pair. When no pair matches, the scan falls back to the
//! buffer edge in the direction of travel.
//!
//! # Example
//!
//! ```rust
//! use paragraph_core::{BoundaryPolicy, Direction, ParagraphBoundaryFinder, RopeBuffer};
//!
//! let buffer = RopeBuffer::from_text("para1\n\npara2\n");
//! let finder = ParagraphBoundaryFinder::new(&buffer, BoundaryPolicy::default()).unwrap();
//!
//! assert_eq!(finder.find(0, Direction::Forward), 7);
//! assert_eq!(finder.find(7, Direction::Backward), 0);
//! ```

use crate::buffer::{Line, TextBuffer, is_line_break};
use crate::classify::is_blank;
use crate::error::NavigateError;
use crate::policy::{BoundaryPolicy, Direction};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
struct ClassifiedLine {
    line: Line,
    blank: bool,
}

/// Finds paragraph boundaries in a buffer under a fixed [`BoundaryPolicy`].
#[derive(Debug)]
pub struct ParagraphBoundaryFinder<'a, B> {
    buffer: &'a B,
    policy: BoundaryPolicy,
}

impl<'a, B: TextBuffer> ParagraphBoundaryFinder<'a, B> {
    /// Create a finder. Fails with [`NavigateError::NoStopPolicy`] if the policy can never stop.
    pub fn new(buffer: &'a B, policy: BoundaryPolicy) -> Result<Self, NavigateError> {
        policy.validate()?;
        Ok(Self { buffer, policy })
    }

    /// Policy in effect.
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Offset of the next boundary from `start` in `direction`.
    ///
    /// `start` must be within `0..=size`. An empty buffer always yields 0, and a buffer made of a
    /// single unterminated line yields `start` (no boundary exists).
    pub fn find(&self, start: usize, direction: Direction) -> usize {
        let size = self.buffer.size();
        if size == 0 {
            return 0;
        }

        let offset = match direction {
            Direction::Forward => self.scan_forward(start, size),
            Direction::Backward => self.scan_backward(start, size),
        };

        debug!(start, ?direction, offset, "paragraph boundary");
        offset
    }

    fn classify(&self, line: Line) -> ClassifiedLine {
        let text = self.buffer.text_of(line);
        ClassifiedLine {
            line,
            blank: is_blank(&text, self.policy.ignore_blank_lines),
        }
    }

    fn scan_forward(&self, start: usize, size: usize) -> usize {
        let mut lines = self
            .buffer
            .lines_in(start..size)
            .map(|line| self.classify(line));

        // Only the phantom line after a trailing terminator remains.
        let Some(mut current) = lines.next() else {
            return size;
        };
        let mut count = 1;

        for next in lines {
            count += 1;

            if self.policy.stop_at_begin && current.blank && !next.blank {
                trace!(line_begin = next.line.begin, "forward: paragraph begin");
                return next.line.begin;
            }

            if self.policy.stop_at_end
                && current.line.end != start
                && !current.blank
                && next.blank
            {
                trace!(line_end = current.line.end, "forward: paragraph end");
                return current.line.end;
            }

            current = next;
        }

        if count == 1 && is_whole_buffer(current.line, size) {
            return start;
        }

        if current.blank {
            trace!("forward: trailing blank lines, jump to buffer end");
            size
        } else if self.ends_with_terminator(size) {
            trace!("forward: last line is terminated, jump to buffer end");
            size
        } else if current.line.end == start {
            // Unterminated last line: the clamp keeps this at `size`.
            (current.line.end + 1).min(size)
        } else {
            current.line.end
        }
    }

    fn scan_backward(&self, start: usize, size: usize) -> usize {
        let mut lines = self
            .buffer
            .lines_in(0..start)
            .rev()
            .map(|line| self.classify(line));

        let Some(mut below) = lines.next() else {
            return 0;
        };
        let mut count = 1;

        for above in lines {
            count += 1;

            if self.policy.stop_at_begin && !below.blank && above.blank {
                trace!(line_begin = below.line.begin, "backward: paragraph begin");
                return below.line.begin;
            }

            if self.policy.stop_at_end && below.blank && !above.blank {
                trace!(line_end = above.line.end, "backward: paragraph end");
                return above.line.end;
            }

            below = above;
        }

        if count == 1 && is_whole_buffer(below.line, size) {
            return start;
        }

        below.line.begin
    }

    fn ends_with_terminator(&self, size: usize) -> bool {
        size > 0 && self.buffer.char_at(size - 1).is_some_and(is_line_break)
    }
}

fn is_whole_buffer(line: Line, size: usize) -> bool {
    line.begin == 0 && line.end == size
}

/// One-shot boundary search.
///
/// Equivalent to [`ParagraphBoundaryFinder::new`] followed by [`ParagraphBoundaryFinder::find`].
pub fn find<B: TextBuffer>(
    buffer: &B,
    start: usize,
    direction: Direction,
    policy: BoundaryPolicy,
) -> Result<usize, NavigateError> {
    Ok(ParagraphBoundaryFinder::new(buffer, policy)?.find(start, direction))
}
