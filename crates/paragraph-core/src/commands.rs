//! Command Interface Layer
//!
//! Ties boundary detection and cursor updates together and connects them to an editor host.
//!
//! # Overview
//!
//! - [`navigate`] is the pure operation: buffer + cursor + options in, new cursor out.
//! - [`navigate_each`] fans the same operation out over every cursor of a [`Selection`].
//! - [`EditorHost`] is what a host editor implements so [`MoveByParagraph`] can read the current
//!   selection, commit the new one and request that it be scrolled into view.
//! - [`Document`] is an in-memory host, handy for tests and tools.
//!
//! # Example
//!
//! ```rust
//! use paragraph_core::{Cursor, Document, MoveByParagraph, NavigateOptions};
//!
//! let mut doc = Document::new("a\n\nb\nc\n\nd");
//! doc.set_cursor(3).unwrap();
//!
//! let command = MoveByParagraph::new(NavigateOptions::forward().extend(true));
//! let cursor = command.run(&mut doc).unwrap();
//!
//! assert_eq!(cursor, Cursor::new(3, 7));
//! assert_eq!(doc.shown(), &[Cursor::new(3, 7)]);
//! ```

use crate::boundary::ParagraphBoundaryFinder;
use crate::buffer::{Line, RopeBuffer, TextBuffer};
use crate::cursor::{Cursor, CursorUpdater, scan_start};
use crate::error::NavigateError;
use crate::policy::NavigateOptions;
use crate::selection_set::Selection;
use std::ops::Range;
use tracing::{debug, warn};

/// Move `cursor` to the next paragraph boundary described by `options`.
///
/// Fails with [`NavigateError::NoStopPolicy`] (logged as a warning) when neither stop flag is set;
/// the caller should then leave its cursor untouched. Cursor offsets must lie within the buffer.
pub fn navigate<B: TextBuffer>(
    buffer: &B,
    cursor: Cursor,
    options: &NavigateOptions,
) -> Result<Cursor, NavigateError> {
    check_policy(options)?;
    let finder = ParagraphBoundaryFinder::new(buffer, options.policy())?;

    let start = scan_start(cursor, options.direction, options.extend);
    let boundary = finder.find(start, options.direction);
    let moved =
        CursorUpdater::new(buffer).update(cursor, boundary, options.extend, options.direction);

    debug!(?cursor, start, boundary, ?moved, "paragraph navigation");
    Ok(moved)
}

/// Apply [`navigate`] to every cursor of `selection`, then normalize.
pub fn navigate_each<B: TextBuffer>(
    buffer: &B,
    selection: &Selection,
    options: &NavigateOptions,
) -> Result<Selection, NavigateError> {
    check_policy(options)?;
    selection.map_each(|cursor| navigate(buffer, cursor, options))
}

fn check_policy(options: &NavigateOptions) -> Result<(), NavigateError> {
    options.policy().validate().inspect_err(|err| {
        warn!(%err, ?options, "paragraph navigation skipped");
    })
}

/// An editor that paragraph commands can drive.
///
/// The host owns the selection and the view; commands only read the selection and hand back the
/// replacement.
pub trait EditorHost: TextBuffer {
    /// Current selection.
    fn selection(&self) -> Selection;

    /// Replace the selection.
    fn set_selection(&mut self, selection: Selection);

    /// Scroll the view so `cursor` is visible.
    fn show(&mut self, cursor: Cursor);
}

/// Paragraph move command.
///
/// Acts on the primary cursor. On success the host selection is replaced by the single moved
/// cursor (secondary cursors are dropped) and the host is asked to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveByParagraph {
    /// Command arguments.
    pub options: NavigateOptions,
}

impl MoveByParagraph {
    /// Create the command.
    pub fn new(options: NavigateOptions) -> Self {
        Self { options }
    }

    /// Create the command from a JSON argument object.
    pub fn from_json(args: &str) -> Result<Self, NavigateError> {
        Ok(Self::new(NavigateOptions::from_json(args)?))
    }

    /// Run against `host`. On error nothing is committed or shown.
    pub fn run<H: EditorHost>(&self, host: &mut H) -> Result<Cursor, NavigateError> {
        let primary = host.selection().primary();
        let moved = navigate(&*host, primary, &self.options)?;
        host.set_selection(Selection::single(moved));
        host.show(moved);
        Ok(moved)
    }
}

/// In-memory editor host: a text snapshot plus a selection.
///
/// Records every scroll-into-view request so callers can inspect them.
#[derive(Debug, Clone)]
pub struct Document {
    buffer: RopeBuffer,
    selection: Selection,
    shown: Vec<Cursor>,
}

impl Document {
    /// Create a document with a caret at offset 0.
    pub fn new(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            selection: Selection::single(Cursor::caret(0)),
            shown: Vec::new(),
        }
    }

    /// Underlying text snapshot.
    pub fn buffer(&self) -> &RopeBuffer {
        &self.buffer
    }

    /// Complete text.
    pub fn get_text(&self) -> String {
        self.buffer.get_text()
    }

    /// Primary cursor.
    pub fn cursor(&self) -> Cursor {
        self.selection.primary()
    }

    /// Scroll-into-view requests received so far, oldest first.
    pub fn shown(&self) -> &[Cursor] {
        &self.shown
    }

    /// Place a single caret at `offset`.
    pub fn set_cursor(&mut self, offset: usize) -> Result<(), NavigateError> {
        self.set_cursor_pair(offset, offset)
    }

    /// Place a single cursor with the given ends.
    pub fn set_cursor_pair(&mut self, anchor: usize, active: usize) -> Result<(), NavigateError> {
        self.check_offset(anchor)?;
        self.check_offset(active)?;
        self.selection = Selection::single(Cursor::new(anchor, active));
        Ok(())
    }

    /// Replace the selection with several cursors.
    pub fn set_cursors(
        &mut self,
        cursors: Vec<Cursor>,
        primary_index: usize,
    ) -> Result<(), NavigateError> {
        for cursor in &cursors {
            self.check_offset(cursor.anchor)?;
            self.check_offset(cursor.active)?;
        }
        self.selection = Selection::from_cursors(cursors, primary_index)
            .ok_or_else(|| NavigateError::InvalidArgs("empty cursor list".to_string()))?;
        Ok(())
    }

    /// Run a paragraph move on the primary cursor.
    pub fn execute(&mut self, options: NavigateOptions) -> Result<Cursor, NavigateError> {
        MoveByParagraph::new(options).run(self)
    }

    /// Run a paragraph move on every cursor.
    pub fn execute_each(&mut self, options: NavigateOptions) -> Result<&Selection, NavigateError> {
        let selection = navigate_each(&self.buffer, &self.selection, &options)?;
        self.selection = selection;
        let primary = self.selection.primary();
        self.show(primary);
        Ok(&self.selection)
    }

    fn check_offset(&self, offset: usize) -> Result<(), NavigateError> {
        let size = self.buffer.size();
        if offset > size {
            return Err(NavigateError::InvalidOffset { offset, size });
        }
        Ok(())
    }
}

impl TextBuffer for Document {
    fn size(&self) -> usize {
        self.buffer.size()
    }

    fn lines_in(&self, range: Range<usize>) -> impl DoubleEndedIterator<Item = Line> {
        self.buffer.lines_in(range)
    }

    fn text_of(&self, line: Line) -> String {
        self.buffer.text_of(line)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer.char_at(offset)
    }
}

impl EditorHost for Document {
    fn selection(&self) -> Selection {
        self.selection.clone()
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn show(&mut self, cursor: Cursor) {
        self.shown.push(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Direction;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_navigate_plain_forward() {
        let buffer = RopeBuffer::from_text("para1\n\npara2\n");
        let moved = navigate(&buffer, Cursor::caret(0), &NavigateOptions::forward()).unwrap();
        assert_eq!(moved, Cursor::caret(7));
    }

    #[test]
    fn test_navigate_collapses_selection_past_far_edge() {
        // a0 \n1 \n2 b3 \n4 c5 \n6 \n7 d8
        let buffer = RopeBuffer::from_text("a\n\nb\nc\n\nd");
        let selection = Cursor::new(5, 0);
        assert_eq!(
            navigate(&buffer, selection, &NavigateOptions::forward()).unwrap(),
            Cursor::caret(8)
        );
        assert_eq!(
            navigate(&buffer, Cursor::new(5, 8), &NavigateOptions::backward()).unwrap(),
            Cursor::caret(3)
        );
    }

    #[test]
    fn test_navigate_rejects_missing_stop_policy() {
        let buffer = RopeBuffer::from_text("a\n\nb");
        let options = NavigateOptions::forward().stop_at_begin(false);
        assert_eq!(
            navigate(&buffer, Cursor::caret(0), &options),
            Err(NavigateError::NoStopPolicy)
        );
    }

    #[test]
    fn test_command_commits_and_shows() {
        let mut doc = Document::new("para1\n\npara2\n");
        let cursor = doc.execute(NavigateOptions::forward()).unwrap();
        assert_eq!(cursor, Cursor::caret(7));
        assert_eq!(doc.cursor(), Cursor::caret(7));
        assert_eq!(doc.shown(), &[Cursor::caret(7)]);
    }

    #[test]
    fn test_command_error_leaves_document_untouched() {
        let mut doc = Document::new("a\n\nb");
        doc.set_cursor(1).unwrap();
        let options = NavigateOptions::new(Direction::Forward)
            .stop_at_begin(false)
            .stop_at_end(false);
        let err = doc.execute(options).unwrap_err();
        assert!(err.is_warning());
        assert_eq!(doc.cursor(), Cursor::caret(1));
        assert!(doc.shown().is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_fan_out_warns_and_keeps_selection_on_missing_stop_policy() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let mut doc = Document::new("a\n\nb");
        doc.set_cursors(vec![Cursor::caret(0), Cursor::caret(3)], 1)
            .unwrap();
        let options = NavigateOptions::forward().stop_at_begin(false);

        let err = tracing::subscriber::with_default(subscriber, || {
            doc.execute_each(options).unwrap_err()
        });

        assert_eq!(err, NavigateError::NoStopPolicy);
        assert_eq!(doc.selection().cursors(), &[Cursor::caret(0), Cursor::caret(3)]);
        assert!(doc.shown().is_empty());
        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("paragraph navigation skipped"), "{output}");
    }

    #[test]
    fn test_command_drops_secondary_cursors() {
        let mut doc = Document::new("a\n\nb\n\nc");
        doc.set_cursors(vec![Cursor::caret(0), Cursor::caret(3)], 0)
            .unwrap();
        doc.execute(NavigateOptions::forward()).unwrap();
        assert_eq!(doc.selection().cursors(), &[Cursor::caret(3)]);
    }

    #[test]
    fn test_command_from_json() {
        let mut doc = Document::new("abc\n\ndef");
        doc.set_cursor(8).unwrap();
        let command = MoveByParagraph::from_json(r#"{"forward": false}"#).unwrap();
        assert_eq!(command.run(&mut doc).unwrap(), Cursor::caret(5));
    }

    #[test]
    fn test_set_cursor_validates_offsets() {
        let mut doc = Document::new("abc");
        assert_eq!(
            doc.set_cursor(4),
            Err(NavigateError::InvalidOffset { offset: 4, size: 3 })
        );
        assert!(doc.set_cursor(3).is_ok());
        assert!(doc.set_cursors(Vec::new(), 0).is_err());
    }
}
