#![warn(missing_docs)]
//! Paragraph Core - Headless Paragraph Navigation for Text Editors
//!
//! # Overview
//!
//! `paragraph-core` moves a cursor (or grows a selection) to the next paragraph boundary of a
//! text buffer. A paragraph is a maximal run of non-blank lines; its boundaries are the offset
//! where it begins and the offset just past its last line.
//!
//! The crate does not own text, rendering or key bindings. A host exposes its document through
//! the [`TextBuffer`] trait and, for the command layer, its selection and view through
//! [`EditorHost`]. Every call is a pure computation over the snapshot it is given.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Commands (navigate, MoveByParagraph)       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Cursor Updates (anchor/active, extend)     │  ← Selection Policy
//! ├─────────────────────────────────────────────┤
//! │  Boundary Finder (pairwise line scan)       │  ← Core Algorithm
//! ├─────────────────────────────────────────────┤
//! │  Line Classifier (blank vs. content)        │
//! ├─────────────────────────────────────────────┤
//! │  Text Buffer (Rope-based snapshot)          │  ← Line Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use paragraph_core::{Cursor, NavigateOptions, RopeBuffer, navigate};
//!
//! let buffer = RopeBuffer::from_text("para1\n\npara2\n");
//!
//! let cursor = navigate(&buffer, Cursor::caret(0), &NavigateOptions::forward()).unwrap();
//! assert_eq!(cursor, Cursor::caret(7));
//!
//! let back = navigate(&buffer, cursor, &NavigateOptions::backward()).unwrap();
//! assert_eq!(back, Cursor::caret(0));
//! ```
//!
//! # Logging
//!
//! Boundary decisions are reported through [`tracing`] at `debug`/`trace` level and rejected
//! configurations at `warn`. Install any subscriber to see them.
//!
//! # Module Description
//!
//! - [`buffer`] - text buffer capability and the rope-backed snapshot
//! - [`classify`] - blank line classification
//! - [`policy`] - direction, boundary policy and command options
//! - [`boundary`] - paragraph boundary finder
//! - [`cursor`] - cursors and the cursor update policy
//! - [`commands`] - navigation entry points, host seam and in-memory document

pub mod boundary;
pub mod buffer;
pub mod classify;
pub mod commands;
pub mod cursor;
mod error;
pub mod policy;
mod selection_set;

pub use boundary::{ParagraphBoundaryFinder, find};
pub use buffer::{Line, RopeBuffer, TextBuffer, is_line_break};
pub use classify::is_blank;
pub use commands::{Document, EditorHost, MoveByParagraph, navigate, navigate_each};
pub use cursor::{Cursor, CursorUpdater, scan_start};
pub use error::NavigateError;
pub use policy::{BoundaryPolicy, Direction, NavigateOptions};
pub use selection_set::Selection;
