//! Navigation direction, boundary policy and the command option set.
//!
//! [`NavigateOptions`] is the full argument surface of a paragraph move. It can be built in code
//! or deserialized from a JSON argument object, the way editor hosts deliver command arguments:
//!
//! ```rust
//! use paragraph_core::{Direction, NavigateOptions};
//!
//! let options = NavigateOptions::from_json(r#"{"direction": "forward", "extend": true}"#).unwrap();
//! assert_eq!(options.direction, Direction::Forward);
//! assert!(options.extend);
//! assert!(options.ignore_blank_lines);
//! assert!(options.stop_at_paragraph_begin);
//! assert!(!options.stop_at_paragraph_end);
//! ```

use crate::error::NavigateError;
use serde::{Deserialize, Serialize};

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the end of the buffer.
    Forward,
    /// Toward the start of the buffer.
    Backward,
}

impl Direction {
    /// Returns `true` for [`Direction::Forward`].
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

/// Which lines count as blank and which boundaries stop a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryPolicy {
    /// Treat whitespace-only lines as blank.
    pub ignore_blank_lines: bool,
    /// Stop where a paragraph begins.
    pub stop_at_begin: bool,
    /// Stop where a paragraph ends.
    pub stop_at_end: bool,
}

impl BoundaryPolicy {
    /// Create a policy.
    pub fn new(ignore_blank_lines: bool, stop_at_begin: bool, stop_at_end: bool) -> Self {
        Self {
            ignore_blank_lines,
            stop_at_begin,
            stop_at_end,
        }
    }

    /// At least one stop flag must be set, otherwise no boundary can ever match.
    pub fn validate(&self) -> Result<(), NavigateError> {
        if self.stop_at_begin || self.stop_at_end {
            Ok(())
        } else {
            Err(NavigateError::NoStopPolicy)
        }
    }
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        Self::new(true, true, false)
    }
}

/// Arguments of a single paragraph move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NavigateArgs")]
pub struct NavigateOptions {
    /// Scan direction.
    pub direction: Direction,
    /// Grow or shrink the selection instead of moving a collapsed cursor.
    pub extend: bool,
    /// Treat whitespace-only lines as blank.
    pub ignore_blank_lines: bool,
    /// Stop where a paragraph begins.
    pub stop_at_paragraph_begin: bool,
    /// Stop where a paragraph ends.
    pub stop_at_paragraph_end: bool,
}

impl NavigateOptions {
    /// Options for a plain move in `direction`, with every other argument at its default.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            extend: false,
            ignore_blank_lines: true,
            stop_at_paragraph_begin: true,
            stop_at_paragraph_end: false,
        }
    }

    /// Plain forward move.
    pub fn forward() -> Self {
        Self::new(Direction::Forward)
    }

    /// Plain backward move.
    pub fn backward() -> Self {
        Self::new(Direction::Backward)
    }

    /// Set the `extend` flag.
    pub fn extend(mut self, extend: bool) -> Self {
        self.extend = extend;
        self
    }

    /// Set the `ignore_blank_lines` flag.
    pub fn ignore_blank_lines(mut self, ignore: bool) -> Self {
        self.ignore_blank_lines = ignore;
        self
    }

    /// Set the `stop_at_paragraph_begin` flag.
    pub fn stop_at_begin(mut self, stop: bool) -> Self {
        self.stop_at_paragraph_begin = stop;
        self
    }

    /// Set the `stop_at_paragraph_end` flag.
    pub fn stop_at_end(mut self, stop: bool) -> Self {
        self.stop_at_paragraph_end = stop;
        self
    }

    /// Boundary policy derived from these options.
    pub fn policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::new(
            self.ignore_blank_lines,
            self.stop_at_paragraph_begin,
            self.stop_at_paragraph_end,
        )
    }

    /// Parse a JSON argument object.
    pub fn from_json(args: &str) -> Result<Self, NavigateError> {
        Ok(serde_json::from_str(args)?)
    }
}

/// Wire form of [`NavigateOptions`]: every field optional.
///
/// The legacy boolean `forward` wins over `direction` when both are present. With neither, the
/// move goes backward.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NavigateArgs {
    direction: Option<Direction>,
    forward: Option<bool>,
    extend: Option<bool>,
    ignore_blank_lines: Option<bool>,
    stop_at_paragraph_begin: Option<bool>,
    stop_at_paragraph_end: Option<bool>,
}

impl From<NavigateArgs> for NavigateOptions {
    fn from(args: NavigateArgs) -> Self {
        let direction = match (args.forward, args.direction) {
            (Some(true), _) => Direction::Forward,
            (Some(false), _) => Direction::Backward,
            (None, Some(direction)) => direction,
            (None, None) => Direction::Backward,
        };
        let defaults = NavigateOptions::new(direction);
        NavigateOptions {
            direction,
            extend: args.extend.unwrap_or(defaults.extend),
            ignore_blank_lines: args.ignore_blank_lines.unwrap_or(defaults.ignore_blank_lines),
            stop_at_paragraph_begin: args
                .stop_at_paragraph_begin
                .unwrap_or(defaults.stop_at_paragraph_begin),
            stop_at_paragraph_end: args
                .stop_at_paragraph_end
                .unwrap_or(defaults.stop_at_paragraph_end),
        }
    }
}
