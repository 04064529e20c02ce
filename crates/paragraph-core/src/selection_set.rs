//! Multi-cursor selection.

use crate::cursor::Cursor;
use serde::{Deserialize, Serialize};

/// One or more cursors, one of which is primary.
///
/// Paragraph navigation itself only looks at the primary cursor. Hosts that want multi-cursor
/// behavior map every cursor independently and then [`Selection::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cursors: Vec<Cursor>,
    primary_index: usize,
}

impl Selection {
    /// Selection holding a single cursor.
    pub fn single(cursor: Cursor) -> Self {
        Self {
            cursors: vec![cursor],
            primary_index: 0,
        }
    }

    /// Build a normalized selection. Returns `None` for an empty cursor list.
    ///
    /// An out-of-range `primary_index` falls back to the last cursor.
    pub fn from_cursors(cursors: Vec<Cursor>, primary_index: usize) -> Option<Self> {
        if cursors.is_empty() {
            return None;
        }
        let primary_index = primary_index.min(cursors.len() - 1);
        let mut selection = Self {
            cursors,
            primary_index,
        };
        selection.normalize();
        Some(selection)
    }

    /// The primary cursor.
    pub fn primary(&self) -> Cursor {
        self.cursors[self.primary_index]
    }

    /// Index of the primary cursor in [`Selection::cursors`].
    pub fn primary_index(&self) -> usize {
        self.primary_index
    }

    /// All cursors, ordered by start offset.
    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }

    /// Number of cursors (always at least one).
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Always `false`; a selection holds at least one cursor.
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Apply `f` to every cursor and normalize the result.
    pub fn map_each<E>(
        &self,
        mut f: impl FnMut(Cursor) -> Result<Cursor, E>,
    ) -> Result<Selection, E> {
        let cursors = self
            .cursors
            .iter()
            .map(|cursor| f(*cursor))
            .collect::<Result<Vec<_>, E>>()?;
        let mut selection = Selection {
            cursors,
            primary_index: self.primary_index,
        };
        selection.normalize();
        Ok(selection)
    }

    /// Sort cursors by position and merge overlapping ones.
    ///
    /// Cursors that merely touch are kept apart. The primary stays on the old primary cursor, or
    /// follows the merged cursor that swallowed it.
    pub fn normalize(&mut self) {
        let primary = self.primary();

        let mut cursors = std::mem::take(&mut self.cursors);
        cursors.sort_by(|a, b| {
            a.start()
                .cmp(&b.start())
                .then_with(|| a.end().cmp(&b.end()))
                .then_with(|| a.active.cmp(&b.active))
        });

        let mut merged: Vec<Cursor> = Vec::with_capacity(cursors.len());
        for cursor in cursors {
            let Some(last) = merged.last_mut() else {
                merged.push(cursor);
                continue;
            };

            if cursor.start() < last.end() {
                // Merge to the union; canonicalize to forward orientation.
                let start = last.start().min(cursor.start());
                let end = last.end().max(cursor.end());
                *last = Cursor::new(start, end);
            } else if cursor.range() == last.range() {
                continue;
            } else {
                merged.push(cursor);
            }
        }

        self.primary_index = merged
            .iter()
            .position(|c| *c == primary)
            .or_else(|| {
                merged
                    .iter()
                    .position(|c| c.start() <= primary.active && primary.active <= c.end())
            })
            .unwrap_or_else(|| merged.len().saturating_sub(1));
        self.cursors = merged;
    }
}

impl From<Cursor> for Selection {
    fn from(cursor: Cursor) -> Self {
        Self::single(cursor)
    }
}
