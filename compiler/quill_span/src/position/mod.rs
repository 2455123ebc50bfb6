//! Points in a source document.

use std::fmt;

/// An immutable point in a source document.
///
/// - `line` is 1-based; `0` means the line is unknown.
/// - `column` is 0-based.
/// - `index` is the 0-based absolute offset into the document, when the
///   producing recognizer tracks one.
///
/// `Default` is [`Position::UNKNOWN`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub index: Option<u32>,
}

impl Position {
    /// Uninitialized position (line 0).
    pub const UNKNOWN: Position = Position {
        line: 0,
        column: 0,
        index: None,
    };

    /// Create a position without an absolute index.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position {
            line,
            column,
            index: None,
        }
    }

    /// Create a position with an absolute index.
    #[inline]
    pub const fn with_index(line: u32, column: u32, index: u32) -> Self {
        Position {
            line,
            column,
            index: Some(index),
        }
    }

    /// Check whether the line is unknown.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.line == 0
    }

    /// Compose a position relative to `base` into an absolute one.
    ///
    /// - A `relative` with line 0 carries no delta: `base` is returned.
    /// - Lines add.
    /// - Columns add while the relative position stays on the base line or
    ///   the one after it; once `relative.line > 1` the relative column is
    ///   used verbatim.
    /// - Indices add; a missing index on either side yields no index.
    ///
    /// This is not associative in general. Compose offsets pairwise from the
    /// outermost base inward.
    #[must_use]
    pub fn offset(base: Position, relative: Position) -> Position {
        if relative.line == 0 {
            return base;
        }

        // relative.line != 0 here, so the unsigned sum is never the
        // degenerate zero line.
        let line = base.line.saturating_add(relative.line);

        let column = if relative.line > 1 {
            relative.column
        } else {
            base.column.saturating_add(relative.column)
        };

        let index = match (base.index, relative.index) {
            (Some(b), Some(r)) => Some(b.saturating_add(r)),
            _ => None,
        };

        Position {
            line,
            column,
            index,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
