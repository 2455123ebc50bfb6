//! Spans between two positions.

use std::fmt;

use crate::Position;

/// An ordered pair of positions describing a span of source.
///
/// A range whose `end` is [`Position::UNKNOWN`] is a *simple* range: it only
/// references the point at `start`.
///
/// Some recognizers report start and stop tokens out of order, so nothing
/// here assumes `start <= end`. Operations that need an ordering normalize
/// through [`SourceRange::min_index`] and [`SourceRange::max_index`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    /// Create a range from two positions.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        SourceRange { start, end }
    }

    /// Create a simple range referencing a single point.
    #[inline]
    pub const fn point(start: Position) -> Self {
        SourceRange {
            start,
            end: Position::UNKNOWN,
        }
    }

    /// Check if this is a simple (point-only) range.
    #[inline]
    pub fn is_simple(&self) -> bool {
        self.end == Position::UNKNOWN
    }

    /// Check if the range starts and ends on the same line.
    #[inline]
    pub fn is_single_line(&self) -> bool {
        self.is_simple() || self.start.line == self.end.line
    }

    /// Smallest absolute index covered, independent of start/end order.
    pub fn min_index(&self) -> Option<u32> {
        self.index_bounds().map(|(min, _)| min)
    }

    /// Largest absolute index covered, independent of start/end order.
    pub fn max_index(&self) -> Option<u32> {
        self.index_bounds().map(|(_, max)| max)
    }

    /// Distance between the normalized indices.
    pub fn length(&self) -> Option<u32> {
        self.index_bounds().map(|(min, max)| max - min)
    }

    /// Check if an absolute index lies within the range (inclusive).
    pub fn contains(&self, index: u32) -> bool {
        self.index_bounds()
            .is_some_and(|(min, max)| min <= index && index <= max)
    }

    /// Slice the text covered by this range out of the document it was
    /// produced from.
    ///
    /// Indices are treated as byte offsets into `text`, covering
    /// `[min_index, max_index)`. Returns `None` if an index is missing, out of
    /// bounds, or not on a char boundary.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let (min, max) = self.index_bounds()?;
        text.get(min as usize..max as usize)
    }

    /// Compose a range relative to `base` into an absolute one.
    ///
    /// Applies [`Position::offset`] to `start` and `end` independently.
    ///
    /// A simple `relative` over a non-simple `base` keeps `base.end`, so the
    /// result is not simple: a point inside a fragment renders as a span
    /// from that point to the end of the fragment.
    #[must_use]
    pub fn offset(base: SourceRange, relative: SourceRange) -> SourceRange {
        SourceRange {
            start: Position::offset(base.start, relative.start),
            end: Position::offset(base.end, relative.end),
        }
    }

    fn index_bounds(&self) -> Option<(u32, u32)> {
        let start = self.start.index?;
        if self.is_simple() {
            return Some((start, start));
        }
        let end = self.end.index?;
        Some((start.min(end), start.max(end)))
    }
}

impl From<Position> for SourceRange {
    fn from(start: Position) -> Self {
        SourceRange::point(start)
    }
}

/// Build-tool form: `(startLine, startCol, endLine, endCol)`, or
/// `(startLine, startCol)` for a simple range.
impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_simple() {
            write!(f, "({}, {})", self.start.line, self.start.column)
        } else {
            write!(
                f,
                "({}, {}, {}, {})",
                self.start.line, self.start.column, self.end.line, self.end.column
            )
        }
    }
}
