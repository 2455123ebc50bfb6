//! Quill Span - Source Location Types
//!
//! This crate contains the value types every diagnostic points at:
//! - [`Position`] for a single point (line, column, optional absolute index)
//! - [`SourceRange`] for a span between two positions
//! - [`SourceLocation`] for a range inside an optionally identified source
//!
//! All types are immutable values. The only arithmetic they support is
//! offset composition: turning a position reported by a sub-parse of an
//! embedded fragment into a position in the enclosing document.
//!
//! ```text
//! // outer document: fragment starts at line 10, column 4, index 200
//! let base = Position::with_index(10, 4, 200);
//! // sub-parse reports an error at its own line 1, column 2, index 2
//! let rel = Position::with_index(1, 2, 2);
//! let abs = Position::offset(base, rel); // (11, 6) at index 202
//! ```

mod location;
mod position;
mod range;

pub use location::{SourceId, SourceIdError, SourceLocation};
pub use position::Position;
pub use range::SourceRange;
