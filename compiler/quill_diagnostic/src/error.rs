//! Error types for diagnostic construction, ID mapping, formatting and
//! reporting.
//!
//! All of these signal defects in the calling code (a malformed message, an
//! unregistered ID, a bad format string) or a failing sink. None of them are
//! recovered locally.

use crate::ScopedDiagnosticId;

/// Validation failure while constructing a [`crate::DiagnosticMessage`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticError {
    /// Message text was empty or all whitespace.
    #[error("diagnostic text must not be blank")]
    BlankText,
    /// Severity was [`crate::Severity::None`].
    #[error("diagnostic severity must not be `None`")]
    NoneSeverity,
    /// A raw severity value outside the defined levels.
    #[error("undefined diagnostic severity value {0}")]
    UndefinedSeverity(u8),
    /// The code contained whitespace.
    #[error("diagnostic code {0:?} must not contain whitespace")]
    WhitespaceInCode(String),
    /// The subcategory contained whitespace.
    #[error("diagnostic subcategory {0:?} must not contain whitespace")]
    WhitespaceInSubcategory(String),
    /// The code could not be resolved through the identity map.
    #[error(transparent)]
    IdMap(#[from] IdMapError),
}

/// Failure while mapping or registering a [`ScopedDiagnosticId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdMapError {
    /// Strict lookup of an ID that was never registered.
    #[error("diagnostic identifier {0} not found")]
    NotFound(ScopedDiagnosticId),
    /// An already-published mapping was registered again with a different
    /// unified ID.
    #[error(
        "diagnostic identifier {id} is already mapped to {existing}, cannot remap to {attempted}"
    )]
    Conflict {
        id: ScopedDiagnosticId,
        existing: u32,
        attempted: u32,
    },
}

/// Unrecognized format specifier passed to
/// [`crate::DiagnosticMessage::to_string_with`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown diagnostic format specifier {0:?}")]
    UnknownSpecifier(String),
}

/// Failure raised by a reporter sink.
#[derive(Debug, thiserror::Error)]
#[error("diagnostic reporter failed: {0}")]
pub struct ReportError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl ReportError {
    /// Wrap a sink error.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ReportError(source.into())
    }
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::new(error)
    }
}
