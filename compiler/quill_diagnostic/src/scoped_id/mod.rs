//! Raw diagnostic identifiers as produced by one parsing phase.
//!
//! A lexer generator, a parser generator and a hand-written semantic pass
//! each number their errors independently, and they reuse numbers freely.
//! [`ScopedDiagnosticId`] keeps the phase alongside the code so the two never
//! collide before they are mapped into the unified space.

use std::fmt;

use quill_span::SourceLocation;

use crate::{DiagnosticError, DiagnosticMessage, IdFormatter, SeverityMap};

/// The analysis phase that produced a raw identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum DiagnosticScope {
    Lexical,
    Syntactic,
    Semantic,
}

impl fmt::Display for DiagnosticScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticScope::Lexical => write!(f, "lexical"),
            DiagnosticScope::Syntactic => write!(f, "syntactic"),
            DiagnosticScope::Semantic => write!(f, "semantic"),
        }
    }
}

/// A `(scope, code)` pair. `code` only has meaning within `scope`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ScopedDiagnosticId {
    pub scope: DiagnosticScope,
    pub code: u32,
}

impl ScopedDiagnosticId {
    #[inline]
    pub const fn new(scope: DiagnosticScope, code: u32) -> Self {
        ScopedDiagnosticId { scope, code }
    }

    #[inline]
    pub const fn lexical(code: u32) -> Self {
        Self::new(DiagnosticScope::Lexical, code)
    }

    #[inline]
    pub const fn syntactic(code: u32) -> Self {
        Self::new(DiagnosticScope::Syntactic, code)
    }

    #[inline]
    pub const fn semantic(code: u32) -> Self {
        Self::new(DiagnosticScope::Semantic, code)
    }

    /// Build the diagnostic message for this identifier.
    ///
    /// This is the one sanctioned path from a raw technology error to a
    /// [`DiagnosticMessage`]: the code comes from `formatter`, the level from
    /// `severities`, so every adapter produces the same code and severity
    /// for the same identifier. A missing `location` becomes
    /// `SourceLocation::default()`.
    pub fn as_diagnostic(
        self,
        severities: &dyn SeverityMap,
        formatter: &dyn IdFormatter,
        text: impl Into<String>,
        location: Option<SourceLocation>,
        subcategory: Option<&str>,
    ) -> Result<DiagnosticMessage, DiagnosticError> {
        let code = formatter.format_code(self)?;
        let level = severities.level_for(self);

        let mut builder = DiagnosticMessage::builder(level, text)
            .code(code)
            .location(location.unwrap_or_default());
        if let Some(subcategory) = subcategory {
            builder = builder.subcategory(subcategory);
        }

        builder.build().inspect_err(|error| {
            tracing::debug!(id = %self, %error, "rejected diagnostic");
        })
    }
}

impl fmt::Display for ScopedDiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope, self.code)
    }
}

#[cfg(test)]
mod tests;
