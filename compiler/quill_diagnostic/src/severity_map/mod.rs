//! Deciding the severity of a diagnostic identifier.

use rustc_hash::FxHashMap;

use crate::{ScopedDiagnosticId, Severity};

/// Maps identifiers to a severity level. Lookups never fail: unmapped
/// identifiers resolve to an implementation-chosen default.
pub trait SeverityMap: Send + Sync {
    fn level_for(&self, id: ScopedDiagnosticId) -> Severity;

    fn level_for_unified(&self, id: u32) -> Severity;
}

/// Every identifier is an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AllErrors;

impl SeverityMap for AllErrors {
    fn level_for(&self, _id: ScopedDiagnosticId) -> Severity {
        Severity::Error
    }

    fn level_for_unified(&self, _id: u32) -> Severity {
        Severity::Error
    }
}

/// Severity table with per-application overrides.
///
/// Scoped and unified overrides are looked up independently; anything not
/// overridden gets the fallback level.
///
/// ```text
/// let map = TableSeverityMap::new(Severity::Error)
///     .with_scoped(ScopedDiagnosticId::lexical(12), Severity::Warning)
///     .with_unified(2001, Severity::Information);
/// ```
#[derive(Clone, Debug)]
pub struct TableSeverityMap {
    scoped: FxHashMap<ScopedDiagnosticId, Severity>,
    unified: FxHashMap<u32, Severity>,
    fallback: Severity,
}

impl Default for TableSeverityMap {
    fn default() -> Self {
        Self::new(Severity::Error)
    }
}

impl TableSeverityMap {
    pub fn new(fallback: Severity) -> Self {
        TableSeverityMap {
            scoped: FxHashMap::default(),
            unified: FxHashMap::default(),
            fallback,
        }
    }

    #[must_use]
    pub fn with_scoped(mut self, id: ScopedDiagnosticId, level: Severity) -> Self {
        self.scoped.insert(id, level);
        self
    }

    #[must_use]
    pub fn with_unified(mut self, id: u32, level: Severity) -> Self {
        self.unified.insert(id, level);
        self
    }

    pub fn fallback(&self) -> Severity {
        self.fallback
    }
}

impl SeverityMap for TableSeverityMap {
    fn level_for(&self, id: ScopedDiagnosticId) -> Severity {
        self.scoped.get(&id).copied().unwrap_or(self.fallback)
    }

    fn level_for_unified(&self, id: u32) -> Severity {
        self.unified.get(&id).copied().unwrap_or(self.fallback)
    }
}

impl<S: SeverityMap + ?Sized> SeverityMap for Box<S> {
    fn level_for(&self, id: ScopedDiagnosticId) -> Severity {
        (**self).level_for(id)
    }

    fn level_for_unified(&self, id: u32) -> Severity {
        (**self).level_for_unified(id)
    }
}
