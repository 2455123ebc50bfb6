//! Per-session diagnostic configuration.

use quill_span::SourceLocation;

use crate::{
    CollectingReporter, DiagnosticError, DiagnosticMessage, IdFormatter, IdMap, PrefixFormatter, ScopedDiagnosticId,
    Severity, SeverityMap, TableSeverityMap,
};

/// Settings for a parsing or reporting session.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticSettings {
    /// Prefix of rendered codes (`QD` renders `QD0042`).
    pub code_prefix: String,
    /// Lowest level a reporter built for this session should accept.
    pub minimum_level: Severity,
    /// Level for identifiers without a severity override.
    pub default_level: Severity,
}

impl Default for DiagnosticSettings {
    fn default() -> Self {
        DiagnosticSettings {
            code_prefix: "QD".to_owned(),
            minimum_level: Severity::Verbose,
            default_level: Severity::Error,
        }
    }
}

impl DiagnosticSettings {
    /// Collecting reporter that drops messages below `minimum_level`.
    pub fn reporter(&self) -> CollectingReporter {
        CollectingReporter::with_level(self.minimum_level)
    }
}

/// Severity map and identity formatter configured once per session and
/// shared read-only afterwards.
///
/// Adapters hold one of these instead of reaching for global formatters.
pub struct DiagnosticServices {
    severities: Box<dyn SeverityMap>,
    formatter: Box<dyn IdFormatter>,
}

impl DiagnosticServices {
    pub fn new(
        severities: impl SeverityMap + 'static,
        formatter: impl IdFormatter + 'static,
    ) -> Self {
        DiagnosticServices {
            severities: Box::new(severities),
            formatter: Box::new(formatter),
        }
    }

    /// Prefix formatter over `id_map` plus a severity table whose fallback
    /// is `settings.default_level`.
    pub fn from_settings(settings: &DiagnosticSettings, id_map: impl IdMap + 'static) -> Self {
        Self::new(
            TableSeverityMap::new(settings.default_level),
            PrefixFormatter::new(settings.code_prefix.clone(), id_map),
        )
    }

    pub fn severities(&self) -> &dyn SeverityMap {
        self.severities.as_ref()
    }

    pub fn formatter(&self) -> &dyn IdFormatter {
        self.formatter.as_ref()
    }

    /// Build a message via [`ScopedDiagnosticId::as_diagnostic`].
    pub fn diagnostic(
        &self,
        id: ScopedDiagnosticId,
        text: impl Into<String>,
        location: Option<SourceLocation>,
        subcategory: Option<&str>,
    ) -> Result<DiagnosticMessage, DiagnosticError> {
        id.as_diagnostic(
            self.severities(),
            self.formatter(),
            text,
            location,
            subcategory,
        )
    }
}

impl std::fmt::Debug for DiagnosticServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticServices").finish_non_exhaustive()
    }
}
