//! Rendering identifiers to the code string users see.

use crate::{IdMap, IdMapError, ScopedDiagnosticId};

/// Renders diagnostic identifiers as external code strings.
///
/// Implementors provide the identity map and the unified rendering; the
/// scoped rendering is derived from them so the two can never disagree:
/// `format_code(id) == format_unified(id_map().map_id(id)?)`.
pub trait IdFormatter: Send + Sync {
    /// The map used to resolve scoped identifiers.
    fn id_map(&self) -> &dyn IdMap;

    /// Render a unified ID.
    fn format_unified(&self, unified: u32) -> String;

    /// Render a scoped ID through the identity map.
    fn format_code(&self, id: ScopedDiagnosticId) -> Result<String, IdMapError> {
        self.id_map()
            .map_id(id)
            .map(|unified| self.format_unified(unified))
    }
}

/// Renders `{prefix}{unified:04}`, e.g. `QD0042`.
#[derive(Clone, Debug)]
pub struct PrefixFormatter<M> {
    prefix: String,
    map: M,
}

impl<M: IdMap> PrefixFormatter<M> {
    pub fn new(prefix: impl Into<String>, map: M) -> Self {
        PrefixFormatter {
            prefix: prefix.into(),
            map,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<M: IdMap> IdFormatter for PrefixFormatter<M> {
    fn id_map(&self) -> &dyn IdMap {
        &self.map
    }

    fn format_unified(&self, unified: u32) -> String {
        format!("{}{unified:04}", self.prefix)
    }
}
