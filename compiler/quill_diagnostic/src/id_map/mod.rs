//! Mapping raw scoped identifiers to unified diagnostic IDs.
//!
//! # Stability
//!
//! Once a `(scope, code) -> unified` mapping ships, it must never change and
//! the unified ID must never be reused for a different meaning. Tables only
//! ever grow. Nothing here can enforce that across releases; it is a review
//! rule for whoever edits the tables. Within a single table,
//! [`register`](StrictIdMap::register) rejects remapping an ID that is
//! already present.

use rustc_hash::FxHashMap;

use crate::{IdMapError, ScopedDiagnosticId};

/// Maps a [`ScopedDiagnosticId`] to a stable, process-wide unified ID.
pub trait IdMap: Send + Sync {
    fn map_id(&self, id: ScopedDiagnosticId) -> Result<u32, IdMapError>;
}

/// Append-only registration shared by both table strategies.
fn register_in(
    table: &mut FxHashMap<ScopedDiagnosticId, u32>,
    id: ScopedDiagnosticId,
    unified: u32,
) -> Result<(), IdMapError> {
    match table.get(&id) {
        Some(&existing) if existing == unified => Ok(()),
        Some(&existing) => Err(IdMapError::Conflict {
            id,
            existing,
            attempted: unified,
        }),
        None => {
            table.insert(id, unified);
            Ok(())
        }
    }
}

/// Table lookup that fails for unregistered IDs.
///
/// Use when every identifier is expected to be pre-registered; a miss means a
/// registration bug.
#[derive(Clone, Debug, Default)]
pub struct StrictIdMap {
    table: FxHashMap<ScopedDiagnosticId, u32>,
}

impl StrictIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(id, unified)` pairs.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (ScopedDiagnosticId, u32)>,
    ) -> Result<Self, IdMapError> {
        let mut map = Self::new();
        for (id, unified) in pairs {
            map.register(id, unified)?;
        }
        Ok(map)
    }

    /// Register a mapping. Registering the same pair twice is a no-op.
    pub fn register(&mut self, id: ScopedDiagnosticId, unified: u32) -> Result<(), IdMapError> {
        register_in(&mut self.table, id, unified)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl IdMap for StrictIdMap {
    fn map_id(&self, id: ScopedDiagnosticId) -> Result<u32, IdMapError> {
        self.table.get(&id).copied().ok_or_else(|| {
            tracing::debug!(%id, "unregistered diagnostic identifier");
            IdMapError::NotFound(id)
        })
    }
}

/// Table lookup that falls back to the raw code.
///
/// Use when only some identifiers need remapping and the rest are already
/// stable. Never returns an error from [`IdMap::map_id`]. An empty table is a
/// pure 1:1 passthrough.
#[derive(Clone, Debug, Default)]
pub struct PassthroughIdMap {
    table: FxHashMap<ScopedDiagnosticId, u32>,
}

impl PassthroughIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(id, unified)` pairs.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (ScopedDiagnosticId, u32)>,
    ) -> Result<Self, IdMapError> {
        let mut map = Self::new();
        for (id, unified) in pairs {
            map.register(id, unified)?;
        }
        Ok(map)
    }

    /// Register a mapping. Registering the same pair twice is a no-op.
    pub fn register(&mut self, id: ScopedDiagnosticId, unified: u32) -> Result<(), IdMapError> {
        register_in(&mut self.table, id, unified)
    }

    /// Infallible lookup.
    pub fn resolve(&self, id: ScopedDiagnosticId) -> u32 {
        self.table.get(&id).copied().unwrap_or(id.code)
    }
}

impl IdMap for PassthroughIdMap {
    fn map_id(&self, id: ScopedDiagnosticId) -> Result<u32, IdMapError> {
        Ok(self.resolve(id))
    }
}

impl<M: IdMap + ?Sized> IdMap for &M {
    fn map_id(&self, id: ScopedDiagnosticId) -> Result<u32, IdMapError> {
        (**self).map_id(id)
    }
}

impl<M: IdMap + ?Sized> IdMap for Box<M> {
    fn map_id(&self, id: ScopedDiagnosticId) -> Result<u32, IdMapError> {
        (**self).map_id(id)
    }
}

#[cfg(test)]
mod tests;
