//! Append-only diagnostic storage shared across threads.

use std::fmt;

use im::Vector;
use parking_lot::Mutex;

use crate::DiagnosticMessage;

/// Ordered, append-only list of diagnostics attached to one node.
///
/// Appends may race from several threads. Each append swaps in a new
/// persistent snapshot under a short lock, so no append is lost and readers
/// only ever see complete snapshots. A batch appended with
/// [`DiagnosticList::add_all`] lands contiguously.
#[derive(Default)]
pub struct DiagnosticList {
    entries: Mutex<Vector<DiagnosticMessage>>,
}

impl DiagnosticList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic.
    pub fn add(&self, message: DiagnosticMessage) {
        self.entries.lock().push_back(message);
    }

    /// Append a batch of diagnostics as one update.
    pub fn add_all(&self, messages: impl IntoIterator<Item = DiagnosticMessage>) {
        let batch: Vector<DiagnosticMessage> = messages.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        self.entries.lock().append(batch);
    }

    /// Current contents. Later appends do not affect the returned snapshot.
    pub fn snapshot(&self) -> Vector<DiagnosticMessage> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Clone for DiagnosticList {
    fn clone(&self) -> Self {
        DiagnosticList {
            entries: Mutex::new(self.snapshot()),
        }
    }
}

impl fmt::Debug for DiagnosticList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.snapshot().iter()).finish()
    }
}

impl FromIterator<DiagnosticMessage> for DiagnosticList {
    fn from_iter<I: IntoIterator<Item = DiagnosticMessage>>(iter: I) -> Self {
        DiagnosticList {
            entries: Mutex::new(iter.into_iter().collect()),
        }
    }
}
