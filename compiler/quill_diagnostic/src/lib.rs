//! Stable diagnostic model shared by parsers and their front ends.
//!
//! Parsing technologies number their errors in their own, often unstable,
//! spaces. This crate turns those raw identifiers into diagnostics whose
//! codes and severities stay put across releases:
//!
//! - [`ScopedDiagnosticId`] is the raw `(scope, code)` pair an adapter sees
//! - [`IdMap`] maps it to a process-wide unified ID
//! - [`SeverityMap`] decides how loud it is
//! - [`IdFormatter`] renders the user-visible code (`QD0042`)
//! - [`DiagnosticMessage`] is the validated, immutable result
//!
//! Messages are reported straight to a [`DiagnosticReporter`] or attached to
//! nodes of a syntax tree ([`AstNode`]) and collected later with
//! [`check_and_report_parse_diagnostics`].
//!
//! ```text
//! let services = DiagnosticServices::from_settings(&settings, PassthroughIdMap::new());
//! let msg = services.diagnostic(id, "unexpected token", Some(location), None)?;
//! node.diagnostics().add(msg);
//! // ... later
//! let found = check_and_report_parse_diagnostics(&mut reporter, Some(&root))?;
//! ```

mod error;
mod formatter;
mod id_map;
mod message;
pub mod reporter;
mod scoped_id;
mod services;
mod severity;
mod severity_map;
mod trace;
pub mod tree;

pub use error::{DiagnosticError, FormatError, IdMapError, ReportError};
pub use formatter::{IdFormatter, PrefixFormatter};
pub use id_map::{IdMap, PassthroughIdMap, StrictIdMap};
pub use message::{DiagnosticFormat, DiagnosticMessage, DiagnosticMessageBuilder};
pub use reporter::{
    is_enabled, CollectingReporter, DiagnosticReporter, ErrorTrackingReporter, TracingReporter,
};
pub use scoped_id::{DiagnosticScope, ScopedDiagnosticId};
pub use services::{DiagnosticServices, DiagnosticSettings};
pub use severity::Severity;
pub use severity_map::{AllErrors, SeverityMap, TableSeverityMap};
pub use trace::init_tracing;
pub use tree::{
    check_and_report_parse_diagnostics, collect_diagnostics, AstNode, AstVisitor,
    DiagnosticCollector, DiagnosticList, SyntaxNode,
};

// Re-export the location types so adapters only need one dependency.
pub use quill_span::{Position, SourceId, SourceLocation, SourceRange};
