#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::{
    AllErrors, IdMapError, PassthroughIdMap, PrefixFormatter, Severity, StrictIdMap,
    TableSeverityMap,
};
use pretty_assertions::assert_eq;
use quill_span::{Position, SourceId, SourceRange};

#[test]
fn test_constructors() {
    assert_eq!(
        ScopedDiagnosticId::lexical(3),
        ScopedDiagnosticId::new(DiagnosticScope::Lexical, 3)
    );
    assert_eq!(ScopedDiagnosticId::syntactic(3).scope, DiagnosticScope::Syntactic);
    assert_eq!(ScopedDiagnosticId::semantic(3).scope, DiagnosticScope::Semantic);
    assert_ne!(ScopedDiagnosticId::lexical(3), ScopedDiagnosticId::syntactic(3));
}

#[test]
fn test_display() {
    assert_eq!(ScopedDiagnosticId::syntactic(17).to_string(), "syntactic:17");
}

#[test]
fn test_as_diagnostic() {
    let id = ScopedDiagnosticId::syntactic(2);
    let formatter = PrefixFormatter::new("FOO", StrictIdMap::from_pairs([(id, 1)]).unwrap());
    let location = SourceLocation::new(
        SourceId::parse("input.ql").unwrap(),
        SourceRange::new(Position::new(1, 0), Position::new(1, 4)),
    );

    let msg = id
        .as_diagnostic(
            &AllErrors,
            &formatter,
            "unexpected token",
            Some(location.clone()),
            Some("Parser"),
        )
        .unwrap();

    assert_eq!(msg.code(), Some("FOO0001"));
    assert_eq!(msg.level(), Severity::Error);
    assert_eq!(msg.text(), "unexpected token");
    assert_eq!(msg.subcategory(), Some("Parser"));
    assert_eq!(msg.location(), &location);
}

#[test]
fn test_as_diagnostic_code_matches_formatter() {
    let formatter = PrefixFormatter::new("QD", PassthroughIdMap::new());
    let severities = TableSeverityMap::new(Severity::Warning);
    for code in [0, 7, 42, 12_345] {
        let id = ScopedDiagnosticId::lexical(code);
        let msg = id.as_diagnostic(&severities, &formatter, "x", None, None).unwrap();
        let unified = formatter.id_map().map_id(id).unwrap();
        assert_eq!(msg.code(), Some(formatter.format_unified(unified).as_str()));
        assert_eq!(msg.level(), Severity::Warning);
    }
}

#[test]
fn test_as_diagnostic_strict_miss() {
    let formatter = PrefixFormatter::new("QD", StrictIdMap::new());
    let id = ScopedDiagnosticId::lexical(5);
    let result = id.as_diagnostic(&AllErrors, &formatter, "text", None, None);
    assert_eq!(result, Err(DiagnosticError::IdMap(IdMapError::NotFound(id))));
}

#[test]
fn test_as_diagnostic_rejects_blank_text() {
    let formatter = PrefixFormatter::new("QD", PassthroughIdMap::new());
    let result =
        ScopedDiagnosticId::lexical(5).as_diagnostic(&AllErrors, &formatter, "", None, None);
    assert_eq!(result, Err(DiagnosticError::BlankText));
}
