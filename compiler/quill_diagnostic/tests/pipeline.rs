//! End-to-end: raw recognizer errors through identity mapping onto a tree,
//! then batch reporting.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use quill_diagnostic::{
    check_and_report_parse_diagnostics, init_tracing, AstNode, CollectingReporter,
    DiagnosticServices, ErrorTrackingReporter, Position, PrefixFormatter, ScopedDiagnosticId,
    Severity, SourceId, SourceLocation, SourceRange, StrictIdMap, SyntaxNode, TableSeverityMap,
};
use std::path::MAIN_SEPARATOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Document,
    Block,
}

// The lexer and parser both number their first error `1`.
const BAD_CHAR: ScopedDiagnosticId = ScopedDiagnosticId::lexical(1);
const MISSING_SEMI: ScopedDiagnosticId = ScopedDiagnosticId::syntactic(1);
const SHADOWED: ScopedDiagnosticId = ScopedDiagnosticId::semantic(4);

fn services() -> DiagnosticServices {
    let ids = StrictIdMap::from_pairs([(BAD_CHAR, 1), (MISSING_SEMI, 1001), (SHADOWED, 2004)])
        .unwrap();
    let severities =
        TableSeverityMap::new(Severity::Error).with_scoped(SHADOWED, Severity::Warning);
    DiagnosticServices::new(severities, PrefixFormatter::new("QD", ids))
}

/// Location of an embedded block inside `main.ql`.
fn block_location() -> SourceLocation {
    SourceLocation::new(
        SourceId::parse("file:///work/main.ql").unwrap(),
        SourceRange::new(Position::with_index(10, 4, 120), Position::with_index(14, 0, 200)),
    )
}

/// A sub-parse of the block reports locations relative to its own start.
fn relative(start: Position, end: Position) -> SourceLocation {
    SourceLocation::unsourced(SourceRange::new(start, end))
}

#[test]
fn pipeline_reports_stable_codes_in_tree_order() {
    init_tracing();
    let services = services();

    let block = SyntaxNode::new(Kind::Block, block_location());
    let root = SyntaxNode::new(Kind::Document, SourceLocation::default()).with_child(block);
    let block = &root.children()[0];

    let bad_char = SourceLocation::offset(
        block.location(),
        &relative(Position::with_index(1, 2, 2), Position::with_index(1, 3, 3)),
    );
    block.add_diagnostic(
        services
            .diagnostic(BAD_CHAR, "unexpected character `$`", Some(bad_char), Some("Lexer"))
            .unwrap(),
    );

    let shadowed = SourceLocation::offset(
        block.location(),
        &relative(Position::with_index(3, 0, 40), Position::with_index(3, 5, 45)),
    );
    root.add_diagnostic(
        services
            .diagnostic(SHADOWED, "`x` shadows an outer binding", Some(shadowed), None)
            .unwrap(),
    );

    let mut reporter = ErrorTrackingReporter::new(CollectingReporter::new());
    assert!(check_and_report_parse_diagnostics(&mut reporter, Some(&root)).unwrap());
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(reporter.warning_count(), 1);

    let lines: Vec<String> = reporter
        .into_inner()
        .into_messages()
        .iter()
        .map(ToString::to_string)
        .collect();
    let origin = format!("{MAIN_SEPARATOR}work{MAIN_SEPARATOR}main.ql");
    assert_eq!(
        lines,
        [
            format!("{origin}(11, 6, 15, 3) : Lexer Error QD0001 : unexpected character `$`"),
            format!("{origin}(13, 0, 17, 5) : Warning QD2004 : `x` shadows an outer binding"),
        ]
    );
}

#[test]
fn pipeline_filters_by_reporter_level() {
    let services = services();
    let root = SyntaxNode::new(Kind::Document, block_location());
    root.add_diagnostic(services.diagnostic(SHADOWED, "warning only", None, None).unwrap());
    root.add_diagnostic(services.diagnostic(MISSING_SEMI, "missing `;`", None, None).unwrap());

    let mut reporter = CollectingReporter::with_level(Severity::Error);
    // found is about the tree, not what the reporter kept
    assert!(check_and_report_parse_diagnostics(&mut reporter, Some(&root)).unwrap());
    let kept: Vec<_> = reporter.messages().iter().map(|m| m.text()).collect();
    assert_eq!(kept, ["missing `;`"]);
}

#[test]
fn unregistered_identifier_is_a_loud_failure() {
    let services = services();
    let unknown = ScopedDiagnosticId::semantic(99);
    assert!(services.diagnostic(unknown, "never registered", None, None).is_err());
}
