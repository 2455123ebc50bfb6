#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn any_position() -> impl Strategy<Value = Position> {
    (
        0u32..10_000,
        0u32..10_000,
        proptest::option::of(0u32..1_000_000),
    )
        .prop_map(|(line, column, index)| Position {
            line,
            column,
            index,
        })
}

#[test]
fn test_position_default_is_unknown() {
    assert_eq!(Position::default(), Position::UNKNOWN);
    assert!(Position::default().is_unknown());
    assert!(!Position::new(1, 0).is_unknown());
}

#[test]
fn test_offset_same_line_adds_columns() {
    let base = Position::with_index(10, 4, 200);
    let rel = Position::with_index(1, 2, 2);
    assert_eq!(Position::offset(base, rel), Position::with_index(11, 6, 202));
}

#[test]
fn test_offset_later_line_keeps_relative_column() {
    let base = Position::with_index(10, 40, 200);
    let rel = Position::with_index(3, 5, 17);
    assert_eq!(Position::offset(base, rel), Position::with_index(13, 5, 217));
}

#[test]
fn test_offset_missing_index_propagates() {
    let base = Position::new(1, 1);
    let rel = Position::with_index(1, 1, 9);
    assert_eq!(Position::offset(base, rel).index, None);

    let base = Position::with_index(1, 1, 9);
    let rel = Position::new(1, 1);
    assert_eq!(Position::offset(base, rel).index, None);
}

#[test]
fn test_offset_of_zero_base() {
    let rel = Position::with_index(2, 7, 30);
    let result = Position::offset(Position::with_index(0, 0, 0), rel);
    assert_eq!(result, rel);
}

#[test]
fn test_offset_saturates() {
    let base = Position::with_index(u32::MAX, u32::MAX, u32::MAX);
    let rel = Position::with_index(1, 1, 1);
    let result = Position::offset(base, rel);
    assert_eq!(result.line, u32::MAX);
    assert_eq!(result.column, u32::MAX);
    assert_eq!(result.index, Some(u32::MAX));
}

#[test]
fn test_position_display() {
    assert_eq!(Position::with_index(3, 14, 99).to_string(), "(3, 14)");
}

proptest! {
    #[test]
    fn offset_by_lineless_relative_is_identity(
        base in any_position(),
        column in 0u32..100,
        index in proptest::option::of(0u32..100),
    ) {
        let rel = Position { line: 0, column, index };
        prop_assert_eq!(Position::offset(base, rel), base);
    }

    #[test]
    fn offset_past_next_line_ignores_base_column(
        base in any_position(),
        line in 2u32..1_000,
        column in 0u32..1_000,
    ) {
        let rel = Position::new(line, column);
        prop_assert_eq!(Position::offset(base, rel).column, column);
    }
}
