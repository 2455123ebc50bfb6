#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

const LEX_BAD_CHAR: ScopedDiagnosticId = ScopedDiagnosticId::lexical(1);
const PARSE_MISSING: ScopedDiagnosticId = ScopedDiagnosticId::syntactic(1);

#[test]
fn test_strict_map_lookup() {
    let map = StrictIdMap::from_pairs([(LEX_BAD_CHAR, 100), (PARSE_MISSING, 200)]).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.map_id(LEX_BAD_CHAR), Ok(100));
    assert_eq!(map.map_id(PARSE_MISSING), Ok(200));
}

#[test]
fn test_strict_map_miss_is_not_found() {
    let map = StrictIdMap::from_pairs([(LEX_BAD_CHAR, 100)]).unwrap();
    let missing = ScopedDiagnosticId::semantic(1);
    assert_eq!(map.map_id(missing), Err(IdMapError::NotFound(missing)));
}

#[test]
fn test_same_code_different_scope_is_distinct() {
    // both raw codes are 1, the scope keeps them apart
    let map = StrictIdMap::from_pairs([(LEX_BAD_CHAR, 100), (PARSE_MISSING, 200)]).unwrap();
    assert_ne!(map.map_id(LEX_BAD_CHAR), map.map_id(PARSE_MISSING));
}

#[test]
fn test_passthrough_falls_back_to_code() {
    let map = PassthroughIdMap::from_pairs([(PARSE_MISSING, 1042)]).unwrap();
    assert_eq!(map.map_id(PARSE_MISSING), Ok(1042));
    assert_eq!(map.map_id(ScopedDiagnosticId::semantic(7)), Ok(7));
    assert_eq!(map.resolve(ScopedDiagnosticId::lexical(3)), 3);
}

#[test]
fn test_empty_passthrough_is_identity() {
    let map = PassthroughIdMap::new();
    for code in [0, 1, 9999, u32::MAX] {
        assert_eq!(map.map_id(ScopedDiagnosticId::syntactic(code)), Ok(code));
    }
}

#[test]
fn test_register_is_append_only() {
    let mut map = StrictIdMap::new();
    assert!(map.is_empty());
    map.register(LEX_BAD_CHAR, 100).unwrap();
    map.register(LEX_BAD_CHAR, 100).unwrap();
    assert_eq!(
        map.register(LEX_BAD_CHAR, 101),
        Err(IdMapError::Conflict {
            id: LEX_BAD_CHAR,
            existing: 100,
            attempted: 101,
        })
    );
    assert_eq!(map.map_id(LEX_BAD_CHAR), Ok(100));
}

#[test]
fn test_from_pairs_rejects_conflict() {
    let result = PassthroughIdMap::from_pairs([(LEX_BAD_CHAR, 1), (LEX_BAD_CHAR, 2)]);
    assert!(matches!(result, Err(IdMapError::Conflict { .. })));
}

#[test]
fn test_boxed_map() {
    let map: Box<dyn IdMap> = Box::new(PassthroughIdMap::new());
    assert_eq!(map.map_id(LEX_BAD_CHAR), Ok(1));
}
