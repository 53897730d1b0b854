use crate::{CoreError, IdentifierKind};

use std::str::FromStr;

#[test]
fn test_identifier_kind_as_str() {
    assert_eq!(IdentifierKind::IdentifierA.as_str(), "identifier_a");
    assert_eq!(IdentifierKind::IdentifierB.as_str(), "identifier_b");
}

#[test]
fn test_identifier_kind_from_str() {
    assert_eq!(
        IdentifierKind::from_str("identifier_a").unwrap(),
        IdentifierKind::IdentifierA
    );
    assert_eq!(
        IdentifierKind::from_str("pan").unwrap(),
        IdentifierKind::IdentifierB
    );
    assert!(matches!(
        IdentifierKind::from_str("IDENTIFIER_A"),
        Err(CoreError::InvalidIdentifierKind { .. })
    ));
}

#[test]
fn test_identifier_kind_prefixes_differ() {
    assert_eq!(IdentifierKind::IdentifierA.mask_prefix(), "XXXX-XXXX-");
    assert_eq!(IdentifierKind::IdentifierB.mask_prefix(), "XXXXXX");
}
