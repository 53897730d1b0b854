use crate::{MaskSelection, UserRecord};

fn alice() -> UserRecord {
    UserRecord {
        id: 7,
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        identifier_a: Some("123456789012".to_string()),
        identifier_b: Some("ABCDE1234F".to_string()),
    }
}

#[test]
fn test_mask_selection_default_is_empty() {
    let selection = MaskSelection::default();

    assert!(selection.is_empty());
    assert!(!selection.mask_identifier_a);
    assert!(!selection.mask_identifier_b);
}

#[test]
fn test_mask_selection_deduplicates_names() {
    let selection = MaskSelection::new(["Alice", "Alice", "Bob"], false, false);

    assert_eq!(selection.names.len(), 2);
    assert!(selection.is_selected("Bob"));
    assert!(!selection.is_selected("bob"));
}

#[test]
fn test_mask_selection_apply_unselected_is_identity() {
    let selection = MaskSelection::new(["Bob"], true, true);

    let (a, b) = selection.apply(&alice());

    assert_eq!(a.as_deref(), Some("123456789012"));
    assert_eq!(b.as_deref(), Some("ABCDE1234F"));
}

#[test]
fn test_mask_selection_apply_toggle_b_only() {
    let selection = MaskSelection::new(["Alice"], false, true);

    let (a, b) = selection.apply(&alice());

    assert_eq!(a.as_deref(), Some("123456789012"));
    assert_eq!(b.as_deref(), Some("XXXXXX234F"));
}

#[test]
fn test_mask_selection_apply_missing_identifier_stays_missing() {
    let mut record = alice();
    record.identifier_a = None;
    let selection = MaskSelection::new(["Alice"], true, true);

    let (a, _) = selection.apply(&record);

    assert_eq!(a, None);
}
