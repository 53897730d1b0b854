use crate::{MaskSelection, UserRecord, compute_view};

fn roster() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            identifier_a: Some("123456789012".to_string()),
            identifier_b: Some("ABCDE1234F".to_string()),
        },
        UserRecord {
            id: 2,
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            identifier_a: Some("210987654321".to_string()),
            identifier_b: None,
        },
    ]
}

#[test]
fn test_compute_view_masks_only_selected_and_toggled() {
    let selection = MaskSelection::new(["Alice"], true, false);

    let rows = compute_view(&roster(), &selection);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].identifier_a.as_deref(), Some("XXXX-XXXX-9012"));
    assert_eq!(rows[0].identifier_b.as_deref(), Some("ABCDE1234F"));
    assert_eq!(rows[1].identifier_a.as_deref(), Some("210987654321"));
}

#[test]
fn test_compute_view_both_toggles() {
    let selection = MaskSelection::new(["Alice", "Bob"], true, true);

    let rows = compute_view(&roster(), &selection);

    assert_eq!(rows[0].identifier_b.as_deref(), Some("XXXXXX234F"));
    assert_eq!(rows[1].identifier_a.as_deref(), Some("XXXX-XXXX-4321"));
    assert_eq!(rows[1].identifier_b, None);
}

#[test]
fn test_compute_view_preserves_store_order() {
    let selection = MaskSelection::new(["Bob"], true, true);

    let names: Vec<String> = compute_view(&roster(), &selection)
        .into_iter()
        .map(|row| row.name)
        .collect();

    assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);
}

#[test]
fn test_compute_view_is_repeatable_and_leaves_input_untouched() {
    let records = roster();
    let selection = MaskSelection::new(["Alice"], true, true);

    let first = compute_view(&records, &selection);
    let second = compute_view(&records, &selection);

    assert_eq!(first, second);
    assert_eq!(records, roster());
}

#[test]
fn test_compute_view_empty_selection_shows_originals() {
    let rows = compute_view(&roster(), &MaskSelection::new(Vec::<String>::new(), true, true));

    assert_eq!(rows[0].identifier_a.as_deref(), Some("123456789012"));
    assert_eq!(rows[0].identifier_b.as_deref(), Some("ABCDE1234F"));
}
