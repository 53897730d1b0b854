use crate::{CoreError, NewUserRecord};

#[test]
fn test_new_user_record_builder() {
    let record = NewUserRecord::new("Alice", "a@x.com")
        .with_identifier_a("123456789012")
        .with_identifier_b("ABCDE1234F");

    assert_eq!(record.name, "Alice");
    assert_eq!(record.identifier_a.as_deref(), Some("123456789012"));
    assert_eq!(record.identifier_b.as_deref(), Some("ABCDE1234F"));
    assert!(record.validate().is_ok());
}

#[test]
fn test_new_user_record_identifiers_optional() {
    let record = NewUserRecord::new("Alice", "a@x.com");

    assert_eq!(record.identifier_a, None);
    assert!(record.validate().is_ok());
}

#[test]
fn test_new_user_record_blank_name_rejected() {
    let record = NewUserRecord::new("   ", "a@x.com");

    assert!(matches!(
        record.validate(),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn test_new_user_record_blank_email_rejected() {
    let record = NewUserRecord::new("Alice", "");

    assert!(matches!(
        record.validate(),
        Err(CoreError::Validation { .. })
    ));
}
