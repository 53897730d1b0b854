use crate::{hash_password, verify_password};

#[test]
fn test_hash_and_verify_password() {
    let hash = hash_password("da-test-password").unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("da-test-password", &hash));
    assert!(!verify_password("wrong-password", &hash));
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("same").unwrap();
    let second = hash_password("same").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_malformed_hash_never_verifies() {
    assert!(!verify_password("anything", "not-a-phc-string"));
    assert!(!verify_password("anything", ""));
}
