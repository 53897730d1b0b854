use crate::{AuthOutcome, AuthStatus};

#[test]
fn test_auth_outcome_success() {
    let outcome = AuthOutcome::success("Jay K", "jay");

    assert!(outcome.is_success());
    assert_eq!(outcome.display_name.as_deref(), Some("Jay K"));
    assert_eq!(outcome.username.as_deref(), Some("jay"));
    assert_eq!(outcome.status.message(), None);
}

#[test]
fn test_auth_outcome_failure_and_pending_carry_messages() {
    let failure = AuthOutcome::failure(Some("jay".to_string()));
    let pending = AuthOutcome::pending();

    assert!(!failure.is_success());
    assert_eq!(failure.display_name, None);
    assert_eq!(failure.status, AuthStatus::Failure);
    assert_eq!(
        failure.status.message(),
        Some("Username/password is incorrect")
    );
    assert_eq!(pending.status, AuthStatus::Pending);
    assert_eq!(
        pending.status.message(),
        Some("Please enter your username and password")
    );
}
