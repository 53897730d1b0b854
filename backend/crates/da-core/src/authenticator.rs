use crate::AuthOutcome;

/// Authentication boundary. Implementations own credential storage and
/// verification; callers only look at the status and display name.
pub trait Authenticator {
    fn login(&self, username: &str, password: &str) -> AuthOutcome;
}
