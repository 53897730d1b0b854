use crate::AuthStatus;

/// What the authentication collaborator hands back for a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub display_name: Option<String>,
    pub status: AuthStatus,
    pub username: Option<String>,
}

impl AuthOutcome {
    pub fn success(display_name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            status: AuthStatus::Success,
            username: Some(username.into()),
        }
    }

    pub fn failure(username: Option<String>) -> Self {
        Self {
            display_name: None,
            status: AuthStatus::Failure,
            username,
        }
    }

    pub fn pending() -> Self {
        Self {
            display_name: None,
            status: AuthStatus::Pending,
            username: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AuthStatus::Success
    }
}
