use serde::Serialize;

/// Tri-state login result. Only `Success` opens a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    Success,
    Failure,
    /// No credentials entered yet
    Pending,
}

impl AuthStatus {
    /// Message shown to the operator for a non-success status
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => None,
            Self::Failure => Some("Username/password is incorrect"),
            Self::Pending => Some("Please enter your username and password"),
        }
    }
}
