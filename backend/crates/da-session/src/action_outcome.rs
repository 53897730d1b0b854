use std::fmt::Display;

use log::error;
use serde::Serialize;

/// Result of a write action as the operator sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionOutcome<T> {
    Succeeded { result: T },
    Failed { message: String },
}

impl<T> ActionOutcome<T> {
    /// Log `err` under `action` and turn it into a failure.
    pub fn failed(action: &str, err: impl Display) -> Self {
        error!("{action} failed: {err}");
        Self::Failed {
            message: format!("{action} failed: {err}"),
        }
    }

    /// Keep a success, log and convert an error.
    pub fn from_result<E: Display>(action: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(result) => Self::Succeeded { result },
            Err(err) => Self::failed(action, err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Succeeded { result } => Some(result),
            Self::Failed { .. } => None,
        }
    }
}
