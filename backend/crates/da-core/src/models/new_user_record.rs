use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A record that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub identifier_a: Option<String>,
    pub identifier_b: Option<String>,
}

impl NewUserRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            identifier_a: None,
            identifier_b: None,
        }
    }

    pub fn with_identifier_a(mut self, value: impl Into<String>) -> Self {
        self.identifier_a = Some(value.into());
        self
    }

    pub fn with_identifier_b(mut self, value: impl Into<String>) -> Self {
        self.identifier_b = Some(value.into());
        self
    }

    /// Name and email are required and must not be blank.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "name is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.trim().is_empty() {
            return Err(CoreError::Validation {
                message: format!("email is required for '{}'", self.name),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
