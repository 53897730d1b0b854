use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// One `[credentials.usernames.<username>]` entry.
///
/// `password` holds an Argon2 PHC string. The identifier fields also accept
/// the `aadhar_card_number` / `pan_card_number` keys of older rosters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCredentialConfig {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, alias = "aadhar_card_number")]
    pub identifier_a: Option<String>,
    #[serde(default, alias = "pan_card_number")]
    pub identifier_b: Option<String>,
}

impl UserCredentialConfig {
    pub fn validate(&self, username: &str) -> ConfigErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::credentials(format!(
                "credentials.usernames.{username}.name must not be empty"
            )));
        }

        if self.email.trim().is_empty() {
            return Err(ConfigError::credentials(format!(
                "credentials.usernames.{username}.email must not be empty"
            )));
        }

        Ok(())
    }
}
