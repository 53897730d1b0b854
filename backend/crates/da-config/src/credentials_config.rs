use crate::{ConfigErrorResult, UserCredentialConfig};

use std::collections::BTreeMap;

use serde::Deserialize;

/// Seed roster and login credentials, keyed by login username.
///
/// A sorted map keeps seeding order stable between runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub usernames: BTreeMap<String, UserCredentialConfig>,
}

impl CredentialsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (username, entry) in &self.usernames {
            entry.validate(username)?;
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }

    pub fn get(&self, username: &str) -> Option<&UserCredentialConfig> {
        self.usernames.get(username)
    }
}
