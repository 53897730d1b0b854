use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Identity of the single administrator, matched exactly against the
/// display name returned by authentication.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub name: String,
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.is_empty() {
            return Err(ConfigError::admin("admin.name must be set"));
        }

        Ok(())
    }
}
