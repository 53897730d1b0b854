use crate::{ConfigError, ConfigErrorResult, DATABASE_FILE_EXTENSION, DEFAULT_DATABASE_NAME};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The database is an SQLite file named after `name` inside the config dir.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_DATABASE_NAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::database("database.name must not be empty"));
        }

        if self.name.contains("..") || self.name.contains('/') || self.name.contains('\\') {
            return Err(ConfigError::database(format!(
                "database.name must be a plain name without '..' or path separators, got '{}'",
                self.name
            )));
        }

        Ok(())
    }

    /// `<config_dir>/<name>.db`
    pub fn file_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(format!("{}.{}", self.name, DATABASE_FILE_EXTENSION))
    }
}
