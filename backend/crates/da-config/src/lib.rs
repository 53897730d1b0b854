mod admin_config;
mod config;
mod credentials_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod user_credential_config;

#[cfg(test)]
mod tests;

pub use admin_config::AdminConfig;
pub use config::Config;
pub use credentials_config::CredentialsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use user_credential_config::UserCredentialConfig;

const CONFIG_DIR_ENV: &str = "DA_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".da";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_DATABASE_NAME: &str = "anonymization";
const DATABASE_FILE_EXTENSION: &str = "db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
