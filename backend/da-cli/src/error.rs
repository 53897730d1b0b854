use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] da_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] da_db::DbError),

    #[error("Password error: {0}")]
    Auth(#[from] da_auth::AuthError),

    #[error("'{command}' requires administrator privileges")]
    NotAdministrator { command: &'static str },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
