pub mod cli;
pub mod command_output;
pub mod commands;
pub mod error;
pub mod execute;
pub mod logger;

pub use cli::Cli;
pub use command_output::CommandOutput;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use execute::{execute, hash_password_output};
