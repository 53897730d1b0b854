//! da - data anonymization console
//!
//! Logs in against the configured roster, seeds the Users table on the
//! administrator's first run and masks identifiers on request.
//!
//! # Examples
//!
//! ```bash
//! # Preview Alice's national ID masked
//! da view -u alice -p secret --select "Alice Smith" --mask-a --pretty
//!
//! # Write it back
//! da save -u alice -p secret --select "Alice Smith" --mask-a --yes
//!
//! # Generate a password hash for config.toml
//! da hash-password hunter2
//! ```

use da_cli::{Cli, CliError, CommandOutput, Commands, execute, hash_password_output, logger};
use da_config::Config;
use da_core::{Authenticator, RoleGate};
use da_session::{Session, authenticator_from, seed_entries_from};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::HashPassword { ref plaintext } => hash_password_output(plaintext),
        ref command => run(&cli, command).await,
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match output.render(cli.pretty) {
        Ok(json) => {
            println!("{}", json);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, command: &Commands) -> da_cli::Result<CommandOutput> {
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
        })?;
    }

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting da v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let outcome = authenticator_from(&config.credentials).login(&cli.username, &cli.password);
    if let Some(message) = outcome.status.message() {
        return CommandOutput::with_status(
            &serde_json::json!({ "status": outcome.status, "message": message }),
            false,
        );
    }

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = da_db::connect(&database_path).await?;

    let role_gate = RoleGate::new(config.admin.name.clone());
    let Some(session) = Session::from_login(pool, role_gate, &outcome) else {
        return CommandOutput::with_status(
            &serde_json::json!({ "status": outcome.status }),
            false,
        );
    };

    eprintln!("Welcome {}", session.display_name());

    let seed_entries = seed_entries_from(&config.credentials);
    execute(&session, command, &seed_entries).await
}
