//! One CLI invocation against an open session.

use crate::commands::{Commands, MaskArgs};
use crate::{CliError, CommandOutput, Result as CliErrorResult};

use da_core::{MaskedRow, NewUserRecord, SeedEntry};
use da_session::{ActionOutcome, AdminSession, Session};

use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ViewResponse {
    selectable: Vec<String>,
    rows: Vec<MaskedRow>,
}

#[derive(Debug, Serialize)]
struct PreviewOnlyResponse {
    saved: bool,
    message: &'static str,
    rows: Vec<MaskedRow>,
}

/// Run `command` for `session`.
///
/// Administrators get the seed import first, then the command. Everyone
/// else only ever gets the unmasked roster, and admin-only commands fail.
pub async fn execute(
    session: &Session,
    command: &Commands,
    seed_entries: &[SeedEntry],
) -> CliErrorResult<CommandOutput> {
    let Some(admin) = session.admin() else {
        return execute_unprivileged(session, command).await;
    };

    info!("Administrator session for '{}'", session.display_name());

    if let ActionOutcome::Failed { ref message } = admin.seed(seed_entries).await {
        warn!("Continuing without seed import: {message}");
    }

    match command {
        Commands::List => CommandOutput::success(&admin.records().list_all().await),
        Commands::View(mask) => view(&admin, mask).await,
        Commands::Save { mask, yes } => save(&admin, mask, *yes).await,
        Commands::Add {
            name,
            email,
            identifier_a,
            identifier_b,
        } => {
            let record = NewUserRecord {
                name: name.clone(),
                email: email.clone(),
                identifier_a: identifier_a.clone(),
                identifier_b: identifier_b.clone(),
            };
            let outcome = admin.records().add_record(&record).await;
            CommandOutput::with_status(&outcome, outcome.is_success())
        }
        Commands::HashPassword { plaintext } => hash_password_output(plaintext),
    }
}

async fn execute_unprivileged(session: &Session, command: &Commands) -> CliErrorResult<CommandOutput> {
    match command {
        Commands::HashPassword { plaintext } => return hash_password_output(plaintext),
        Commands::List => {}
        Commands::View(mask) => {
            if mask.is_requested() {
                warn!("Masking options ignored: administrator privileges required");
            }
        }
        other => {
            return Err(CliError::NotAdministrator {
                command: other.name(),
            });
        }
    }

    CommandOutput::success(&session.unprivileged_view().await)
}

/// `{"password_hash": "..."}` for pasting into config.toml.
pub fn hash_password_output(plaintext: &str) -> CliErrorResult<CommandOutput> {
    let password_hash = da_auth::hash_password(plaintext)?;
    CommandOutput::success(&serde_json::json!({ "password_hash": password_hash }))
}

async fn view(admin: &AdminSession<'_>, mask: &MaskArgs) -> CliErrorResult<CommandOutput> {
    let workflow = admin.workflow();
    let response = ViewResponse {
        selectable: workflow.names().await,
        rows: workflow.preview(&mask.selection()).await,
    };
    CommandOutput::success(&response)
}

async fn save(admin: &AdminSession<'_>, mask: &MaskArgs, confirmed: bool) -> CliErrorResult<CommandOutput> {
    let workflow = admin.workflow();
    let selection = mask.selection();

    if !confirmed {
        let response = PreviewOnlyResponse {
            saved: false,
            message: "Nothing saved. Re-run with --yes to overwrite the stored identifiers.",
            rows: workflow.preview(&selection).await,
        };
        return CommandOutput::with_status(&response, false);
    }

    let outcome = workflow.persist(&selection).await;
    CommandOutput::with_status(&outcome, outcome.is_success())
}
