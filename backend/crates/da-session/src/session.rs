use crate::{ActionOutcome, MaskingWorkflow, RecordService};

use da_core::{AuthOutcome, RoleGate, SeedEntry, SeedOutcome, UserRecord};
use da_db::SeedImporter;

use log::info;
use sqlx::SqlitePool;

const SEED_ACTION: &str = "Importing users from configuration";

/// An authenticated operator with a connection to the store.
#[derive(Debug, Clone)]
pub struct Session {
    pool: SqlitePool,
    role_gate: RoleGate,
    display_name: String,
}

impl Session {
    pub fn new(pool: SqlitePool, role_gate: RoleGate, display_name: impl Into<String>) -> Self {
        Self {
            pool,
            role_gate,
            display_name: display_name.into(),
        }
    }

    /// A session only exists for a successful login.
    pub fn from_login(pool: SqlitePool, role_gate: RoleGate, outcome: &AuthOutcome) -> Option<Self> {
        if !outcome.is_success() {
            return None;
        }

        let display_name = outcome.display_name.clone()?;
        Some(Self::new(pool, role_gate, display_name))
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_admin(&self) -> bool {
        self.role_gate.is_admin(&self.display_name)
    }

    /// Administrative capabilities, or `None` for everyone else.
    pub fn admin(&self) -> Option<AdminSession<'_>> {
        self.is_admin().then_some(AdminSession { session: self })
    }

    /// Read-only full dump for non-administrators.
    pub async fn unprivileged_view(&self) -> Vec<UserRecord> {
        RecordService::new(self.pool.clone()).list_all().await
    }
}

/// Capabilities behind the role gate.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession<'a> {
    session: &'a Session,
}

impl AdminSession<'_> {
    /// Import the roster if the store has never been seeded.
    pub async fn seed(&self, entries: &[SeedEntry]) -> ActionOutcome<SeedOutcome> {
        info!("Checking whether the store needs seeding");
        ActionOutcome::from_result(
            SEED_ACTION,
            SeedImporter::import(&self.session.pool, entries).await,
        )
    }

    pub fn workflow(&self) -> MaskingWorkflow {
        MaskingWorkflow::new(self.session.pool.clone())
    }

    pub fn records(&self) -> RecordService {
        RecordService::new(self.session.pool.clone())
    }
}
