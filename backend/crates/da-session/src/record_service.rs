use crate::ActionOutcome;

use da_core::{NewUserRecord, UserRecord};
use da_db::{Result as DbErrorResult, UserRepository};

use log::{error, info};
use sqlx::SqlitePool;

const ADD_ACTION: &str = "Adding user";

#[derive(Debug, Clone)]
pub struct RecordService {
    pool: SqlitePool,
}

impl RecordService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every record, unmasked, in store order. Empty on read failure.
    pub async fn list_all(&self) -> Vec<UserRecord> {
        UserRepository::find_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("Loading users failed: {e}");
                Vec::new()
            })
    }

    /// Insert one record; returns its id on success.
    pub async fn add_record(&self, record: &NewUserRecord) -> ActionOutcome<i64> {
        let outcome = ActionOutcome::from_result(ADD_ACTION, self.try_add_record(record).await);

        if outcome.is_success() {
            info!("User '{}' added", record.name);
        }

        outcome
    }

    async fn try_add_record(&self, record: &NewUserRecord) -> DbErrorResult<i64> {
        let mut tx = self.pool.begin().await?;
        let id = UserRepository::insert(&mut *tx, record).await?;
        tx.commit().await?;
        Ok(id)
    }
}
