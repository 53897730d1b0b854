use crate::{ActionOutcome, PersistReport};

use da_core::{MaskSelection, MaskedRow, UserRecord, compute_view};
use da_db::{Result as DbErrorResult, UserRepository};

use log::{error, info, warn};
use sqlx::SqlitePool;

const PERSIST_ACTION: &str = "Saving masked data";

/// Preview masking for a selection, then persist it on confirmation.
#[derive(Debug, Clone)]
pub struct MaskingWorkflow {
    pool: SqlitePool,
}

impl MaskingWorkflow {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Names that can be selected, in store order. Empty on read failure.
    pub async fn names(&self) -> Vec<String> {
        UserRepository::find_names(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("Loading user names failed: {e}");
                Vec::new()
            })
    }

    /// Display rows for `selection`. Never writes.
    ///
    /// A failed read looks the same as an empty table.
    pub async fn preview(&self, selection: &MaskSelection) -> Vec<MaskedRow> {
        let records = self.load_records().await;
        compute_view(&records, selection)
    }

    /// Overwrite the selected users' identifiers with their masked values.
    ///
    /// The originals are gone afterwards. Names that match no record are
    /// skipped and reported, not treated as errors.
    pub async fn persist(&self, selection: &MaskSelection) -> ActionOutcome<PersistReport> {
        let outcome = ActionOutcome::from_result(PERSIST_ACTION, self.try_persist(selection).await);

        if let ActionOutcome::Succeeded { ref result } = outcome {
            info!(
                "Masked data saved: {} user(s), {} row(s)",
                result.updated.len(),
                result.rows_updated
            );
        }

        outcome
    }

    /// Persist in one transaction. Dropping the transaction on `?` rolls it back.
    pub async fn try_persist(&self, selection: &MaskSelection) -> DbErrorResult<PersistReport> {
        let mut report = PersistReport::default();
        if selection.is_empty() {
            return Ok(report);
        }

        let mut tx = self.pool.begin().await?;

        for name in &selection.names {
            // Re-read inside the transaction so the masking uses current values.
            let records = UserRepository::find_all_by_name(&mut *tx, name).await?;
            if records.is_empty() {
                warn!("Skipping '{name}': no such user");
                report.skipped.push(name.clone());
                continue;
            }

            // Rows sharing a name are masked from their own values.
            for record in &records {
                let (identifier_a, identifier_b) = selection.apply(record);
                report.rows_updated += UserRepository::update_identifiers_by_id(
                    &mut *tx,
                    record.id,
                    identifier_a.as_deref(),
                    identifier_b.as_deref(),
                )
                .await?;
            }
            report.updated.push(name.clone());
        }

        tx.commit().await?;

        Ok(report)
    }

    async fn load_records(&self) -> Vec<UserRecord> {
        UserRepository::find_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("Loading users failed: {e}");
                Vec::new()
            })
    }
}
