//! One-shot import of the configured roster.
//!
//! The trigger is the absence of the `Users` table. A table that exists,
//! even an empty one or one created by other means, counts as seeded.

use crate::error::Result as DbErrorResult;
use crate::schema::{create_users_table, users_table_exists};
use crate::UserRepository;

use da_core::{SeedEntry, SeedOutcome};

use log::info;
use sqlx::SqlitePool;

pub struct SeedImporter;

impl SeedImporter {
    /// Create and populate `Users` in one transaction, or do nothing if it exists.
    ///
    /// Entries are validated before the transaction starts. Any failure rolls
    /// back both the table creation and the inserts.
    pub async fn import(pool: &SqlitePool, entries: &[SeedEntry]) -> DbErrorResult<SeedOutcome> {
        for entry in entries {
            entry.record.validate()?;
        }

        let mut tx = pool.begin().await?;

        if users_table_exists(&mut *tx).await? {
            tx.rollback().await?;
            info!("Users table already exists; skipping seed import");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        create_users_table(&mut *tx).await?;

        for entry in entries {
            UserRepository::insert(&mut *tx, &entry.record).await?;
        }

        tx.commit().await?;

        info!("Seeded {} user(s) into the Users table", entries.len());

        Ok(SeedOutcome::Imported {
            count: entries.len(),
        })
    }
}
