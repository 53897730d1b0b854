//! The `Users` table. Its presence is what marks the store as seeded.

use crate::Result as DbErrorResult;

use sqlx::Row;

pub const USERS_TABLE: &str = "Users";

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE Users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        identifier_a TEXT,
        identifier_b TEXT
    )
"#;

/// Whether the `Users` table exists, regardless of how many rows it has.
pub async fn users_table_exists<'e, E>(executor: E) -> DbErrorResult<bool>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let row = sqlx::query("SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' AND name = ?")
        .bind(USERS_TABLE)
        .fetch_one(executor)
        .await?;

    let count: i64 = row.try_get("count")?;
    Ok(count > 0)
}

pub async fn create_users_table<'e, E>(executor: E) -> DbErrorResult<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query(CREATE_USERS_TABLE).execute(executor).await?;
    Ok(())
}
