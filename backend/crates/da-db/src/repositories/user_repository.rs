use crate::error::Result as DbErrorResult;

use da_core::{NewUserRecord, UserRecord};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct UserRepository;

impl UserRepository {
    /// Insert a record and return its store-assigned id.
    pub async fn insert<'e, E>(executor: E, record: &NewUserRecord) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        record.validate()?;

        let result = sqlx::query(
            r#"
                INSERT INTO Users (name, email, identifier_a, identifier_b)
                VALUES (?, ?, ?, ?)
                "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.identifier_a)
        .bind(&record.identifier_b)
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All records in store order.
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<UserRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, name, email, identifier_a, identifier_b
                FROM Users
                ORDER BY id ASC
                "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Names in store order, for building a selection.
    pub async fn find_names<'e, E>(executor: E) -> DbErrorResult<Vec<String>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query("SELECT name FROM Users ORDER BY id ASC")
            .fetch_all(executor)
            .await?;

        rows.iter()
            .map(|row| Ok(row.try_get::<String, _>("name")?))
            .collect()
    }

    /// First record (lowest id) with this exact name.
    pub async fn find_by_name<'e, E>(executor: E, name: &str) -> DbErrorResult<Option<UserRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, identifier_a, identifier_b
                FROM Users
                WHERE name = ?
                ORDER BY id ASC
                LIMIT 1
                "#,
        )
        .bind(name)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// Every record with this exact name, lowest id first.
    pub async fn find_all_by_name<'e, E>(executor: E, name: &str) -> DbErrorResult<Vec<UserRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, name, email, identifier_a, identifier_b
                FROM Users
                WHERE name = ?
                ORDER BY id ASC
                "#,
        )
        .bind(name)
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Overwrite both identifier columns of the row with this id.
    /// Returns the number of rows changed (0 or 1).
    pub async fn update_identifiers_by_id<'e, E>(
        executor: E,
        id: i64,
        identifier_a: Option<&str>,
        identifier_b: Option<&str>,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE Users
                SET identifier_a = ?, identifier_b = ?
                WHERE id = ?
                "#,
        )
        .bind(identifier_a)
        .bind(identifier_b)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Overwrite both identifier columns of every row named `name`.
    /// Returns the number of rows changed.
    pub async fn update_identifiers_by_name<'e, E>(
        executor: E,
        name: &str,
        identifier_a: Option<&str>,
        identifier_b: Option<&str>,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE Users
                SET identifier_a = ?, identifier_b = ?
                WHERE name = ?
                "#,
        )
        .bind(identifier_a)
        .bind(identifier_b)
        .bind(name)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<UserRecord> {
        Ok(UserRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            identifier_a: row.try_get("identifier_a")?,
            identifier_b: row.try_get("identifier_b")?,
        })
    }
}
