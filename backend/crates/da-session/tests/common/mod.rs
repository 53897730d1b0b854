#![allow(dead_code)]

use da_core::{NewUserRecord, SeedEntry};
use da_db::{SeedImporter, connect_in_memory};

use sqlx::SqlitePool;

/// In-memory pool with no Users table yet
pub async fn create_empty_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// In-memory pool seeded with Alice, Bob and Carol
pub async fn create_seeded_pool() -> SqlitePool {
    let pool = create_empty_pool().await;
    SeedImporter::import(&pool, &roster())
        .await
        .expect("Failed to seed test pool");
    pool
}

pub fn roster() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new(
            "alice",
            NewUserRecord::new("Alice", "a@x.com")
                .with_identifier_a("123456789012")
                .with_identifier_b("ABCDE1234F"),
        ),
        SeedEntry::new(
            "bob",
            NewUserRecord::new("Bob", "b@x.com")
                .with_identifier_a("210987654321")
                .with_identifier_b("PQRST6789Z"),
        ),
        SeedEntry::new("carol", NewUserRecord::new("Carol", "c@x.com")),
    ]
}

/// Raw identifier columns of every row, in id order
pub async fn identifier_columns(pool: &SqlitePool) -> Vec<(String, Option<String>, Option<String>)> {
    sqlx::query_as("SELECT name, identifier_a, identifier_b FROM Users ORDER BY id")
        .fetch_all(pool)
        .await
        .expect("Failed to read identifiers")
}
