use da_db::connect_in_memory;
use da_db::schema::create_users_table;

use sqlx::SqlitePool;

/// In-memory pool without the Users table (unseeded store)
pub async fn create_empty_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// In-memory pool with an empty Users table
pub async fn create_test_pool() -> SqlitePool {
    let pool = create_empty_pool().await;

    create_users_table(&pool)
        .await
        .expect("Failed to create Users table");

    pool
}

/// Count rows directly, bypassing the repository
pub async fn count_users(pool: &SqlitePool) -> i64 {
    // Use sqlx::query_scalar (not query!) to avoid offline mode issues in tests
    sqlx::query_scalar("SELECT COUNT(*) FROM Users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
