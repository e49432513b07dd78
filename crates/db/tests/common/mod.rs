use hapipath_db::DbPool;

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = hapipath_db::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    hapipath_db::run_migrations(&pool)
        .await
        .expect("migrations");
    pool
}

/// Timestamp `n` minutes after a fixed base, in canonical form.
pub fn ts(n: u32) -> String {
    format!("2024-06-01T{:02}:{:02}:00.000Z", n / 60, n % 60)
}
