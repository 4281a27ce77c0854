use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> MySqlPool {
    MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database")
}

/// Creates the absensi table on first run.
///
/// Post-conditions of inserts into this table: `id` is auto-assigned and
/// `timestamp` defaults to the insertion time; callers supply only
/// `nrp` and `nama`.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS absensi (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            nrp VARCHAR(20) NOT NULL,
            nama VARCHAR(100) NOT NULL,
            `timestamp` DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
