use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Open the database at `path` and make sure the schema exists.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path).inspect_err(|e| {
        tracing::error!("Failed to open database {path}: {e}");
    })?;
    init_db(&pool.conn).inspect_err(|e| {
        tracing::error!("Failed to create tables in {path}: {e}");
    })?;
    Ok(pool)
}

/// Create every table the application needs, if missing.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS meal_history (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            meals_left  INTEGER NOT NULL,
            date        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS munch_history (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            transaction_amount  REAL NOT NULL,
            remaining_balance   REAL NOT NULL,
            date                TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS kv_store (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;

    tracing::debug!("Schema ensured");
    Ok(())
}
