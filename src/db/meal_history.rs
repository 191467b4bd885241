//! Meal ledger: the `meal_history` table.

use crate::errors::AppResult;
use crate::models::meal::MealRow;
use crate::utils::date::format_timestamp;
use chrono::{DateTime, Utc};
use rusqlite::types::FromSql;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Read a payload column, treating a value of the wrong type as missing.
///
/// SQLite keeps e.g. `'abc'` in an INTEGER column as TEXT; such a row must
/// still load so the history view can skip it instead of failing the read.
pub(crate) fn lenient<T: FromSql>(row: &Row, column: &str) -> Option<T> {
    match row.get::<_, Option<T>>(column) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(column, "Unreadable column value: {e}");
            None
        }
    }
}

pub fn map_row(row: &Row) -> Result<MealRow> {
    Ok(MealRow {
        id: row.get("id")?,
        meals_left: lenient(row, "meals_left"),
        date: lenient(row, "date"),
    })
}

/// Append a swipe and return the id SQLite assigned to it.
pub fn insert_meal(conn: &Connection, meals_left: i64, at: &DateTime<Utc>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO meal_history (meals_left, date) VALUES (?1, ?2)",
        params![meals_left, format_timestamp(at)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All rows in insertion order.
pub fn load_meals(conn: &Connection) -> AppResult<Vec<MealRow>> {
    let mut stmt =
        conn.prepare("SELECT id, meals_left, date FROM meal_history ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_meal(conn: &Connection, id: i64) -> AppResult<Option<MealRow>> {
    let row = conn
        .query_row(
            "SELECT id, meals_left, date FROM meal_history WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(row)
}

/// Delete one row; returns whether a row was removed.
pub fn delete_meal(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM meal_history WHERE id = ?1", [id])?;
    Ok(n > 0)
}
