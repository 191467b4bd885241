//! Munch-money ledger: the `munch_history` table.
//!
//! Amounts are REAL columns; they are converted to and from [`Decimal`]
//! at this boundary and rounded to cents on the way in.

use crate::db::meal_history::lenient;
use crate::errors::{AppError, AppResult};
use crate::models::munch::MunchRow;
use crate::utils::date::format_timestamp;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

fn real_to_decimal(value: Option<f64>) -> Option<Decimal> {
    value.and_then(Decimal::from_f64).map(|d| d.round_dp(2))
}

fn decimal_to_real(value: Decimal) -> AppResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| AppError::InvalidAmount(value.to_string()))
}

pub fn map_row(row: &Row) -> Result<MunchRow> {
    Ok(MunchRow {
        id: row.get("id")?,
        transaction_amount: real_to_decimal(lenient(row, "transaction_amount")),
        remaining_balance: real_to_decimal(lenient(row, "remaining_balance")),
        date: lenient(row, "date"),
    })
}

/// Append a transaction and return the id SQLite assigned to it.
pub fn insert_munch(
    conn: &Connection,
    transaction_amount: Decimal,
    remaining_balance: Decimal,
    at: &DateTime<Utc>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO munch_history (transaction_amount, remaining_balance, date)
         VALUES (?1, ?2, ?3)",
        params![
            decimal_to_real(transaction_amount)?,
            decimal_to_real(remaining_balance)?,
            format_timestamp(at)
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All rows in insertion order.
pub fn load_munch(conn: &Connection) -> AppResult<Vec<MunchRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, transaction_amount, remaining_balance, date
         FROM munch_history
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_munch(conn: &Connection, id: i64) -> AppResult<Option<MunchRow>> {
    let row = conn
        .query_row(
            "SELECT id, transaction_amount, remaining_balance, date
             FROM munch_history
             WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(row)
}

/// Delete one row; returns whether a row was removed.
pub fn delete_munch(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM munch_history WHERE id = ?1", [id])?;
    Ok(n > 0)
}
