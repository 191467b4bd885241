//! Key-value store for the cached running scalars.
//!
//! Values are kept as strings: `numMeals` is a stringified integer,
//! `munchMoneyBalance` a stringified decimal.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::str::FromStr;

pub const NUM_MEALS_KEY: &str = "numMeals";
pub const MUNCH_BALANCE_KEY: &str = "munchMoneyBalance";

pub fn get_item(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn set_item(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Current meal count, seeding `default` when the key is missing.
pub fn load_meal_count(conn: &Connection, default: i64) -> AppResult<i64> {
    match get_item(conn, NUM_MEALS_KEY)? {
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| AppError::CorruptValue {
            key: NUM_MEALS_KEY.to_string(),
            value: raw,
        }),
        None => {
            tracing::info!("Seeding {NUM_MEALS_KEY} with {default}");
            store_meal_count(conn, default)?;
            Ok(default)
        }
    }
}

pub fn store_meal_count(conn: &Connection, meals: i64) -> AppResult<()> {
    set_item(conn, NUM_MEALS_KEY, &meals.to_string())
}

/// Current munch-money balance, seeding `default` when the key is missing.
pub fn load_munch_balance(conn: &Connection, default: Decimal) -> AppResult<Decimal> {
    match get_item(conn, MUNCH_BALANCE_KEY)? {
        Some(raw) => Decimal::from_str(raw.trim()).map_err(|_| AppError::CorruptValue {
            key: MUNCH_BALANCE_KEY.to_string(),
            value: raw,
        }),
        None => {
            tracing::info!("Seeding {MUNCH_BALANCE_KEY} with {default}");
            store_munch_balance(conn, default)?;
            Ok(default)
        }
    }
}

pub fn store_munch_balance(conn: &Connection, balance: Decimal) -> AppResult<()> {
    set_item(conn, MUNCH_BALANCE_KEY, &format!("{:.2}", balance.round_dp(2)))
}
