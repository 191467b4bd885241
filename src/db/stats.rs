use crate::db::kv::{MUNCH_BALANCE_KEY, NUM_MEALS_KEY, get_item};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// File size, per-ledger row counts and date ranges, then the cached counters.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) PER-LEDGER COUNTS AND DATE RANGES
    //
    for (label, table) in [
        ("Meal swipes", "meal_history"),
        ("Munch transactions", "munch_history"),
    ] {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;

        let first: Option<String> = pool
            .conn
            .query_row(
                &format!("SELECT date FROM {table} ORDER BY date ASC LIMIT 1"),
                [],
                |row| row.get(0),
            )
            .optional()?;

        let last: Option<String> = pool
            .conn
            .query_row(
                &format!("SELECT date FROM {table} ORDER BY date DESC LIMIT 1"),
                [],
                |row| row.get(0),
            )
            .optional()?;

        let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
        let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
        println!("    from: {}", fmt_first);
        println!("    to:   {}", fmt_last);
    }

    //
    // 3) CACHED COUNTERS (raw kv_store values, not seeded here)
    //
    println!("{}• Cached counters:{}", CYAN, RESET);
    for key in [NUM_MEALS_KEY, MUNCH_BALANCE_KEY] {
        let value = get_item(&pool.conn, key)?.unwrap_or_else(|| format!("{GREY}(unset){RESET}"));
        println!("    {key}: {value}");
    }

    println!();
    Ok(())
}
