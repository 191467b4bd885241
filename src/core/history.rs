//! History grouping: flat ledger rows → date sections, newest first.
//!
//! Rows are sorted explicitly by timestamp (then id) before the single
//! grouping pass, so the result never depends on the order SQLite hands
//! rows back in.

use crate::db::meal_history::load_meals;
use crate::db::munch_history::load_munch;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::history::{MealEntry, MunchEntry, Section};
use crate::models::meal::MealRow;
use crate::models::meal_period::MealPeriod;
use crate::models::munch::MunchRow;
use crate::utils::date::{parse_timestamp, section_title, time_label};
use crate::utils::formatting::format_money;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// An entry together with the keys it is sorted and grouped by.
struct Keyed<E> {
    id: i64,
    timestamp: DateTime<Utc>,
    day: NaiveDate,
    entry: E,
}

fn into_sections<E>(mut items: Vec<Keyed<E>>) -> Vec<Section<E>> {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

    let mut sections: Vec<Section<E>> = Vec::new();
    for item in items {
        match sections.last_mut() {
            Some(section) if section.date == item.day => section.entries.push(item.entry),
            _ => sections.push(Section {
                title: section_title(item.day),
                date: item.day,
                entries: vec![item.entry],
            }),
        }
    }

    sections
}

/// Resolve the timestamp of a row, or explain why it has to be skipped.
fn row_timestamp(table: &str, id: i64, date: Option<&str>) -> Option<DateTime<Utc>> {
    let Some(raw) = date else {
        tracing::warn!(table, id, "Skipping row with missing date");
        return None;
    };

    match parse_timestamp(raw) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::warn!(table, id, "Skipping row: {e}");
            None
        }
    }
}

/// Group meal swipes by calendar day in `tz`, labelling each by meal period.
pub fn group_meals<Tz: TimeZone>(rows: &[MealRow], tz: &Tz) -> Vec<Section<MealEntry>> {
    let mut items = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(meals_left) = row.meals_left else {
            tracing::warn!(table = "meal_history", id = row.id, "Skipping row with missing meals_left");
            continue;
        };
        let Some(timestamp) = row_timestamp("meal_history", row.id, row.date.as_deref()) else {
            continue;
        };

        let local = timestamp.with_timezone(tz);
        let time = local.time();
        let period = MealPeriod::from_time(time);

        items.push(Keyed {
            id: row.id,
            timestamp,
            day: local.date_naive(),
            entry: MealEntry {
                id: row.id,
                timestamp,
                time: time_label(time),
                period,
                label: period.to_string(),
                meals_left,
            },
        });
    }

    into_sections(items)
}

/// Group munch-money transactions by calendar day in `tz`.
///
/// The label shows the signed amount and the balance it left,
/// e.g. `-$4.50 → $15.50`.
pub fn group_munch<Tz: TimeZone>(
    rows: &[MunchRow],
    tz: &Tz,
    currency: &str,
) -> Vec<Section<MunchEntry>> {
    let mut items = Vec::with_capacity(rows.len());

    for row in rows {
        let (Some(amount), Some(balance)) = (row.transaction_amount, row.remaining_balance) else {
            tracing::warn!(table = "munch_history", id = row.id, "Skipping row with missing amount or balance");
            continue;
        };
        let Some(timestamp) = row_timestamp("munch_history", row.id, row.date.as_deref()) else {
            continue;
        };

        let local = timestamp.with_timezone(tz);
        let time = local.time();

        items.push(Keyed {
            id: row.id,
            timestamp,
            day: local.date_naive(),
            entry: MunchEntry {
                id: row.id,
                timestamp,
                time: time_label(time),
                amount,
                balance,
                label: format!(
                    "{} → {}",
                    format_money(amount, currency, true),
                    format_money(balance, currency, false)
                ),
            },
        });
    }

    into_sections(items)
}

pub struct HistoryLogic;

impl HistoryLogic {
    /// Re-read the whole meal ledger and rebuild its sections.
    pub fn meals<Tz: TimeZone>(pool: &DbPool, tz: &Tz) -> AppResult<Vec<Section<MealEntry>>> {
        let rows = load_meals(&pool.conn).inspect_err(|e| {
            tracing::error!("Failed to read meal history: {e}");
        })?;
        tracing::debug!(rows = rows.len(), "Loaded meal history");
        Ok(group_meals(&rows, tz))
    }

    /// Re-read the whole munch-money ledger and rebuild its sections.
    pub fn munch<Tz: TimeZone>(
        pool: &DbPool,
        tz: &Tz,
        currency: &str,
    ) -> AppResult<Vec<Section<MunchEntry>>> {
        let rows = load_munch(&pool.conn).inspect_err(|e| {
            tracing::error!("Failed to read munch history: {e}");
        })?;
        tracing::debug!(rows = rows.len(), "Loaded munch history");
        Ok(group_munch(&rows, tz, currency))
    }
}
