//! Meal counter operations.
//!
//! Swipes and deletions touch two stores: the `meal_history` ledger and the
//! cached `numMeals` scalar. Both writes share one transaction.

use crate::db::kv::{NUM_MEALS_KEY, load_meal_count, store_meal_count};
use crate::db::log::ttlog_nonblocking;
use crate::db::meal_history::{delete_meal, find_meal, insert_meal};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_timestamp, now_utc};
use chrono::{DateTime, Utc};

/// Result of a single swipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Swipe {
    pub id: i64,
    pub meals_left: i64,
    pub at: DateTime<Utc>,
}

pub struct MealLogic;

impl MealLogic {
    /// Current cached meal count (seeded with `default_meals` on first use).
    pub fn current(pool: &DbPool, default_meals: i64) -> AppResult<i64> {
        load_meal_count(&pool.conn, default_meals)
    }

    /// Swipe one meal: append a ledger row and decrement the cached count.
    pub fn eat(
        pool: &mut DbPool,
        default_meals: i64,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<Swipe> {
        let at = at.unwrap_or_else(now_utc);

        let tx = pool.write_tx()?;
        let meals = load_meal_count(&tx, default_meals)?;
        if meals <= 0 {
            return Err(AppError::NoMealsLeft);
        }

        let meals_left = meals - 1;
        let id = insert_meal(&tx, meals_left, &at).inspect_err(|e| {
            tracing::error!("Failed to append meal swipe: {e}");
        })?;
        store_meal_count(&tx, meals_left)?;
        tx.commit()?;

        tracing::info!(id, meals_left, "Meal swiped");
        ttlog_nonblocking(
            &pool.conn,
            "eat",
            &format!("meal #{id}"),
            &format!("Swiped at {}, {} left", format_timestamp(&at), meals_left),
        );

        Ok(Swipe { id, meals_left, at })
    }

    /// Add meals to the cached count without journaling a swipe.
    pub fn add(pool: &mut DbPool, default_meals: i64, count: i64) -> AppResult<i64> {
        if count <= 0 {
            return Err(AppError::InvalidAmount(format!(
                "{} (meal count must be positive)",
                count
            )));
        }

        let tx = pool.write_tx()?;
        let meals = load_meal_count(&tx, default_meals)?
            .checked_add(count)
            .ok_or_else(|| AppError::InvalidAmount(format!("{count} (meal count too large)")))?;
        store_meal_count(&tx, meals)?;
        tx.commit()?;

        tracing::info!(count, meals, "Meals added");
        ttlog_nonblocking(
            &pool.conn,
            "meal_add",
            "",
            &format!("Added {count}, now {meals}"),
        );
        Ok(meals)
    }

    /// Overwrite the cached count, e.g. at the start of a semester.
    pub fn set(pool: &mut DbPool, meals: i64) -> AppResult<i64> {
        if meals < 0 {
            return Err(AppError::InvalidAmount(format!(
                "{} (meal count must not be negative)",
                meals
            )));
        }

        store_meal_count(&pool.conn, meals)?;

        tracing::info!(meals, "Meal count set");
        ttlog_nonblocking(&pool.conn, "meal_set", "", &format!("Set to {meals}"));
        Ok(meals)
    }

    /// Delete a swipe and give the meal back to the cached count.
    ///
    /// Other rows keep their stored `meals_left` snapshots.
    pub fn delete(pool: &mut DbPool, default_meals: i64, id: i64) -> AppResult<i64> {
        let tx = pool.write_tx()?;

        if find_meal(&tx, id)?.is_none() {
            return Err(AppError::RowNotFound {
                ledger: "meal",
                id,
            });
        }

        let meals = load_meal_count(&tx, default_meals)?;
        delete_meal(&tx, id).inspect_err(|e| {
            tracing::error!(id, "Failed to delete meal swipe: {e}");
        })?;
        let meals = meals.checked_add(1).ok_or_else(|| AppError::CorruptValue {
            key: NUM_MEALS_KEY.to_string(),
            value: meals.to_string(),
        })?;
        store_meal_count(&tx, meals)?;
        tx.commit()?;

        tracing::info!(id, meals, "Meal swipe deleted");
        ttlog_nonblocking(
            &pool.conn,
            "del",
            &format!("meal #{id}"),
            &format!("Swipe deleted, {meals} left"),
        );
        Ok(meals)
    }
}
