//! Consistency check between the ledgers and the cached scalars.
//!
//! The cached count/balance is maintained incrementally, so it is compared
//! against the snapshot stored on the newest ledger row. Scalar-only
//! adjustments (`meal add`, `meal set`) show up as drift until the next swipe.

use crate::db::kv::{load_meal_count, load_munch_balance, store_meal_count, store_munch_balance};
use crate::db::log::ttlog_nonblocking;
use crate::db::meal_history::load_meals;
use crate::db::munch_history::load_munch;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_timestamp;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Drift<T> {
    pub cached: T,
    /// Snapshot on the newest well-formed row, with that row's id.
    pub newest: Option<(i64, T)>,
}

impl<T: PartialEq + Copy> Drift<T> {
    /// An empty ledger has nothing to disagree with.
    pub fn is_consistent(&self) -> bool {
        self.newest.is_none_or(|(_, snapshot)| snapshot == self.cached)
    }

    pub fn snapshot(&self) -> Option<T> {
        self.newest.map(|(_, snapshot)| snapshot)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileReport {
    pub meals: Drift<i64>,
    pub munch: Drift<Decimal>,
}

impl ReconcileReport {
    pub fn is_consistent(&self) -> bool {
        self.meals.is_consistent() && self.munch.is_consistent()
    }
}

/// Newest `(id, value)` by timestamp then id, ignoring rows that cannot be dated.
fn newest<T, I>(rows: I) -> Option<(i64, T)>
where
    I: IntoIterator<Item = (i64, Option<String>, Option<T>)>,
{
    rows.into_iter()
        .filter_map(|(id, date, value)| {
            let ts = parse_timestamp(date.as_deref()?).ok()?;
            Some((ts, id, value?))
        })
        .max_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, id, value)| (id, value))
}

pub struct ReconcileLogic;

impl ReconcileLogic {
    pub fn check(
        pool: &DbPool,
        default_meals: i64,
        default_balance: Decimal,
    ) -> AppResult<ReconcileReport> {
        let meals = Drift {
            cached: load_meal_count(&pool.conn, default_meals)?,
            newest: newest(
                load_meals(&pool.conn)?
                    .into_iter()
                    .map(|r| (r.id, r.date, r.meals_left)),
            ),
        };

        let munch = Drift {
            cached: load_munch_balance(&pool.conn, default_balance)?,
            newest: newest(
                load_munch(&pool.conn)?
                    .into_iter()
                    .map(|r| (r.id, r.date, r.remaining_balance)),
            ),
        };

        let report = ReconcileReport { meals, munch };
        if !report.is_consistent() {
            tracing::warn!(?report, "Cached scalars drifted from the ledgers");
        }
        Ok(report)
    }

    /// Overwrite drifted scalars with the newest ledger snapshots.
    ///
    /// Returns the number of scalars that were rewritten.
    pub fn fix(pool: &mut DbPool, report: &ReconcileReport) -> AppResult<usize> {
        let mut fixed = 0;
        let tx = pool.write_tx()?;

        if !report.meals.is_consistent()
            && let Some(snapshot) = report.meals.snapshot()
        {
            store_meal_count(&tx, snapshot)?;
            fixed += 1;
        }

        if !report.munch.is_consistent()
            && let Some(snapshot) = report.munch.snapshot()
        {
            store_munch_balance(&tx, snapshot)?;
            fixed += 1;
        }

        tx.commit()?;

        if fixed > 0 {
            tracing::info!(fixed, "Reconciled cached scalars");
            ttlog_nonblocking(
                &pool.conn,
                "reconcile",
                "",
                &format!("Rewrote {fixed} cached value(s) from ledger snapshots"),
            );
        }
        Ok(fixed)
    }
}
