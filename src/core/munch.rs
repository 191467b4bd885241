//! Munch-money operations.
//!
//! Every transaction appends a row to `munch_history` carrying the signed
//! amount and the balance it leaves, and updates the cached
//! `munchMoneyBalance` in the same transaction.

use crate::db::kv::{MUNCH_BALANCE_KEY, load_munch_balance, store_munch_balance};
use crate::db::log::ttlog_nonblocking;
use crate::db::munch_history::{delete_munch, find_munch, insert_munch};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::now_utc;
use crate::utils::formatting::MAX_AMOUNT;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;

/// A transaction that was written to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct MunchTransaction {
    pub id: i64,
    pub amount: Decimal,
    pub balance: Decimal,
    pub at: DateTime<Utc>,
}

/// Spend and deposit amounts must be positive and at most [`MAX_AMOUNT`].
fn check_amount(amount: Decimal) -> AppResult<()> {
    if amount <= Decimal::ZERO || amount > MAX_AMOUNT {
        return Err(AppError::InvalidAmount(amount.to_string()));
    }
    Ok(())
}

/// Append one row inside an open write transaction and move the cached
/// balance with it. `balance` must have been read in the same transaction.
fn record(
    conn: &Connection,
    balance: Decimal,
    signed_amount: Decimal,
    at: DateTime<Utc>,
) -> AppResult<MunchTransaction> {
    let remaining = balance
        .checked_add(signed_amount)
        .ok_or_else(|| AppError::InvalidAmount(format!("{signed_amount} (balance would overflow)")))?
        .round_dp(2);

    if remaining < Decimal::ZERO {
        return Err(AppError::InsufficientFunds {
            balance: format!("{:.2}", balance),
            requested: format!("{:.2}", signed_amount.abs()),
        });
    }

    let id = insert_munch(conn, signed_amount, remaining, &at).inspect_err(|e| {
        tracing::error!("Failed to append munch transaction: {e}");
    })?;
    store_munch_balance(conn, remaining)?;

    Ok(MunchTransaction {
        id,
        amount: signed_amount,
        balance: remaining,
        at,
    })
}

/// Trace and audit a committed transaction.
fn journal(pool: &DbPool, recorded: MunchTransaction, operation: &str) -> MunchTransaction {
    tracing::info!(
        id = recorded.id,
        amount = %recorded.amount,
        remaining = %recorded.balance,
        operation,
        "Munch transaction recorded"
    );
    ttlog_nonblocking(
        &pool.conn,
        operation,
        &format!("munch #{}", recorded.id),
        &format!("{:.2}, balance {:.2}", recorded.amount, recorded.balance),
    );
    recorded
}

pub struct MunchLogic;

impl MunchLogic {
    /// Current cached balance (seeded with `default_balance` on first use).
    pub fn current(pool: &DbPool, default_balance: Decimal) -> AppResult<Decimal> {
        load_munch_balance(&pool.conn, default_balance)
    }

    /// Record a purchase of `amount`; the ledger stores it as a negative amount.
    pub fn spend(
        pool: &mut DbPool,
        default_balance: Decimal,
        amount: Decimal,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<MunchTransaction> {
        check_amount(amount)?;
        Self::apply(pool, default_balance, -amount, at, "spend")
    }

    /// Add funds to the balance.
    pub fn deposit(
        pool: &mut DbPool,
        default_balance: Decimal,
        amount: Decimal,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<MunchTransaction> {
        check_amount(amount)?;
        Self::apply(pool, default_balance, amount, at, "deposit")
    }

    /// Bring the balance to `target`, journaling the difference as an adjustment.
    ///
    /// The difference is taken against the balance read under the write lock,
    /// so two concurrent calls with the same target record one adjustment.
    /// Returns `None` when the balance already equals `target`.
    pub fn set_balance(
        pool: &mut DbPool,
        default_balance: Decimal,
        target: Decimal,
    ) -> AppResult<Option<MunchTransaction>> {
        if target < Decimal::ZERO || target > MAX_AMOUNT {
            return Err(AppError::InvalidAmount(target.to_string()));
        }

        let at = now_utc();
        let tx = pool.write_tx()?;
        let balance = load_munch_balance(&tx, default_balance)?;
        let delta = target
            .checked_sub(balance)
            .ok_or_else(|| AppError::InvalidAmount(target.to_string()))?
            .round_dp(2);

        if delta.is_zero() {
            tracing::debug!(%balance, "Balance already at target");
            return Ok(None);
        }

        let recorded = record(&tx, balance, delta, at)?;
        tx.commit()?;

        Ok(Some(journal(pool, recorded, "adjust")))
    }

    fn apply(
        pool: &mut DbPool,
        default_balance: Decimal,
        signed_amount: Decimal,
        at: Option<DateTime<Utc>>,
        operation: &str,
    ) -> AppResult<MunchTransaction> {
        let at = at.unwrap_or_else(now_utc);

        let tx = pool.write_tx()?;
        let balance = load_munch_balance(&tx, default_balance)?;
        let recorded = record(&tx, balance, signed_amount.round_dp(2), at)?;
        tx.commit()?;

        Ok(journal(pool, recorded, operation))
    }

    /// Delete a transaction and reverse its effect on the cached balance.
    ///
    /// A deleted purchase is refunded, a deleted deposit is taken back.
    /// Other rows keep their stored balance snapshots. The balance may end up
    /// negative when a deposit that was already spent is removed.
    pub fn delete(pool: &mut DbPool, default_balance: Decimal, id: i64) -> AppResult<Decimal> {
        let tx = pool.write_tx()?;

        let row = find_munch(&tx, id)?.ok_or(AppError::RowNotFound {
            ledger: "munch",
            id,
        })?;
        let amount = row.transaction_amount.unwrap_or_else(|| {
            tracing::warn!(id, "Deleting munch row without an amount; balance left as is");
            Decimal::ZERO
        });

        let balance = load_munch_balance(&tx, default_balance)?;
        delete_munch(&tx, id).inspect_err(|e| {
            tracing::error!(id, "Failed to delete munch transaction: {e}");
        })?;
        let balance = balance
            .checked_sub(amount)
            .ok_or_else(|| AppError::CorruptValue {
                key: MUNCH_BALANCE_KEY.to_string(),
                value: balance.to_string(),
            })?
            .round_dp(2);
        store_munch_balance(&tx, balance)?;
        tx.commit()?;

        tracing::info!(id, %balance, "Munch transaction deleted");
        ttlog_nonblocking(
            &pool.conn,
            "del",
            &format!("munch #{id}"),
            &format!("Reversed {:.2}, balance {:.2}", amount, balance),
        );
        Ok(balance)
    }
}
