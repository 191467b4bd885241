//! Row model for the `munch_history` table.

use rust_decimal::Decimal;

/// One munch-money transaction as read back from SQLite.
///
/// `transaction_amount` is signed: purchases are negative, deposits and
/// upward adjustments positive. `remaining_balance` is the balance right
/// after the transaction was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MunchRow {
    pub id: i64,
    pub transaction_amount: Option<Decimal>,
    pub remaining_balance: Option<Decimal>,
    pub date: Option<String>,
}

impl MunchRow {
    pub fn new(
        id: i64,
        transaction_amount: Decimal,
        remaining_balance: Decimal,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            transaction_amount: Some(transaction_amount),
            remaining_balance: Some(remaining_balance),
            date: Some(date.into()),
        }
    }
}
