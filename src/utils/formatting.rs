//! Formatting utilities used for CLI output and history labels.

use crate::errors::{AppError, AppResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest amount or balance accepted, `1000000000.00`.
///
/// Ledger amounts live in REAL columns, so cents stay exact well past this.
// 1_000_000_000.00 == 100_000_000_000 x 10^-2 (lo/mid words of the mantissa).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x4876_E800, 0x17, 0, false, 2);

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Format a money value with two decimals, e.g. `$15.50`.
///
/// With `want_sign` a leading `+` or `-` is always written (zero gets none),
/// which is how transaction amounts are shown: `-$4.50`, `+$20.00`.
pub fn format_money(amount: Decimal, symbol: &str, want_sign: bool) -> String {
    let abs = amount.abs().round_dp(2);
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else if want_sign && !amount.is_zero() {
        "+"
    } else {
        ""
    };

    format!("{}{}{:.2}", sign, symbol, abs)
}

/// Parse a user supplied amount such as `4.50` or `$4.50`.
///
/// Amounts carry at most two decimal places and must be strictly positive.
pub fn parse_amount(s: &str) -> AppResult<Decimal> {
    let cleaned = s.trim().trim_start_matches('$');
    let amount = Decimal::from_str(cleaned).map_err(|_| AppError::InvalidAmount(s.to_string()))?;

    if amount.round_dp(2) != amount {
        return Err(AppError::InvalidAmount(format!(
            "{} (at most two decimal places)",
            s
        )));
    }

    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidAmount(format!("{} (must be positive)", s)));
    }

    if amount > MAX_AMOUNT {
        return Err(AppError::InvalidAmount(format!(
            "{} (must not exceed {})",
            s, MAX_AMOUNT
        )));
    }

    Ok(amount)
}

/// Like [`parse_amount`] but accepts zero, for balances.
pub fn parse_balance(s: &str) -> AppResult<Decimal> {
    let cleaned = s.trim().trim_start_matches('$');
    let amount = Decimal::from_str(cleaned).map_err(|_| AppError::InvalidAmount(s.to_string()))?;

    if amount.round_dp(2) != amount || amount < Decimal::ZERO || amount > MAX_AMOUNT {
        return Err(AppError::InvalidAmount(format!(
            "{} (expected a non-negative amount with at most two decimals, up to {})",
            s, MAX_AMOUNT
        )));
    }

    Ok(amount)
}
