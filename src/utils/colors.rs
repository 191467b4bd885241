//! ANSI color helper utilities for terminal output.
use rust_decimal::Decimal;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Amount color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_amount(amount: Decimal) -> &'static str {
    if amount > Decimal::ZERO {
        GREEN
    } else if amount < Decimal::ZERO {
        RED
    } else {
        RESET
    }
}

/// Color used for the meal period column.
pub fn color_for_period(label: &str) -> &'static str {
    match label {
        "Breakfast" => YELLOW,
        "Lunch" => GREEN,
        "Dinner" => CYAN,
        _ => MAGENTA,
    }
}
