//! Read-time projection of a ledger into date sections.

use super::meal_period::MealPeriod;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A calendar day of history, newest entries first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section<E> {
    pub title: String,
    pub date: NaiveDate,
    pub entries: Vec<E>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub time: String,
    pub period: MealPeriod,
    pub label: String,
    pub meals_left: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MunchEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub time: String,
    pub amount: Decimal,
    pub balance: Decimal,
    pub label: String,
}
