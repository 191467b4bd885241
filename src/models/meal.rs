//! Row model for the `meal_history` table.

/// One meal swipe as read back from SQLite.
///
/// The payload columns are optional on read: rows written by other tools
/// may lack them, and the history view skips such rows instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct MealRow {
    pub id: i64,                 // ⇔ meal_history.id
    pub meals_left: Option<i64>, // ⇔ meal_history.meals_left
    pub date: Option<String>,    // ⇔ meal_history.date (RFC 3339)
}

impl MealRow {
    pub fn new(id: i64, meals_left: i64, date: impl Into<String>) -> Self {
        Self {
            id,
            meals_left: Some(meals_left),
            date: Some(date.into()),
        }
    }
}
