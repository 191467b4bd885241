use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;

/// Meal bucket derived from the time of day of a swipe.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
    MidnightSnack,
}

/// Half-open `[start, end)` hour windows. Anything outside them is a midnight snack.
const PERIOD_WINDOWS: [(u32, u32, MealPeriod); 3] = [
    (5, 10, MealPeriod::Breakfast),
    (10, 16, MealPeriod::Lunch),
    (16, 22, MealPeriod::Dinner),
];

impl MealPeriod {
    pub fn from_time(time: NaiveTime) -> Self {
        let minute_of_day = time.hour() * 60 + time.minute();

        PERIOD_WINDOWS
            .iter()
            .find(|(start, end, _)| minute_of_day >= start * 60 && minute_of_day < end * 60)
            .map(|(_, _, period)| *period)
            .unwrap_or(MealPeriod::MidnightSnack)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "Breakfast",
            MealPeriod::Lunch => "Lunch",
            MealPeriod::Dinner => "Dinner",
            MealPeriod::MidnightSnack => "Midnight Snack",
        }
    }
}

impl fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
