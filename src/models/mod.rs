pub mod history;
pub mod meal;
pub mod meal_period;
pub mod munch;
