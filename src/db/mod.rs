pub mod initialize;
pub mod kv;
pub mod log;
pub mod meal_history;
pub mod munch_history;
pub mod pool;
pub mod stats;
