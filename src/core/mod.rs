pub mod config;
pub mod history;
pub mod log;
pub mod meal;
pub mod munch;
pub mod reconcile;
