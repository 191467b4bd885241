pub mod config;
pub mod db;
pub mod del;
pub mod eat;
pub mod history;
pub mod init;
pub mod log;
pub mod meal;
pub mod munch;
pub mod reconcile;
pub mod status;
