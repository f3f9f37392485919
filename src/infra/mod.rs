pub mod config;
pub mod db;
pub mod logging;

pub use config::{Config, Settings};
pub use db::setup_database;
pub use logging::init_logging;
