//! Command implementations.

pub mod analyze;
pub mod config;
pub mod parse;
pub mod predict;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::parse::execute_parse;
pub use self::predict::execute_predict;
