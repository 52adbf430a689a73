//! CLI command handlers, one per file.

mod config;
mod resolve;
mod settings;

pub use config::run_config;
pub use resolve::run_resolve;
pub use settings::run_settings;
