//! `scenarioo settings` – show where settings live and what is in effect.

use anyhow::Result;
use scenarioo_core::config::{self, Settings};

pub fn run_settings(settings: &Settings) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}
