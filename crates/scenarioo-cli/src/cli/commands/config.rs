//! `scenarioo config` – fetch and print the backend configuration.

use anyhow::{Context, Result};
use scenarioo_core::config::Settings;
use scenarioo_core::{ConfigResource, FixedLocation};

pub fn run_config(settings: &Settings, location: Option<&str>) -> Result<()> {
    let resource = ConfigResource::new(settings.hostname(FixedLocation::new(location.unwrap_or(""))));
    if resource.hostname().environment().is_production() && location.is_none() {
        anyhow::bail!("--location is required in production to locate the backend");
    }
    let endpoint = resource.endpoint().context("resolve configuration endpoint")?;
    let cfg = resource
        .get()
        .with_context(|| format!("fetch configuration from {}", endpoint))?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenarioo_core::Environment;

    #[test]
    fn production_without_location_is_rejected() {
        let settings = Settings {
            env: Environment::Production,
            ..Settings::default()
        };
        let err = run_config(&settings, None).unwrap_err();
        assert!(err.to_string().contains("--location"), "unexpected error: {}", err);
    }
}
