use crate::environment::Environment;
use crate::hostname::{DevServer, HostnameAndPort};
use crate::location::Location;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the `env` key of the settings file.
pub const ENV_VAR: &str = "SCENARIOO_ENV";

/// Settings loaded from `~/.config/scenarioo/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// `ENV`: "development" or "production" (default).
    #[serde(default)]
    pub env: Environment,
    /// Backend address used in development; optional section.
    #[serde(default)]
    pub dev_server: DevServer,
}

impl Settings {
    /// Applies `SCENARIOO_ENV` if it is set.
    pub fn with_env_override(mut self) -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) => {
                self.env = Environment::from_env_constant(&value);
                tracing::debug!("{} overrides env to {}", ENV_VAR, self.env);
            }
            Err(VarError::NotUnicode(raw)) => {
                tracing::warn!("ignoring non-UTF-8 {} value {:?}", ENV_VAR, raw);
            }
            Err(VarError::NotPresent) => {}
        }
        self
    }

    pub fn hostname<L: Location>(&self, location: L) -> HostnameAndPort<L> {
        HostnameAndPort::with_dev_server(self.env, self.dev_server.clone(), location)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scenarioo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        let default_settings = Settings::default();
        let toml = toml::to_string_pretty(&default_settings)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_settings);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Settings> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(settings)
}
