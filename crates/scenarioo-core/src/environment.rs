//! Deployment environment flag (`ENV`).

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment mode the viewer runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Viewer served by a local dev server; backend on a fixed localhost address.
    Development,
    /// Viewer served by the backend itself; prefixes are relative.
    #[default]
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Lenient parse for ambient `ENV` values (env vars, host-provided constants).
    ///
    /// Unknown values map to `Production`, whose relative prefixes never point
    /// at a developer machine.
    pub fn from_env_constant(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!("unknown ENV value {:?}, falling back to production", value);
            Environment::Production
        })
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("development") {
            Ok(Environment::Development)
        } else if s.eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Err(Error::UnknownEnvironment(s.to_string()))
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
