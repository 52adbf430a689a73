//! Fixed backend address used while developing the viewer.

use serde::{Deserialize, Serialize};

/// Address of the backend when the viewer is served by a local dev server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServer {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Web application context the backend is deployed under (no slashes needed).
    pub context_path: String,
}

impl Default for DevServer {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8080,
            context_path: "scenarioo".to_string(),
        }
    }
}

impl DevServer {
    /// `scheme://host:port/context/`, always with a trailing slash.
    pub fn base_url(&self) -> String {
        self.format_base(":")
    }

    /// Same as [`base_url`](Self::base_url) with the port colon escaped as `\:`,
    /// so resource-routing templates do not read `:8080` as a parameter.
    pub fn escaped_base_url(&self) -> String {
        self.format_base("\\:")
    }

    fn format_base(&self, port_sep: &str) -> String {
        let context = self.context_path.trim_matches('/');
        let mut base = format!("{}://{}{}{}/", self.scheme, self.host, port_sep, self.port);
        if !context.is_empty() {
            base.push_str(context);
            base.push('/');
        }
        base
    }
}
