//! Viewer configuration fetched from the backend's `rest/configuration`.

use crate::error::{Error, Result};
use crate::hostname::HostnameAndPort;
use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const CONFIGURATION_PATH: &str = "rest/configuration";

/// Configuration document served by the backend. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_documentation_dir_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_build_name: Option<String>,
    /// Comma-separated scenario property keys shown in the overview table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_properties_in_overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_information: Option<String>,
}

/// Backend configuration resource.
///
/// The endpoint is resolved against the absolute link base on every call, so
/// a production location change is picked up without rebuilding the resource.
#[derive(Debug, Clone)]
pub struct ConfigResource<L> {
    hostname: HostnameAndPort<L>,
}

impl<L: Location> ConfigResource<L> {
    pub fn new(hostname: HostnameAndPort<L>) -> Self {
        Self { hostname }
    }

    pub fn hostname(&self) -> &HostnameAndPort<L> {
        &self.hostname
    }

    pub fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(&self.hostname.for_link_absolute())?;
        Ok(base.join(CONFIGURATION_PATH)?)
    }

    /// Fetches and decodes the configuration. Blocks the current thread.
    pub fn get(&self) -> Result<Configuration> {
        let url = self.endpoint()?;
        tracing::debug!("GET {}", url);

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.follow_location(true)?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(Duration::from_secs(30))?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(Error::Http {
                status,
                url: url.to_string(),
            });
        }

        let cfg: Configuration = serde_json::from_slice(&body)?;
        tracing::info!(
            "loaded configuration from {} (branch={:?}, build={:?})",
            url,
            cfg.default_branch_name,
            cfg.default_build_name
        );
        Ok(cfg)
    }
}
