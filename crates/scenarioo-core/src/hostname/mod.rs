//! Hostname and port resolution for backend calls and links.
//!
//! In development the viewer runs on its own dev server, so every prefix
//! points at the fixed backend address. In production the viewer is served by
//! the backend itself: prefixes are relative (empty), and only absolute links
//! need the current location.

mod absolute;
mod dev_server;

pub use absolute::link_base_from_abs_url;
pub use dev_server::DevServer;

use crate::environment::Environment;
use crate::location::Location;

/// The four prefixes, resolved at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixes {
    pub ng_resource: String,
    pub test: String,
    pub link: String,
    pub link_absolute: String,
}

/// Resolves URL prefixes from the environment flag and the current location.
///
/// Stateless: every call recomputes its result, and the location is read
/// on each [`for_link_absolute`](Self::for_link_absolute) call in production.
#[derive(Debug, Clone)]
pub struct HostnameAndPort<L> {
    env: Environment,
    dev_server: DevServer,
    location: L,
}

impl<L: Location> HostnameAndPort<L> {
    /// Resolver using the default development server (`http://localhost:8080/scenarioo/`).
    pub fn new(env: Environment, location: L) -> Self {
        Self::with_dev_server(env, DevServer::default(), location)
    }

    pub fn with_dev_server(env: Environment, dev_server: DevServer, location: L) -> Self {
        Self {
            env,
            dev_server,
            location,
        }
    }

    pub fn environment(&self) -> Environment {
        self.env
    }

    /// Prefix for resource-routing templates; the port colon is escaped.
    pub fn for_ng_resource(&self) -> String {
        match self.env {
            Environment::Development => self.dev_server.escaped_base_url(),
            Environment::Production => String::new(),
        }
    }

    /// Prefix for plain HTTP calls made by tests and tooling.
    pub fn for_test(&self) -> String {
        self.relative_or_dev()
    }

    /// Prefix for links inside the viewer.
    pub fn for_link(&self) -> String {
        self.relative_or_dev()
    }

    /// Absolute prefix for links that leave the viewer (shared, copied, emailed).
    pub fn for_link_absolute(&self) -> String {
        match self.env {
            Environment::Development => self.dev_server.base_url(),
            Environment::Production => {
                let abs_url = self.location.abs_url();
                let base = link_base_from_abs_url(&abs_url);
                tracing::debug!("absolute link base {} from location {}", base, abs_url);
                base
            }
        }
    }

    pub fn prefixes(&self) -> Prefixes {
        Prefixes {
            ng_resource: self.for_ng_resource(),
            test: self.for_test(),
            link: self.for_link(),
            link_absolute: self.for_link_absolute(),
        }
    }

    fn relative_or_dev(&self) -> String {
        match self.env {
            Environment::Development => self.dev_server.base_url(),
            Environment::Production => String::new(),
        }
    }
}
