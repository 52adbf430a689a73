pub mod config;
pub mod config_resource;
pub mod environment;
pub mod error;
pub mod hostname;
pub mod location;
pub mod logging;

pub use config_resource::{ConfigResource, Configuration};
pub use environment::Environment;
pub use error::{Error, Result};
pub use hostname::{DevServer, HostnameAndPort, Prefixes};
pub use location::{FixedLocation, Location};
