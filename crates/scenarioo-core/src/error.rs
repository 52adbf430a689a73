//! Error type shared by the core modules.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// `ENV` value other than `development` or `production`.
    #[error("unknown environment: {0:?} (expected \"development\" or \"production\")")]
    UnknownEnvironment(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("curl: {0}")]
    Curl(#[from] curl::Error),

    /// Backend answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { status: u32, url: String },

    #[error("invalid configuration payload: {0}")]
    Decode(#[from] serde_json::Error),
}
