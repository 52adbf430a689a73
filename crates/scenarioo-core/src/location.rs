//! Access to the URL the viewer is currently displayed under.
//!
//! The resolver reads it only in production, and only for absolute links.

/// Capability returning the current absolute URL (scheme, host, port, path, fragment).
pub trait Location {
    fn abs_url(&self) -> String;
}

/// Location with a fixed URL, e.g. passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct FixedLocation(pub String);

impl FixedLocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl Location for FixedLocation {
    fn abs_url(&self) -> String {
        self.0.clone()
    }
}

impl<F> Location for F
where
    F: Fn() -> String,
{
    fn abs_url(&self) -> String {
        self()
    }
}
