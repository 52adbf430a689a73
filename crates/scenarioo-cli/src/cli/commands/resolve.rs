//! `scenarioo resolve` – print the URL prefixes.

use anyhow::Result;
use scenarioo_core::config::Settings;
use scenarioo_core::{FixedLocation, Prefixes};

pub fn run_resolve(settings: &Settings, location: &str) -> Result<()> {
    let hostname = settings.hostname(FixedLocation::new(location));
    print!("{}", format_prefixes(&hostname.prefixes()));
    Ok(())
}

pub(crate) fn format_prefixes(p: &Prefixes) -> String {
    format!(
        "forNgResource: {}\nforTest: {}\nforLink: {}\nforLinkAbsolute: {}\n",
        p.ng_resource, p.test, p.link, p.link_absolute
    )
}
