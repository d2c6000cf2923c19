//! Stable per-site identifiers derived from host names.
//!
//! The slug names both the per-site storage file and the heading placed at
//! the top of a freshly created file, so it has to be deterministic for a
//! given host. All functions here are pure and total.

use once_cell::sync::Lazy;
use regex::Regex;

static PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9:/]+\.(.+)$").expect("hardcoded pattern"));

static URL_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://([^/?#]+)").expect("hardcoded pattern"));

#[must_use]
/// Strip a leading scheme or subdomain-like prefix from a host name.
///
/// The prefix is one or more alphanumeric/`:`/`/` characters ending in a
/// literal `.`, and it is only stripped when at least two `.`-separated
/// segments remain: `www.example.com` becomes `example.com`, while
/// `example.com` and single-label hosts pass through unchanged.
pub fn host_slug(host_name: &str) -> String {
    if let Some(caps) = PREFIX.captures(host_name) {
        let rest = &caps[1];
        if rest.contains('.') {
            return rest.to_string();
        }
    }
    host_name.to_string()
}

#[must_use]
/// Filesystem- and anchor-safe file stem for a host: the slug with dots
/// replaced by dashes.
pub fn file_stem(host_name: &str) -> String {
    host_slug(host_name).replace('.', "-")
}

#[must_use]
/// Extract the host portion of a URL, if it has one.
pub fn host_of_url(url: &str) -> Option<String> {
    URL_HOST
        .captures(url)
        .map(|caps| caps[1].trim_start_matches('@').to_string())
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
