//! Bare host extraction
//!
//! Derives the canonical hostname for a request from its raw headers.
//! Proxies may forward a chain (`a.example.com, proxy.internal`) and clients
//! may append a port; both are stripped.

use axum::http::HeaderMap;

const FORWARDED_HOST: &str = "x-forwarded-host";
const HOST: &str = "host";

/// Lowercase hostname with no scheme, no port and no proxy chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BareHost(String);

impl BareHost {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for BareHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse the bare host from request headers.
///
/// `x-forwarded-host` wins when present and non-empty, otherwise `host`.
/// Missing or unreadable headers yield an empty host.
pub fn parse_bare_host(headers: &HeaderMap) -> BareHost {
    let raw = header_str(headers, FORWARDED_HOST)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| header_str(headers, HOST))
        .unwrap_or_default();

    BareHost(normalize_host(raw))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Lowercase, keep the first entry of a comma list, drop the port
fn normalize_host(raw: &str) -> String {
    let host = raw.trim().to_lowercase();
    let first = host.split(',').next().unwrap_or_default().trim();
    first.split(':').next().unwrap_or_default().to_string()
}
