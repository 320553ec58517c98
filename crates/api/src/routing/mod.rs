//! Host-based tenant routing
//!
//! Turns the raw `Host`/`X-Forwarded-Host` headers of a request into a tenant:
//! - `localhost`, loopback addresses and empty hosts -> the default tenant
//! - Any other host -> exact match in the domain mapping table

mod host_parser;
mod tenant_locator;

pub use host_parser::{parse_bare_host, BareHost};
pub use tenant_locator::{
    lookup_strategy, LookupStrategy, TenantLocator, DEFAULT_TENANT_SLUG, LOCAL_HOSTS,
};
