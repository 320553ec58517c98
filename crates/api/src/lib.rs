//! Hive API Library
//!
//! Request-time tenant and identity resolution for the Hive dashboard, plus the
//! HTTP surface that exposes it.

pub mod auth;
pub mod branding;
pub mod config;
pub mod context;
pub mod error;
pub mod routes;
pub mod routing;
pub mod session;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use context::{RequestContext, RequestMemo, ResolutionServices};
pub use error::{ApiError, ApiResult};
pub use routing::{parse_bare_host, BareHost, TenantLocator};
pub use state::AppState;
