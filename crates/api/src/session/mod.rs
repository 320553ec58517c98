//! Request session resolution
//!
//! Wraps the opaque session provider so that "no session" and "provider error"
//! look the same to callers. Only `require_user` turns absence into a failure.

mod provider;
mod resolver;

pub use provider::{
    to_header_mapping, HeaderMapping, ProviderSession, SessionProvider, SessionProviderError,
};
pub use resolver::{SessionResolver, SessionResult};
