//! Session provider seam
//!
//! The authentication backend is opaque to the resolution layer: it receives a
//! plain header mapping and either yields a session/user pair, nothing, or fails.

use std::collections::BTreeMap;

use async_trait::async_trait;
use axum::http::HeaderMap;
use hive_shared::{SessionRecord, UserRecord};

use crate::store::StoreError;

/// Lowercase header name -> value, only non-empty string values
pub type HeaderMapping = BTreeMap<String, String>;

/// A validated session and the user it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub session: SessionRecord,
    pub user: UserRecord,
}

/// Resolves the session carried by a request's headers
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// `Ok(None)` when the request carries no session.
    async fn get_session(
        &self,
        headers: &HeaderMapping,
    ) -> Result<Option<ProviderSession>, SessionProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionProviderError {
    #[error("Invalid session token")]
    InvalidToken,
    #[error("Session token has expired")]
    Expired,
    #[error("Session lookup failed: {0}")]
    Store(#[from] StoreError),
}

/// Convert raw headers into the provider's mapping.
///
/// Values that are not valid visible strings, or are empty, are dropped. When
/// a header repeats, the first usable value is kept.
pub fn to_header_mapping(headers: &HeaderMap) -> HeaderMapping {
    let mut mapping = HeaderMapping::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        mapping
            .entry(name.as_str().to_string())
            .or_insert_with(|| value.to_string());
    }
    mapping
}
