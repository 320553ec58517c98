//! Session resolution for a request

use std::sync::Arc;

use axum::http::HeaderMap;
use hive_shared::{SessionRecord, UserRecord};
use serde::Serialize;

use super::provider::{to_header_mapping, ProviderSession, SessionProvider};
use crate::error::{ApiError, ApiResult};

/// Session and user for a request. Both are present or both are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    pub session: Option<SessionRecord>,
    pub user: Option<UserRecord>,
}

impl SessionResult {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The authenticated user, or `Unauthorized`
    pub fn require_user(&self) -> ApiResult<&UserRecord> {
        self.user.as_ref().ok_or(ApiError::Unauthorized)
    }
}

impl From<Option<ProviderSession>> for SessionResult {
    fn from(found: Option<ProviderSession>) -> Self {
        match found {
            Some(ProviderSession { session, user }) => Self {
                session: Some(session),
                user: Some(user),
            },
            None => Self::anonymous(),
        }
    }
}

/// Resolves sessions through a [`SessionProvider`]
#[derive(Clone)]
pub struct SessionResolver {
    provider: Arc<dyn SessionProvider>,
}

impl SessionResolver {
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self { provider }
    }

    /// Resolve the session carried by `headers`.
    ///
    /// Never fails: provider errors are logged and reported as unauthenticated.
    pub async fn resolve(&self, headers: &HeaderMap) -> SessionResult {
        let mapping = to_header_mapping(headers);

        match self.provider.get_session(&mapping).await {
            Ok(found) => {
                let result = SessionResult::from(found);
                if let Some(user) = &result.user {
                    tracing::debug!(user_id = %user.id, "Resolved session");
                }
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session provider failed, treating request as unauthenticated");
                SessionResult::anonymous()
            }
        }
    }
}
