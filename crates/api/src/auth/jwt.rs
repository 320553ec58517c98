//! JWT-backed session provider
//!
//! Session tokens are HS256 JWTs naming a user (`sub`) and a session row (`sid`).
//! The token is read from `Authorization: Bearer` or, failing that, the session
//! cookie. A valid signature is not enough: the session row must still be live.

use std::sync::Arc;

use async_trait::async_trait;
use hive_shared::UserId;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::{HeaderMapping, ProviderSession, SessionProvider, SessionProviderError};
use crate::store::AccountStore;

/// Default name of the session cookie
pub const DEFAULT_SESSION_COOKIE: &str = "hive_session";

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Session ID
    pub sid: Uuid,
    /// Issued at
    pub iat: i64,
    /// Expiration
    pub exp: i64,
}

/// Session provider validating JWTs against the account store
#[derive(Clone)]
pub struct JwtSessionProvider {
    decoding_key: DecodingKey,
    cookie_name: String,
    accounts: Arc<dyn AccountStore>,
}

impl JwtSessionProvider {
    pub fn new(secret: &str, cookie_name: impl Into<String>, accounts: Arc<dyn AccountStore>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            cookie_name: cookie_name.into(),
            accounts,
        }
    }

    /// Validate and decode a session token
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, SessionProviderError> {
        // Explicit algorithm prevents algorithm confusion attacks
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 60; // 60 second clock skew tolerance

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionProviderError::Expired,
                _ => SessionProviderError::InvalidToken,
            })
    }

    /// Pull the raw token out of the header mapping
    fn extract_token<'a>(&self, headers: &'a HeaderMapping) -> Option<&'a str> {
        if let Some(token) = headers
            .get("authorization")
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            return Some(token);
        }

        headers
            .get("cookie")
            .and_then(|cookies| cookie_value(cookies, &self.cookie_name))
    }
}

/// Find `name=value` in a `Cookie` header
fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl SessionProvider for JwtSessionProvider {
    async fn get_session(
        &self,
        headers: &HeaderMapping,
    ) -> Result<Option<ProviderSession>, SessionProviderError> {
        let Some(token) = self.extract_token(headers) else {
            return Ok(None);
        };

        let claims = self.validate_token(token)?;

        let Some(session) = self.accounts.live_session(claims.sid).await? else {
            tracing::debug!(session_id = %claims.sid, "Session revoked or expired");
            return Ok(None);
        };

        // Token and session row must agree on the owner
        if session.user_id != UserId(claims.sub) {
            return Err(SessionProviderError::InvalidToken);
        }

        let Some(user) = self.accounts.user_by_id(session.user_id).await? else {
            return Ok(None);
        };

        Ok(Some(ProviderSession { session, user }))
    }
}
