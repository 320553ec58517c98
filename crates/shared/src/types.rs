//! Common types used across Hive

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// ID Wrappers
// =============================================================================

/// Tenant identifier.
///
/// Opaque and stable for the lifetime of a tenant; never reused after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TenantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// User ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(pub Uuid);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

// =============================================================================
// Branding
// =============================================================================

/// Title used when no branding source supplies one.
pub const DEFAULT_TITLE_TEXT: &str = "Hive";

/// Presentation fields for a tenant (or the system default).
///
/// Every URL is either `None`, a `data:` URI, an absolute http(s) URL or a
/// root-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingRecord {
    pub title_text: String,
    pub logo_light_url: Option<String>,
    pub logo_dark_url: Option<String>,
    pub favicon_url: Option<String>,
    pub sidebar_icon_url: Option<String>,
}

impl BrandingRecord {
    /// The hardcoded record returned when storage has no branding at all.
    pub fn fallback() -> Self {
        Self {
            title_text: DEFAULT_TITLE_TEXT.to_string(),
            logo_light_url: None,
            logo_dark_url: None,
            favicon_url: None,
            sidebar_icon_url: None,
        }
    }
}

impl Default for BrandingRecord {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Raw branding row as persisted, before URL normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct BrandingRow {
    pub tenant_id: Option<TenantId>,
    pub is_default: bool,
    pub title_text: Option<String>,
    pub logo_light_url: Option<String>,
    pub logo_dark_url: Option<String>,
    pub favicon_url: Option<String>,
    pub sidebar_icon_url: Option<String>,
}

// =============================================================================
// Accounts
// =============================================================================

/// An authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub tenant_id: Option<TenantId>,
}

/// A live login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionRecord {
    pub id: Uuid,
    pub user_id: UserId,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}
