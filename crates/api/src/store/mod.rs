//! Storage lookup seams
//!
//! The resolution layer only ever performs point reads by unique key. Every
//! lookup returns at most one record; a miss is `Ok(None)`, never an error.

mod postgres;

use async_trait::async_trait;
use hive_shared::{BrandingRow, SessionRecord, TenantId, UserId, UserRecord};
use uuid::Uuid;

pub use postgres::PgStore;

/// Lookups used to resolve a tenant and its branding.
#[async_trait]
pub trait TenantStore: Send + Sync {
    /// Tenant id for a tenant slug (used for the reserved default tenant).
    async fn tenant_id_by_slug(&self, slug: &str) -> StoreResult<Option<TenantId>>;

    /// Tenant id mapped to an exact domain.
    async fn tenant_id_by_domain(&self, domain: &str) -> StoreResult<Option<TenantId>>;

    /// Branding row scoped to a tenant.
    async fn branding_for_tenant(&self, tenant_id: &TenantId) -> StoreResult<Option<BrandingRow>>;

    /// The global default branding row.
    async fn default_branding(&self) -> StoreResult<Option<BrandingRow>>;
}

/// Lookups used by the session provider backend.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// A session that is neither revoked nor expired.
    async fn live_session(&self, session_id: Uuid) -> StoreResult<Option<SessionRecord>>;

    async fn user_by_id(&self, user_id: UserId) -> StoreResult<Option<UserRecord>>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
