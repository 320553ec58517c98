//! PostgreSQL-backed lookups

use async_trait::async_trait;
use hive_shared::{BrandingRow, SessionRecord, TenantId, UserId, UserRecord};
use sqlx::PgPool;
use uuid::Uuid;

use super::{AccountStore, StoreResult, TenantStore};

const BRANDING_COLUMNS: &str = "tenant_id, is_default, title_text, logo_light_url, \
                                logo_dark_url, favicon_url, sidebar_icon_url";

/// Store backed by the application's Postgres pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantStore for PgStore {
    async fn tenant_id_by_slug(&self, slug: &str) -> StoreResult<Option<TenantId>> {
        let id: Option<TenantId> = sqlx::query_scalar("SELECT id FROM tenants WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    async fn tenant_id_by_domain(&self, domain: &str) -> StoreResult<Option<TenantId>> {
        let id: Option<TenantId> =
            sqlx::query_scalar("SELECT tenant_id FROM tenant_domains WHERE domain = $1")
                .bind(domain)
                .fetch_optional(&self.pool)
                .await?;
        Ok(id)
    }

    async fn branding_for_tenant(&self, tenant_id: &TenantId) -> StoreResult<Option<BrandingRow>> {
        let row: Option<BrandingRow> = sqlx::query_as(&format!(
            "SELECT {BRANDING_COLUMNS} FROM tenant_branding WHERE tenant_id = $1"
        ))
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn default_branding(&self) -> StoreResult<Option<BrandingRow>> {
        // tenant_branding_single_default guarantees at most one match
        let row: Option<BrandingRow> = sqlx::query_as(&format!(
            "SELECT {BRANDING_COLUMNS} FROM tenant_branding WHERE is_default LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn live_session(&self, session_id: Uuid) -> StoreResult<Option<SessionRecord>> {
        let session: Option<SessionRecord> = sqlx::query_as(
            r#"
            SELECT id, user_id, expires_at
            FROM sessions
            WHERE id = $1
              AND revoked_at IS NULL
              AND expires_at > NOW()
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    async fn user_by_id(&self, user_id: UserId) -> StoreResult<Option<UserRecord>> {
        let user: Option<UserRecord> =
            sqlx::query_as("SELECT id, email, name, role, tenant_id FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }
}
