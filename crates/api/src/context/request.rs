//! Per-request resolution context
//!
//! One `RequestContext` is created for every inbound request and shared by
//! every consumer of that request. Tenant, branding and session are each
//! resolved at most once; later calls return the same value.

use std::sync::Arc;

use axum::http::HeaderMap;
use hive_shared::{BrandingRecord, TenantId, UserRecord};

use super::memo::RequestMemo;
use crate::branding::BrandingResolver;
use crate::error::ApiResult;
use crate::routing::{parse_bare_host, BareHost, TenantLocator};
use crate::session::{SessionResolver, SessionResult};
use crate::store::{StoreError, TenantStore};

/// Process-wide resolvers. Holds no per-request state.
#[derive(Clone)]
pub struct ResolutionServices {
    pub locator: TenantLocator,
    pub branding: BrandingResolver,
    pub sessions: SessionResolver,
}

impl ResolutionServices {
    pub fn new(locator: TenantLocator, branding: BrandingResolver, sessions: SessionResolver) -> Self {
        Self {
            locator,
            branding,
            sessions,
        }
    }

    /// Locator and branding resolver over one tenant store
    pub fn from_store(
        store: Arc<dyn TenantStore>,
        default_tenant_slug: &str,
        sessions: SessionResolver,
    ) -> Self {
        Self {
            locator: TenantLocator::with_default_slug(store.clone(), default_tenant_slug),
            branding: BrandingResolver::new(store),
            sessions,
        }
    }

    /// Start a fresh context for an inbound request
    pub fn context_for(&self, headers: HeaderMap) -> RequestContext {
        RequestContext::new(self.clone(), headers)
    }
}

pub struct RequestContext {
    services: ResolutionServices,
    headers: HeaderMap,
    bare_host: BareHost,
    tenant: RequestMemo<Option<TenantId>>,
    branding: RequestMemo<BrandingRecord>,
    session: RequestMemo<SessionResult>,
}

impl RequestContext {
    pub fn new(services: ResolutionServices, headers: HeaderMap) -> Self {
        let bare_host = parse_bare_host(&headers);
        Self {
            services,
            headers,
            bare_host,
            tenant: RequestMemo::new(),
            branding: RequestMemo::new(),
            session: RequestMemo::new(),
        }
    }

    pub fn bare_host(&self) -> &BareHost {
        &self.bare_host
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Tenant owning this request's host
    pub async fn tenant_id(&self) -> Result<Option<&TenantId>, StoreError> {
        let tenant = self
            .tenant
            .get_or_try_compute(move || self.services.locator.locate(self.bare_host.as_str()))
            .await?;
        Ok(tenant.as_ref())
    }

    /// Branding for this request's tenant
    pub async fn brand_for_request(&self) -> Result<&BrandingRecord, StoreError> {
        self.branding
            .get_or_try_compute(move || async move {
                let tenant_id = self.tenant_id().await?;
                self.services.branding.resolve(tenant_id).await
            })
            .await
    }

    /// Session and user for this request; anonymous on any provider failure
    pub async fn current_session(&self) -> &SessionResult {
        self.session
            .get_or_compute(move || self.services.sessions.resolve(&self.headers))
            .await
    }

    /// The authenticated user, or `Unauthorized`
    pub async fn require_user(&self) -> ApiResult<&UserRecord> {
        self.current_session().await.require_user()
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("bare_host", &self.bare_host)
            .field("tenant", &self.tenant)
            .field("branding", &self.branding)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
