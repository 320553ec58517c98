//! Host-to-Tenant Resolution
//!
//! Maps a bare host to a tenant id:
//! - Local or empty hosts resolve to the reserved default tenant by slug
//! - Everything else resolves through an exact domain mapping
//!
//! Each lookup is a single point read. A miss means "no tenant for this host".

use std::sync::Arc;

use hive_shared::TenantId;

use crate::store::{StoreResult, TenantStore};

/// Slug of the reserved default tenant
pub const DEFAULT_TENANT_SLUG: &str = "central";

/// Hosts that always resolve to the default tenant
pub const LOCAL_HOSTS: &[&str] = &["", "localhost", "127.0.0.1", "::1"];

/// How a tenant lookup was routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Local/empty host, looked up by the default tenant slug
    DefaultTenant,
    /// Looked up by exact domain mapping
    DomainMapping,
}

/// Tenant locator over a storage backend
#[derive(Clone)]
pub struct TenantLocator {
    store: Arc<dyn TenantStore>,
    default_slug: String,
}

impl TenantLocator {
    pub fn new(store: Arc<dyn TenantStore>) -> Self {
        Self::with_default_slug(store, DEFAULT_TENANT_SLUG)
    }

    pub fn with_default_slug(store: Arc<dyn TenantStore>, default_slug: impl Into<String>) -> Self {
        Self {
            store,
            default_slug: default_slug.into(),
        }
    }

    /// Resolve a bare host to a tenant id.
    ///
    /// Storage errors propagate; there is no safe default tenant during an outage.
    pub async fn locate(&self, bare_host: &str) -> StoreResult<Option<TenantId>> {
        let tenant_id = match lookup_strategy(bare_host) {
            LookupStrategy::DefaultTenant => {
                self.store.tenant_id_by_slug(&self.default_slug).await?
            }
            LookupStrategy::DomainMapping => self.store.tenant_id_by_domain(bare_host).await?,
        };

        match &tenant_id {
            Some(id) => tracing::debug!(host = %bare_host, tenant_id = %id, "Resolved tenant"),
            None => tracing::debug!(host = %bare_host, "No tenant for host"),
        }

        Ok(tenant_id)
    }

    pub fn default_slug(&self) -> &str {
        &self.default_slug
    }
}

/// Pick the lookup for a bare host
pub fn lookup_strategy(bare_host: &str) -> LookupStrategy {
    if LOCAL_HOSTS.contains(&bare_host) {
        LookupStrategy::DefaultTenant
    } else {
        LookupStrategy::DomainMapping
    }
}
