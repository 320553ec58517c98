//! Branding fallback chain
//!
//! Sources are tried in order, short-circuiting on the first row found:
//! 1. the branding row scoped to the request's tenant (only when a tenant is known)
//! 2. the global default branding row
//!
//! When neither yields a row the hardcoded fallback is returned untouched.

use std::sync::Arc;

use futures::future::BoxFuture;
use hive_shared::{BrandingRecord, BrandingRow, TenantId, DEFAULT_TITLE_TEXT};

use super::url::normalize_optional_url;
use crate::store::{StoreResult, TenantStore};

pub type Lookup = for<'a> fn(
    &'a dyn TenantStore,
    Option<&'a TenantId>,
) -> BoxFuture<'a, StoreResult<Option<BrandingRow>>>;

/// One step of the fallback chain
pub struct BrandingSource {
    pub name: &'static str,
    /// Whether this source can be consulted for the given tenant
    pub applies: fn(Option<&TenantId>) -> bool,
    pub lookup: Lookup,
}

/// Ordered fallback chain
pub const BRANDING_CHAIN: &[BrandingSource] = &[
    BrandingSource {
        name: "tenant",
        applies: has_tenant,
        lookup: tenant_branding,
    },
    BrandingSource {
        name: "default",
        applies: always,
        lookup: default_branding,
    },
];

fn has_tenant(tenant_id: Option<&TenantId>) -> bool {
    tenant_id.is_some()
}

fn always(_: Option<&TenantId>) -> bool {
    true
}

fn tenant_branding<'a>(
    store: &'a dyn TenantStore,
    tenant_id: Option<&'a TenantId>,
) -> BoxFuture<'a, StoreResult<Option<BrandingRow>>> {
    Box::pin(async move {
        match tenant_id {
            Some(id) => store.branding_for_tenant(id).await,
            None => Ok(None),
        }
    })
}

fn default_branding<'a>(
    store: &'a dyn TenantStore,
    _: Option<&'a TenantId>,
) -> BoxFuture<'a, StoreResult<Option<BrandingRow>>> {
    Box::pin(async move { store.default_branding().await })
}

/// Resolves branding for a tenant through [`BRANDING_CHAIN`]
#[derive(Clone)]
pub struct BrandingResolver {
    store: Arc<dyn TenantStore>,
}

impl BrandingResolver {
    pub fn new(store: Arc<dyn TenantStore>) -> Self {
        Self { store }
    }

    /// Resolve the branding record for `tenant_id` (or the default when `None`).
    ///
    /// Storage errors propagate.
    pub async fn resolve(&self, tenant_id: Option<&TenantId>) -> StoreResult<BrandingRecord> {
        for source in BRANDING_CHAIN {
            if !(source.applies)(tenant_id) {
                continue;
            }

            if let Some(row) = (source.lookup)(self.store.as_ref(), tenant_id).await? {
                tracing::debug!(
                    tenant_id = ?tenant_id.map(TenantId::as_str),
                    source = source.name,
                    "Resolved branding"
                );
                return Ok(build_branding(row));
            }
        }

        tracing::debug!(
            tenant_id = ?tenant_id.map(TenantId::as_str),
            "No branding row found, using fallback"
        );
        Ok(BrandingRecord::fallback())
    }
}

/// Build the public record from a source row
pub fn build_branding(row: BrandingRow) -> BrandingRecord {
    let fallback = BrandingRecord::fallback();

    let title_text = row
        .title_text
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE_TEXT.to_string());

    BrandingRecord {
        title_text,
        logo_light_url: normalize_optional_url(row.logo_light_url.as_deref()),
        logo_dark_url: normalize_optional_url(row.logo_dark_url.as_deref()),
        favicon_url: normalize_optional_url(row.favicon_url.as_deref()).or(fallback.favicon_url),
        sidebar_icon_url: normalize_optional_url(row.sidebar_icon_url.as_deref()),
    }
}
