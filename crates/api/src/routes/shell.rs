//! Dashboard shell bootstrap
//!
//! Everything the layout needs before rendering: host, tenant, branding and
//! session, resolved through the same request context the page will reuse.

use std::sync::Arc;

use axum::{Extension, Json};
use hive_shared::{BrandingRecord, TenantId};
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::ApiResult;
use crate::session::SessionResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellResponse {
    pub host: String,
    pub tenant_id: Option<TenantId>,
    pub branding: BrandingRecord,
    pub session: SessionResult,
}

pub async fn get_context(
    Extension(ctx): Extension<Arc<RequestContext>>,
) -> ApiResult<Json<ShellResponse>> {
    // Independent resolutions, run side by side
    let (branding, session) = tokio::join!(ctx.brand_for_request(), ctx.current_session());
    let branding = branding?.clone();
    // Already memoized by the branding lookup
    let tenant_id = ctx.tenant_id().await?.cloned();

    Ok(Json(ShellResponse {
        host: ctx.bare_host().to_string(),
        tenant_id,
        branding,
        session: session.clone(),
    }))
}
