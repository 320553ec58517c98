//! Branding for the requesting host

use std::sync::Arc;

use axum::{Extension, Json};
use hive_shared::BrandingRecord;

use crate::context::RequestContext;
use crate::error::ApiResult;

/// Branding of the tenant that owns the request host
pub async fn get_branding(
    Extension(ctx): Extension<Arc<RequestContext>>,
) -> ApiResult<Json<BrandingRecord>> {
    let brand = ctx.brand_for_request().await?;
    Ok(Json(brand.clone()))
}
