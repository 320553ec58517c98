//! Current session endpoints

use std::sync::Arc;

use axum::{Extension, Json};
use hive_shared::UserRecord;

use crate::context::RequestContext;
use crate::error::ApiResult;
use crate::session::SessionResult;

/// Session and user for the request; both `null` when anonymous
pub async fn get_session(Extension(ctx): Extension<Arc<RequestContext>>) -> Json<SessionResult> {
    Json(ctx.current_session().await.clone())
}

/// The authenticated user (401 when anonymous)
pub async fn me(Extension(ctx): Extension<Arc<RequestContext>>) -> ApiResult<Json<UserRecord>> {
    let user = ctx.require_user().await?;
    Ok(Json(user.clone()))
}
