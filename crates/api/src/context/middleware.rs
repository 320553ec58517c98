//! Request context middleware

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use super::request::{RequestContext, ResolutionServices};

/// Attach a fresh [`RequestContext`] to the request.
///
/// Nothing is resolved here; handlers pull tenant, branding and session
/// lazily through the shared context.
pub async fn resolve_request_context(
    State(services): State<ResolutionServices>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let ctx = Arc::new(services.context_for(request.headers().clone()));
    tracing::debug!(host = %ctx.bare_host(), "Request context created");

    request.extensions_mut().insert(ctx);
    next.run(request).await
}
