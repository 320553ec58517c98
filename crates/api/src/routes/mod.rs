//! API routes

pub mod branding;
pub mod health;
pub mod session;
pub mod shell;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    context::{resolve_request_context, ResolutionServices},
    error::ApiError,
    state::AppState,
};

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    Router::new()
        .merge(health_routes)
        .nest("/api/v1", tenant_routes(state.resolution_services()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes served on behalf of the tenant owning the request host.
///
/// Each request gets its own context; handlers share it through extensions.
pub fn tenant_routes<S>(services: ResolutionServices) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/branding", get(branding::get_branding))
        .route("/session", get(session::get_session))
        .route("/me", get(session::me))
        .route("/context", get(shell::get_context))
        .layer(middleware::from_fn_with_state(
            services,
            resolve_request_context,
        ))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
