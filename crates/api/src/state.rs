//! Shared application state

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::JwtSessionProvider;
use crate::config::Config;
use crate::context::ResolutionServices;
use crate::session::SessionResolver;
use crate::store::PgStore;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub resolution: ResolutionServices,
}

impl AppState {
    /// Wire the Postgres-backed resolvers
    pub fn new(pool: PgPool, config: Config) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        let provider = Arc::new(JwtSessionProvider::new(
            &config.session_jwt_secret,
            config.session_cookie_name.clone(),
            store.clone(),
        ));
        let resolution = ResolutionServices::from_store(
            store,
            &config.default_tenant_slug,
            SessionResolver::new(provider),
        );

        Self {
            pool,
            config: Arc::new(config),
            resolution,
        }
    }

    /// Resolvers used by the request context middleware
    pub fn resolution_services(&self) -> ResolutionServices {
        self.resolution.clone()
    }
}
