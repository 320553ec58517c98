//! Application configuration

use std::env;

use crate::auth::DEFAULT_SESSION_COOKIE;
use crate::routing::DEFAULT_TENANT_SLUG;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,

    // Tenancy
    pub default_tenant_slug: String,

    // Sessions
    pub session_jwt_secret: String,
    pub session_cookie_name: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),

            // Database
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            run_migrations: env::var("RUN_MIGRATIONS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),

            // Tenancy
            default_tenant_slug: {
                let slug = env::var("DEFAULT_TENANT_SLUG")
                    .unwrap_or_else(|_| DEFAULT_TENANT_SLUG.to_string());
                if slug.trim().is_empty() {
                    return Err(ConfigError::Invalid("DEFAULT_TENANT_SLUG must not be empty"));
                }
                slug
            },

            // Sessions
            session_jwt_secret: {
                let secret = env::var("SESSION_JWT_SECRET")
                    .map_err(|_| ConfigError::Missing("SESSION_JWT_SECRET"))?;
                // Signing key must be cryptographically strong
                if secret.len() < 32 {
                    return Err(ConfigError::WeakSecret(
                        "SESSION_JWT_SECRET must be at least 32 characters",
                    ));
                }
                secret
            },
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.to_string()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Weak secret: {0}")]
    WeakSecret(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BIND_ADDRESS",
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "RUN_MIGRATIONS",
        "DEFAULT_TENANT_SLUG",
        "SESSION_JWT_SECRET",
        "SESSION_COOKIE_NAME",
    ];

    /// Helper to set required env vars for testing
    fn setup_minimal_config() {
        cleanup_config();
        env::set_var("DATABASE_URL", "postgres://test");
        env::set_var(
            "SESSION_JWT_SECRET",
            "test-session-secret-must-be-at-least-32-characters",
        );
    }

    /// Helper to clear env vars after tests
    fn cleanup_config() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        setup_minimal_config();

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.database_max_connections, 10);
        assert!(config.run_migrations);
        assert_eq!(config.default_tenant_slug, "central");
        assert_eq!(config.session_cookie_name, "hive_session");

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        setup_minimal_config();
        env::set_var("DEFAULT_TENANT_SLUG", "root");
        env::set_var("SESSION_COOKIE_NAME", "sid");
        env::set_var("DATABASE_MAX_CONNECTIONS", "not-a-number");

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_tenant_slug, "root");
        assert_eq!(config.session_cookie_name, "sid");
        assert_eq!(config.database_max_connections, 10);

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_missing_database_url() {
        setup_minimal_config();
        env::remove_var("DATABASE_URL");

        match Config::from_env() {
            Err(ConfigError::Missing("DATABASE_URL")) => {}
            other => panic!("Expected Missing error for DATABASE_URL, got: {:?}", other),
        }

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_weak_session_secret_rejected() {
        setup_minimal_config();
        env::set_var("SESSION_JWT_SECRET", "short");

        let result = Config::from_env();
        assert!(
            matches!(result, Err(ConfigError::WeakSecret(_))),
            "Short secret should return WeakSecret error"
        );

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_blank_default_slug_rejected() {
        setup_minimal_config();
        env::set_var("DEFAULT_TENANT_SLUG", "  ");

        assert!(matches!(Config::from_env(), Err(ConfigError::Invalid(_))));

        cleanup_config();
    }
}
