//! Authentication backends for Hive

pub mod jwt;

pub use jwt::{JwtSessionProvider, SessionClaims, DEFAULT_SESSION_COOKIE};
