//! Request-scoped tenant and identity resolution
//!
//! Every inbound request gets its own [`RequestContext`], built by
//! [`resolve_request_context`] and shared through request extensions.

mod memo;
mod middleware;
mod request;

pub use memo::RequestMemo;
pub use middleware::resolve_request_context;
pub use request::{RequestContext, ResolutionServices};
