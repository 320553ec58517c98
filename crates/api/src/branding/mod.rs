//! Tenant branding
//!
//! Resolves the title, logos and favicon shown by the dashboard for a tenant,
//! falling back to the global default row and then to a hardcoded record.

mod resolver;
mod url;

pub use resolver::{build_branding, BrandingResolver, BrandingSource, BRANDING_CHAIN};
pub use url::{normalize_optional_url, normalize_url};
