//! Branding asset URL normalization

/// Normalize a stored asset URL.
///
/// - blank -> `None`
/// - `data:` URIs and absolute `http(s)://` URLs pass through unchanged
/// - anything else becomes root-relative (`logo.png` -> `/logo.png`)
pub fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    if url.starts_with("data:") || is_absolute_http(url) {
        return Some(url.to_string());
    }

    if url.starts_with('/') {
        Some(url.to_string())
    } else {
        Some(format!("/{url}"))
    }
}

/// Normalize an optional stored value
pub fn normalize_optional_url(raw: Option<&str>) -> Option<String> {
    raw.and_then(normalize_url)
}

/// Case-insensitive `^https?://`
fn is_absolute_http(url: &str) -> bool {
    let lower = url
        .get(..8)
        .unwrap_or(url)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
