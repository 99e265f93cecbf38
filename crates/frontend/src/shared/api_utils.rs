//! API utilities for frontend-backend communication
//!
//! The order-management endpoints are served from the same origin as the
//! page itself, so the base URL is taken directly from `window.location`.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/submit_selected_orders");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
