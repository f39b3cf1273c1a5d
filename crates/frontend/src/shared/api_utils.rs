//! API utilities for talking to the console API server
//!
//! Provides helpers for constructing API URLs.

/// Get the base URL for API requests
///
/// Built from the current window location, using port 3000 for the API
/// server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `?appNamespace=<ns>` suffix, empty when no namespace is given
pub fn namespace_query(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("?appNamespace={}", urlencoding::encode(namespace))
    }
}
