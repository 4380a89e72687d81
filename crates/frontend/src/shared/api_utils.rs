//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::configured_api_base;

/// Get the base URL for API requests
///
/// Uses `[api] base_url` from the configuration when set, otherwise builds
/// it from the current window location with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://api.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = configured_api_base() {
        return base.to_string();
    }
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

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
