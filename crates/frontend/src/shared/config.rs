//! Runtime configuration of the dashboard.
//!
//! `config.toml` is served next to `index.html`. When it is missing or does
//! not parse, the default embedded in `contracts` is used.

use contracts::shared::config::{parse_config, DashboardConfig};
use gloo_net::http::Request;
use leptos::prelude::*;
use std::sync::OnceLock;

const CONFIG_PATH: &str = "/config.toml";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Fetch and parse `/config.toml`, falling back to the embedded default.
pub async fn load_config() -> DashboardConfig {
    match fetch_config().await {
        Ok(config) => {
            log::info!("Configuration loaded from {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            log::warn!("Using embedded configuration: {}", e);
            DashboardConfig::embedded()
        }
    }
}

async fn fetch_config() -> Result<DashboardConfig, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_config(&text).map_err(|e| format!("Invalid {}: {}", CONFIG_PATH, e))
}

/// Put the configuration into context and remember the API base URL.
pub fn provide_config(config: DashboardConfig) {
    let _ = API_BASE_URL.set(config.api.base_url.clone());
    provide_context(StoredValue::new(config));
}

pub fn use_config() -> DashboardConfig {
    use_context::<StoredValue<DashboardConfig>>()
        .expect("DashboardConfig not found in context")
        .get_value()
}

/// Base URL from `[api] base_url`, `None` when not configured.
pub fn configured_api_base() -> Option<&'static str> {
    API_BASE_URL
        .get()
        .map(String::as_str)
        .filter(|url| !url.is_empty())
}
