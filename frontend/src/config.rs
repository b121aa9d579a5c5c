use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::storage::window;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5699/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = window().ok()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    // window.__EMS_ENV (env.js) wins over window.__EMS_CONFIG
    read_global_key("__EMS_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__EMS_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = window().ok()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Resolves a stored profile image name against the API host's upload folder.
pub fn asset_url(base_url: &str, file_name: &str) -> String {
    let base = normalize_base_url(base_url);
    let host = base.strip_suffix("/api").unwrap_or(&base);
    format!("{}/uploads/{}", host, file_name.trim_start_matches('/'))
}

pub fn cached_api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config().await.and_then(|cfg| cfg.api_base_url) {
        return cache_base_url(&url);
    }
    log::warn!(
        "No runtime API base URL configured, falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url("  https://ems.example.com/api// "),
            "https://ems.example.com/api"
        );
        assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn asset_url_replaces_api_suffix_with_uploads() {
        assert_eq!(
            asset_url("http://localhost:5699/api", "avatar.png"),
            "http://localhost:5699/uploads/avatar.png"
        );
        assert_eq!(
            asset_url("https://ems.example.com/", "/a.jpg"),
            "https://ems.example.com/uploads/a.jpg"
        );
    }

    #[test]
    fn runtime_config_deserializes_optional_base_url() {
        let cfg: RuntimeConfig = serde_json::from_str(r#"{"api_base_url":"http://x/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://x/api"));
        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
