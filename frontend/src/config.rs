use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIME_ZONE: Tz = Tz::UTC;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some()
    }

    /// Fills every missing field from `fallback`, keeping values already set.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            time_zone: self.time_zone.or(fallback.time_zone),
        }
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str(global)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &wasm_bindgen::JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> RuntimeConfig {
    // window.__ASSETDESK_ENV (env.js) wins over window.__ASSETDESK_CONFIG
    let env = RuntimeConfig {
        api_base_url: read_global_key("__ASSETDESK_ENV", &["API_BASE_URL", "api_base_url"]),
        time_zone: read_global_key("__ASSETDESK_ENV", &["TIME_ZONE", "time_zone"]),
    };
    let window_config = RuntimeConfig {
        api_base_url: read_global_key("__ASSETDESK_CONFIG", &["api_base_url", "API_BASE_URL"]),
        time_zone: read_global_key("__ASSETDESK_CONFIG", &["time_zone", "TIME_ZONE"]),
    };
    env.or(window_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json not available (status {})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

/// IANA zone the browser formats local dates in.
#[cfg(target_arch = "wasm32")]
fn browser_time_zone() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(
        &format.resolved_options(),
        &wasm_bindgen::JsValue::from_str("timeZone"),
    )
    .ok()
    .and_then(|zone| zone.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_time_zone() -> Option<String> {
    None
}

/// Globals win over `config.json`; the browser zone only fills a missing time zone.
fn merge_sources(
    from_globals: RuntimeConfig,
    from_file: Option<RuntimeConfig>,
    browser_zone: Option<String>,
) -> RuntimeConfig {
    let merged = match from_file {
        Some(from_file) => from_globals.or(from_file),
        None => from_globals,
    };
    merged.or(RuntimeConfig {
        api_base_url: None,
        time_zone: browser_zone,
    })
}

async fn resolve_runtime_config() -> RuntimeConfig {
    let from_globals = snapshot_from_globals();
    if from_globals.is_complete() {
        return from_globals;
    }
    merge_sources(from_globals, fetch_runtime_config().await, browser_time_zone())
}

/// Parses an IANA zone name, falling back to UTC for blank or unknown names.
pub fn parse_time_zone(name: Option<&str>) -> Tz {
    let Some(name) = name.map(str::trim).filter(|name| !name.is_empty()) else {
        return DEFAULT_TIME_ZONE;
    };
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            log::warn!("Unknown time zone '{}', falling back to UTC", name);
            DEFAULT_TIME_ZONE
        }
    }
}

pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(DEFAULT_TIME_ZONE)
}

fn cache(cfg: RuntimeConfig) -> String {
    let base_url = cfg
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(base_url);
    let _ = TIME_ZONE.set(parse_time_zone(cfg.time_zone.as_deref()));
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    cache(resolve_runtime_config().await)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!(
        "Using API base URL {} (time zone {})",
        base_url,
        current_time_zone()
    );
}
