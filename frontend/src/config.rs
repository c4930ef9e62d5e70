use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
    pub request_timeout_ms: Option<u32>,
    #[serde(default)]
    pub debug: bool,
}

/// Fully resolved settings. Every field has a value once `init` ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub time_zone: Option<Tz>,
    pub request_timeout_ms: u32,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_runtime(RuntimeConfig::default())
    }
}

impl Settings {
    pub fn from_runtime(cfg: RuntimeConfig) -> Self {
        let api_base_url = cfg
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let time_zone = cfg.time_zone.as_deref().and_then(parse_time_zone);
        let request_timeout_ms = cfg
            .request_timeout_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        Self {
            api_base_url,
            time_zone,
            request_timeout_ms,
            debug: cfg.debug,
        }
    }
}

fn parse_time_zone(raw: &str) -> Option<Tz> {
    match raw.trim().parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            log::warn!("ignoring unknown time zone in runtime config: {}", raw);
            None
        }
    }
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_object(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let read = |keys: &[&str]| -> Option<wasm_bindgen::JsValue> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
    };
    let cfg = RuntimeConfig {
        api_base_url: read(&["API_BASE_URL", "api_base_url"]).and_then(|v| v.as_string()),
        time_zone: read(&["TIME_ZONE", "time_zone"]).and_then(|v| v.as_string()),
        request_timeout_ms: read(&["REQUEST_TIMEOUT_MS", "request_timeout_ms"])
            .and_then(|v| v.as_f64())
            .map(|ms| ms as u32),
        debug: read(&["DEBUG", "debug"])
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    };
    Some(cfg)
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__RESERVAS_ENV (env.js) wins over window.__RESERVAS_CONFIG.
    read_global_object("__RESERVAS_ENV")
        .filter(|cfg| cfg.api_base_url.is_some())
        .or_else(|| read_global_object("__RESERVAS_CONFIG"))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> RuntimeConfig {
    if let Some(cfg) = snapshot_from_globals() {
        return cfg;
    }
    fetch_runtime_config().await.unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn await_settings() -> Settings {
    if let Some(cached) = SETTINGS.get() {
        return cached.clone();
    }
    let settings = Settings::from_runtime(load_runtime_config().await);
    SETTINGS.get_or_init(|| settings).clone()
}

pub async fn await_api_base_url() -> String {
    await_settings().await.api_base_url
}

/// Settings available synchronously; defaults until `init` resolved.
pub fn current() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Option<Tz> {
    current().time_zone
}

pub async fn init() -> Settings {
    await_settings().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_runtime_config_is_empty() {
        let settings = Settings::from_runtime(RuntimeConfig::default());
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert!(settings.time_zone.is_none());
        assert!(!settings.debug);
    }

    #[test]
    fn base_url_is_trimmed_and_time_zone_parsed() {
        let settings = Settings::from_runtime(RuntimeConfig {
            api_base_url: Some(" https://api.example.org/v1/ ".into()),
            time_zone: Some("America/Bogota".into()),
            request_timeout_ms: Some(0),
            debug: true,
        });
        assert_eq!(settings.api_base_url, "https://api.example.org/v1");
        assert_eq!(settings.time_zone, Some(chrono_tz::America::Bogota));
        assert_eq!(settings.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert!(settings.debug);
    }

    #[test]
    fn unknown_time_zone_falls_back_to_local_clock() {
        let settings = Settings::from_runtime(RuntimeConfig {
            time_zone: Some("Mars/Olympus".into()),
            ..RuntimeConfig::default()
        });
        assert!(settings.time_zone.is_none());
    }

    #[test]
    fn runtime_config_deserializes_partial_json() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"http://x/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://x/api"));
        assert!(cfg.request_timeout_ms.is_none());
    }
}
