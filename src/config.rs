//! Build-time configuration for the API client and navigation guard, with an
//! optional runtime override. The runtime config is read from
//! `window.MOVIZIO_CONFIG` (if present) so static deployments can point at a
//! different API without rebuilding. Configuration values are public; do not
//! store secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::util::guard::GuardPolicy;

pub const DEFAULT_API_BASE_URL: &str = "https://movizio.onrender.com/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub guard_policy: GuardPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            guard_policy: GuardPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then build-time environment, then runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        apply_overrides(
            &mut config,
            Overrides {
                api_base_url: option_env!("MOVIZIO_API_BASE_URL").and_then(normalize_value),
                timeout_ms: option_env!("MOVIZIO_API_TIMEOUT_MS").and_then(normalize_value),
                guard_policy: option_env!("MOVIZIO_GUARD_POLICY").and_then(normalize_value),
            },
        );
        if let Some(runtime) = runtime_overrides() {
            apply_overrides(&mut config, runtime);
        }
        log::debug!(
            "config loaded: api_base_url={} timeout_ms={} guard_policy={:?}",
            config.api_base_url,
            config.timeout.as_millis(),
            config.guard_policy
        );
        config
    }
}

#[derive(Default)]
struct Overrides {
    api_base_url: Option<String>,
    timeout_ms: Option<String>,
    guard_policy: Option<String>,
}

fn apply_overrides(config: &mut AppConfig, overrides: Overrides) {
    if let Some(value) = overrides.api_base_url {
        config.api_base_url = value;
    }
    if let Some(ms) = overrides.timeout_ms.and_then(|v| v.parse::<u64>().ok()).filter(|ms| *ms > 0) {
        config.timeout = Duration::from_millis(ms);
    }
    if let Some(policy) = overrides.guard_policy.as_deref().and_then(GuardPolicy::parse) {
        config.guard_policy = policy;
    }
}

#[cfg(feature = "csr")]
fn runtime_overrides() -> Option<Overrides> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MOVIZIO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(Overrides {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        timeout_ms: read_runtime_value(&object, "timeout_ms"),
        guard_policy: read_runtime_value(&object, "guard_policy"),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_overrides() -> Option<Overrides> {
    None
}

#[cfg(feature = "csr")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = value.as_string().or_else(|| value.as_f64().map(|n| n.to_string()))?;
    normalize_value(&text)
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
