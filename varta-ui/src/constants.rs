/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use varta_client::{truthy, GateConfig};
use wasm_bindgen::JsValue;
use web_sys::window;

/// Runtime configuration injected by the page as `window.__APP_CONFIG`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "permissionProbeEnabled")]
    #[serde(default)]
    pub permission_probe_enabled: Option<String>,
    #[serde(rename = "anonymousName")]
    #[serde(default)]
    pub anonymous_name: Option<String>,
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    pub fn gate_config(&self) -> GateConfig {
        let defaults = GateConfig::default();
        GateConfig {
            probe_enabled: self
                .permission_probe_enabled
                .as_deref()
                .map(|flag| truthy(Some(flag)))
                .unwrap_or(defaults.probe_enabled),
            anonymous_name: self
                .anonymous_name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.anonymous_name),
        }
    }

    /// Unknown or missing levels fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(log::Level::Info)
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}
