//! Runtime Configuration
//!
//! Deployment config is injected as a `window.__OPSHUB_CONFIG__` global by the
//! hosting page; anything missing falls back to compiled defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL all API paths are appended to
    pub api_base: String,
    /// Active-timer widget poll interval, seconds
    pub timer_poll_secs: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            timer_poll_secs: 5,
        }
    }
}

pub fn load() -> AppConfig {
    let Some(win) = web_sys::window() else {
        return AppConfig::default();
    };
    match js_sys::Reflect::get(&win, &JsValue::from_str("__OPSHUB_CONFIG__")) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => {
            serde_wasm_bindgen::from_value(raw).unwrap_or_else(|e| {
                web_sys::console::warn_1(
                    &format!("[CONFIG] ignoring invalid __OPSHUB_CONFIG__: {}", e).into(),
                );
                AppConfig::default()
            })
        }
        _ => AppConfig::default(),
    }
}
