// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_wasm_bindgen::from_value as from_js_value;
use themed_button_types::Theme;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global a host page sets to override the built-in theme.
pub const THEME_GLOBAL: &str = "__APP_THEME";

/// Read the runtime theme from `window.__APP_THEME`.
///
/// `Ok(None)` when the page did not inject one; `Err` when it is present but
/// malformed or fails validation.
pub fn theme_config() -> Result<Option<Theme>, String> {
    let win = window().ok_or_else(|| "window is not available".to_string())?;
    let config =
        js_sys::Reflect::get(&win, &JsValue::from_str(THEME_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(None);
    }
    let theme = from_js_value::<Theme>(config)
        .map_err(|e| format!("Failed to parse {THEME_GLOBAL}: {e:?}"))?;
    theme
        .validate()
        .map_err(|e| format!("Invalid {THEME_GLOBAL}: {e}"))?;
    Ok(Some(theme))
}
