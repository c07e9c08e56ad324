// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for themed-button-ui component tests.
//
// Provides mount/cleanup helpers, a small fixed theme, and runtime theme
// injection so that individual test files stay focused on assertions rather
// than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::rc::Rc;

use themed_button_types::Theme;
use wasm_bindgen::JsCast;

/// Theme used across the component tests. Colors are chosen so assertions
/// can match them literally.
pub const TEST_THEME_JSON: &str = r##"{
    "colors": { "button": {
        "primary":  { "background": "#000", "hover": { "background": "#111" } },
        "danger":   { "background": "#d00", "hover": { "background": "#a00" } },
        "disabled": { "background": "#ccc" },
        "loading":  { "foreground": "#fff" }
    } },
    "radii":   { "regular": "4px", "circle": "50%" },
    "space":   { "space8": "8px", "space12": "12px", "space40": "40px" },
    "borders": { "default": "1px solid" },
    "sizes":   { "icon": { "tiny": "6px" } }
}"##;

pub fn test_theme() -> Rc<Theme> {
    Rc::new(Theme::from_json(TEST_THEME_JSON).unwrap())
}

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Query a single element, panicking with `what` when it is missing.
pub fn query(root: &web_sys::Element, selector: &str, what: &str) -> web_sys::Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("should have {what} ({selector})"))
}

/// The rendered `<button>` element.
pub fn button_element(root: &web_sys::Element) -> web_sys::HtmlButtonElement {
    query(root, "button.themed-button", "a themed button")
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap()
}

/// Computed value of a CSS property on `element`.
pub fn computed(element: &web_sys::Element, property: &str) -> String {
    gloo_utils::window()
        .get_computed_style(element)
        .unwrap()
        .expect("computed style")
        .get_property_value(property)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Runtime theme injection
// ---------------------------------------------------------------------------

/// Set `window.__APP_THEME` from a JSON string.
pub fn inject_theme_json(json: &str) {
    let value = js_sys::JSON::parse(json).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_THEME".into(), &value).unwrap();
}

/// Remove `window.__APP_THEME` so tests don't leak state.
pub fn remove_theme() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_THEME".into());
}
