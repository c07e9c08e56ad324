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
 */

//! Theme context.
//!
//! The theme is built once (from `window.__APP_THEME` or the defaults),
//! wrapped in an `Rc` and handed down the tree through Yew's
//! `ContextProvider`. Nothing mutates it afterwards.

use std::rc::Rc;

use themed_button_types::Theme;
use yew::prelude::*;

/// Context type carried by [`ThemeProvider`](crate::components::theme_provider::ThemeProvider).
pub type ThemeCtx = Rc<Theme>;

thread_local! {
    static DEFAULT_THEME: ThemeCtx = Rc::new(Theme::default());
}

/// Shared instance of the built-in theme.
pub fn default_theme() -> ThemeCtx {
    DEFAULT_THEME.with(Rc::clone)
}

/// The theme a component renders with, and whether a provider supplied it.
#[derive(Clone, PartialEq)]
pub struct ThemeScope {
    pub theme: ThemeCtx,
    /// `false` when no `ThemeProvider` is above the component, which also
    /// means nobody has injected the global stylesheet yet.
    pub provided: bool,
}

#[hook]
pub fn use_theme_scope() -> ThemeScope {
    match use_context::<ThemeCtx>() {
        Some(theme) => ThemeScope {
            theme,
            provided: true,
        },
        None => ThemeScope {
            theme: default_theme(),
            provided: false,
        },
    }
}

/// Read the ambient theme.
///
/// Components rendered outside a provider get the built-in theme instead of
/// failing. `StyledButton` injects the global stylesheet itself in that case,
/// so a lone `<Button>` still renders with its colors and animation.
#[hook]
pub fn use_theme() -> ThemeCtx {
    use_theme_scope().theme
}
