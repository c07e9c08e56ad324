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

//! Installs a theme for every button below it.

use themed_button_types::stylesheet::stylesheet;
use yew::prelude::*;

use crate::context::{default_theme, ThemeCtx};

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Theme to provide. `None` uses the built-in theme.
    #[prop_or_default]
    pub theme: Option<ThemeCtx>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = props.theme.clone().unwrap_or_else(default_theme);

    use_effect_with(theme.clone(), |theme| {
        let variants: Vec<&str> = theme.variant_names().collect();
        log::debug!("Theme installed with variants: {}", variants.join(", "));
        || ()
    });

    html! {
        <ContextProvider<ThemeCtx> context={theme}>
            <GlobalStyles />
            { for props.children.iter() }
        </ContextProvider<ThemeCtx>>
    }
}

/// The shared `<style>` element: pseudo-class rules and the dot keyframes.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    let css = use_memo((), |_| stylesheet());

    html! {
        <style data-themed-button="global">{ (*css).clone() }</style>
    }
}
