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

//! Gallery page showing every variant and state of the themed button.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use themed_button_types::Theme;
use themed_button_ui::components::button::Button;
use themed_button_ui::components::text::Text;
use themed_button_ui::components::theme_provider::ThemeProvider;
use themed_button_ui::constants::theme_config;
use themed_button_ui::context::{default_theme, ThemeCtx};
use yew::prelude::*;

/// How long the demo "Save" button stays in its loading state.
const SAVE_DEMO_MS: u32 = 2_000;

fn load_theme() -> ThemeCtx {
    match theme_config() {
        Ok(Some(theme)) => {
            log::info!("Using theme from window.__APP_THEME");
            Rc::new(theme)
        }
        Ok(None) => default_theme(),
        Err(e) => {
            log::error!("{e}; using the built-in theme");
            default_theme()
        }
    }
}

#[derive(Properties, PartialEq)]
struct VariantRowProps {
    theme: Rc<Theme>,
}

#[function_component(VariantRow)]
fn variant_row(props: &VariantRowProps) -> Html {
    html! {
        <section class="gallery-row">
            <Text tag="h2">{"Variants"}</Text>
            { for props.theme.variant_names().map(|name| html! {
                <Button key={name.to_string()} variant={name.to_string()} inline={true}>
                    { name.to_string() }
                </Button>
            }) }
        </section>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    let theme = use_memo((), |_| load_theme());
    let saving = use_state(|| false);

    let on_save = {
        let saving = saving.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Save clicked; showing loading state for {SAVE_DEMO_MS}ms");
            saving.set(true);
            let saving = saving.clone();
            Timeout::new(SAVE_DEMO_MS, move || saving.set(false)).forget();
        })
    };

    html! {
        <ThemeProvider theme={(*theme).clone()}>
            <main class="gallery">
                <VariantRow theme={(*theme).clone()} />
                <section class="gallery-row">
                    <Text tag="h2">{"States"}</Text>
                    <Button inline={true} disabled={true}>{"Disabled"}</Button>
                    <Button inline={true} loading={true}>{"Loading"}</Button>
                    <Button inline={true} variant="does-not-exist">{"Unknown variant"}</Button>
                </section>
                <section class="gallery-row">
                    <Text tag="h2">{"Full width"}</Text>
                    <Button
                        onclick={on_save}
                        loading={*saving}
                        button_type="button"
                        aria_label="Save changes"
                    >
                        {"Save"}
                    </Button>
                </section>
            </main>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Failed to initialise logger: {e}").into());
    }

    yew::Renderer::<Gallery>::new().render();
}
