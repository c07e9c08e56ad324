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

//! Loading overlay: a full-size layer holding three bouncing dots.
//!
//! The animation itself runs in the browser from the keyframes injected by
//! `GlobalStyles`; it starts when a dot mounts and stops when it unmounts.

use themed_button_types::animation::AnimationSchedule;
use themed_button_types::style::{
    loading_dot_declarations, loading_dots_declarations, loading_dots_wrapper_declarations,
};
use themed_button_types::stylesheet::{
    LOADING_DOTS_CLASS, LOADING_DOTS_WRAPPER_CLASS, LOADING_DOT_CLASS,
};
use yew::prelude::*;

use crate::context::use_theme;

#[derive(Properties, PartialEq)]
pub struct LoadingDotsProps {
    #[prop_or_default]
    pub children: Children,
}

/// Absolutely positioned layer covering its parent.
#[function_component(LoadingDots)]
pub fn loading_dots(props: &LoadingDotsProps) -> Html {
    html! {
        <div class={LOADING_DOTS_CLASS} style={loading_dots_declarations().to_inline_style()}>
            { for props.children.iter() }
        </div>
    }
}

/// Centers its children on a three-column grid.
#[function_component(LoadingDotsWrapper)]
pub fn loading_dots_wrapper(props: &LoadingDotsProps) -> Html {
    let theme = use_theme();
    let style = loading_dots_wrapper_declarations(&theme).to_inline_style();

    html! {
        <div class={LOADING_DOTS_WRAPPER_CLASS} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingDotProps {
    /// Start offset of this dot's bounce, in milliseconds.
    pub delay_ms: u32,
}

#[function_component(LoadingDot)]
pub fn loading_dot(props: &LoadingDotProps) -> Html {
    let theme = use_theme();
    let style = loading_dot_declarations(&theme, props.delay_ms).to_inline_style();

    html! {
        <div
            class={LOADING_DOT_CLASS}
            {style}
            data-delay-ms={props.delay_ms.to_string()}
            aria-hidden="true"
        ></div>
    }
}

/// The overlay a loading button shows: three dots on the fixed schedule.
#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <LoadingDots>
            <LoadingDotsWrapper>
                { for AnimationSchedule::DELAYS_MS.iter().map(|delay| html! {
                    <LoadingDot key={delay.to_string()} delay_ms={*delay} />
                }) }
            </LoadingDotsWrapper>
        </LoadingDots>
    }
}
