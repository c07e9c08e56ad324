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

//! Themed button with an animated loading state.
//!
//! [`Button`] is the public entry point. [`StyledButton`] and [`Content`] are
//! exported for callers composing their own layouts.

use themed_button_types::state::ButtonVisualState;
use themed_button_types::style::{ButtonStyle, ContentStyle};
use themed_button_types::stylesheet::{BUTTON_CLASS, CONTENT_CLASS};
use yew::prelude::*;

use crate::components::loading_dots::LoadingIndicator;
use crate::components::text::Text;
use crate::components::theme_provider::GlobalStyles;
use crate::context::use_theme_scope;

// =============================================================================
// StyledButton
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct StyledButtonProps {
    /// Theme variant; `primary` when unset.
    #[prop_or_default]
    pub variant: Option<AttrValue>,
    /// Size to content instead of filling the container.
    #[prop_or_default]
    pub inline: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Native `type` attribute (`button`, `submit`, `reset`).
    #[prop_or_default]
    pub button_type: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub form: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// The root `<button>` element.
///
/// Variant colors are resolved from the ambient theme; an unknown variant is
/// logged and rendered as `primary`. Outside a `ThemeProvider` the button
/// brings its own copy of the global stylesheet.
#[function_component(StyledButton)]
pub fn styled_button(props: &StyledButtonProps) -> Html {
    let scope = use_theme_scope();
    let state = ButtonVisualState::from_props_or_primary(
        props.variant.as_deref(),
        props.inline,
        props.disabled,
        false,
    );
    let style = ButtonStyle::resolve_or_primary(&scope.theme, &state);

    let class = classes!(
        BUTTON_CLASS,
        format!("{BUTTON_CLASS}--{}", style.variant),
        props.inline.then(|| format!("{BUTTON_CLASS}--inline")),
        props.class.clone()
    );

    html! {
        <>
        if !scope.provided {
            <GlobalStyles />
        }
        <button
            {class}
            style={style.declarations().to_inline_style()}
            disabled={style.disabled}
            data-variant={style.variant.to_string()}
            type={props.button_type.clone()}
            id={props.id.clone()}
            title={props.title.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            form={props.form.clone()}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
        </>
    }
}

// =============================================================================
// Content
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    /// Hide the label while keeping its box, so the button does not resize.
    #[prop_or_default]
    pub loading: bool,
    /// Dim the label. Threaded down from the button's effective disabled state.
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Content)]
pub fn content(props: &ContentProps) -> Html {
    let style = ContentStyle::resolve(props.loading, props.disabled)
        .declarations()
        .to_inline_style();

    html! {
        <div class={CONTENT_CLASS} {style}>
            { for props.children.iter() }
        </div>
    }
}

// =============================================================================
// Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: Option<AttrValue>,
    #[prop_or_default]
    pub inline: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Show the dots and block interaction. Implies disabled.
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub button_type: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub form: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let state = ButtonVisualState::from_props_or_primary(
        props.variant.as_deref(),
        props.inline,
        props.disabled,
        props.loading,
    );
    let disabled = state.effective_disabled();
    // Already validated, so StyledButton does not warn a second time.
    let variant = AttrValue::from(state.variant.to_string());

    html! {
        <StyledButton
            {variant}
            inline={state.inline}
            {disabled}
            onclick={props.onclick.clone()}
            button_type={props.button_type.clone()}
            id={props.id.clone()}
            class={props.class.clone()}
            title={props.title.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            form={props.form.clone()}
            aria_label={props.aria_label.clone()}
        >
            <Content loading={state.loading} {disabled}>
                <Text tag="span">{ for props.children.iter() }</Text>
            </Content>
            if state.overlay_visible() {
                <LoadingIndicator />
            }
        </StyledButton>
    }
}
