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

use themed_button_types::stylesheet::TEXT_CLASS;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextProps {
    /// Element to render, e.g. `span` inside a button or `p` for body copy.
    #[prop_or(AttrValue::Static("span"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Generic text wrapper rendered as whatever tag the caller asks for.
#[function_component(Text)]
pub fn text(props: &TextProps) -> Html {
    let class = classes!(TEXT_CLASS, props.class.clone());

    html! {
        <@{props.tag.to_string()} class={class}>
            { for props.children.iter() }
        </@>
    }
}
