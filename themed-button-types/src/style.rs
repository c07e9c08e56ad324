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

//! Resolve a [`ButtonVisualState`] against a [`Theme`] into CSS.
//!
//! Every function here is pure: same theme and props in, same declarations
//! out. Rendering layers only attach the result to elements.

use crate::animation::{AnimationSchedule, LoadingAnimation};
use crate::css::Declarations;
use crate::error::ThemeError;
use crate::state::{ButtonVisualState, Variant};
use crate::stylesheet::{BACKGROUND_VAR, DISABLED_BACKGROUND_VAR, HOVER_BACKGROUND_VAR};
use crate::theme::{builtin_primary, Theme, VariantColors};

/// Opacity of the label while the button is disabled.
pub const DISABLED_CONTENT_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    /// Fill the container.
    #[default]
    Full,
    /// Shrink to the content (`inline` buttons).
    Auto,
}

impl Width {
    pub fn as_css(&self) -> &'static str {
        match self {
            Width::Full => "100%",
            Width::Auto => "auto",
        }
    }
}

/// Pointer or keyboard interaction the button is currently under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    Hover,
    Focus,
    Active,
}

/// Fully resolved look of the root button element.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub variant: Variant,
    pub background: String,
    pub hover_background: String,
    pub disabled_background: String,
    pub width: Width,
    pub padding: String,
    pub border_radius: String,
    pub border: String,
    pub disabled: bool,
}

impl ButtonStyle {
    /// Strict resolution: a variant missing from the theme is an error.
    pub fn resolve(theme: &Theme, state: &ButtonVisualState) -> Result<Self, ThemeError> {
        let colors = theme.variant_colors(&state.variant)?;
        Ok(Self::from_colors(theme, state, state.variant.clone(), colors))
    }

    /// Resolution that never fails: an unknown variant logs a warning and
    /// renders as `primary`. A theme without `primary` falls back to the
    /// built-in primary colors.
    pub fn resolve_or_primary(theme: &Theme, state: &ButtonVisualState) -> Self {
        match Self::resolve(theme, state) {
            Ok(style) => style,
            Err(err) => {
                log::warn!("{err}; falling back to `{}`", Variant::PRIMARY);
                let primary = Variant::default();
                match theme.variant_colors(&primary) {
                    Ok(colors) => Self::from_colors(theme, state, primary, colors),
                    Err(err) => {
                        log::error!("{err}; using built-in primary colors");
                        Self::from_colors(theme, state, primary, &builtin_primary())
                    }
                }
            }
        }
    }

    fn from_colors(
        theme: &Theme,
        state: &ButtonVisualState,
        variant: Variant,
        colors: &VariantColors,
    ) -> Self {
        Self {
            variant,
            background: colors.background.clone(),
            hover_background: colors.hover.background.clone(),
            disabled_background: theme.colors.button.disabled.background.clone(),
            width: if state.inline { Width::Auto } else { Width::Full },
            padding: format!("{} {}", theme.space.space12, theme.space.space40),
            border_radius: theme.radii.regular.clone(),
            border: theme.borders.default.clone(),
            disabled: state.effective_disabled(),
        }
    }

    /// Background shown under the given interaction. Disabled wins over all.
    pub fn background_for(&self, interaction: Interaction) -> &str {
        if self.disabled {
            return &self.disabled_background;
        }
        match interaction {
            Interaction::Idle => &self.background,
            Interaction::Hover | Interaction::Focus | Interaction::Active => {
                &self.hover_background
            }
        }
    }

    pub fn pointer_events(&self) -> &'static str {
        if self.disabled {
            "none"
        } else {
            "auto"
        }
    }

    /// Inline declarations for the root element. Backgrounds travel as custom
    /// properties so the global sheet's pseudo-class rules can pick them up.
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new()
            .with(BACKGROUND_VAR, &self.background)
            .with(HOVER_BACKGROUND_VAR, &self.hover_background)
            .with(DISABLED_BACKGROUND_VAR, &self.disabled_background)
            .with("position", "relative")
            .with("width", Width::Full.as_css())
            .with("border-radius", &self.border_radius)
            .with("padding", &self.padding)
            .with("border", &self.border)
            .with("border-color", "transparent")
            .with("text-align", "center");

        if self.width == Width::Auto {
            decls.push("width", Width::Auto.as_css());
        }
        if self.disabled {
            decls.push("pointer-events", self.pointer_events());
        }
        decls
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_css(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// Style of the label wrapper.
///
/// Loading hides the label but keeps its box so the button keeps its size.
/// Disabled dims it; the parent passes `disabled` down explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStyle {
    pub visibility: Visibility,
    pub opacity: f32,
}

impl ContentStyle {
    pub fn resolve(loading: bool, disabled: bool) -> Self {
        Self {
            visibility: if loading {
                Visibility::Hidden
            } else {
                Visibility::Visible
            },
            opacity: if disabled {
                DISABLED_CONTENT_OPACITY
            } else {
                1.0
            },
        }
    }

    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        if self.visibility == Visibility::Hidden {
            decls.push("visibility", self.visibility.as_css());
        }
        if self.opacity < 1.0 {
            decls.push("opacity", self.opacity.to_string());
        }
        decls
    }
}

/// Overlay covering the whole button, above the hidden label.
pub fn loading_dots_declarations() -> Declarations {
    Declarations::new()
        .with("position", "absolute")
        .with("top", "0")
        .with("left", "0")
        .with("width", "100%")
        .with("height", "100%")
}

/// Grid centering the dots inside the overlay.
pub fn loading_dots_wrapper_declarations(theme: &Theme) -> Declarations {
    Declarations::new()
        .with("height", "100%")
        .with("display", "grid")
        .with("justify-content", "center")
        .with("align-items", "center")
        .with("align-self", "center")
        .with(
            "grid-template-columns",
            format!("repeat({}, auto)", AnimationSchedule::DOT_COUNT),
        )
        .with("column-gap", &theme.space.space8)
}

pub fn loading_dot_declarations(theme: &Theme, delay_ms: u32) -> Declarations {
    Declarations::new()
        .with("width", &theme.sizes.icon.tiny)
        .with("height", &theme.sizes.icon.tiny)
        .with("background-color", &theme.colors.button.loading.foreground)
        .with("border-radius", &theme.radii.circle)
        .with("animation", LoadingAnimation::shorthand())
        .with("animation-fill-mode", LoadingAnimation::FILL_MODE)
        .with("animation-delay", format!("{delay_ms}ms"))
        .with("transform-origin", LoadingAnimation::TRANSFORM_ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_theme() -> Theme {
        Theme::from_json(
            r##"{
            "colors": { "button": {
                "primary":  { "background": "#000", "hover": { "background": "#111" } },
                "disabled": { "background": "#ccc" },
                "loading":  { "foreground": "#fff" }
            } },
            "radii":   { "regular": "4px", "circle": "50%" },
            "space":   { "space8": "8px", "space12": "12px", "space40": "40px" },
            "borders": { "default": "1px solid" },
            "sizes":   { "icon": { "tiny": "6px" } }
        }"##,
        )
        .unwrap()
    }

    fn state(
        variant: Option<&str>,
        inline: bool,
        disabled: bool,
        loading: bool,
    ) -> ButtonVisualState {
        ButtonVisualState::from_props(variant, inline, disabled, loading).unwrap()
    }

    #[test]
    fn test_primary_backgrounds() {
        let state = state(Some("primary"), false, false, false);
        let style = ButtonStyle::resolve(&black_theme(), &state).unwrap();
        assert_eq!(style.background_for(Interaction::Idle), "#000");
        for interaction in [Interaction::Hover, Interaction::Focus, Interaction::Active] {
            assert_eq!(style.background_for(interaction), "#111");
        }
        assert_eq!(style.pointer_events(), "auto");
    }

    #[test]
    fn test_omitted_variant_resolves_to_primary() {
        let state = state(None, false, false, false);
        let style = ButtonStyle::resolve(&black_theme(), &state).unwrap();
        assert_eq!(style.variant.as_str(), "primary");
        assert_eq!(style.background, "#000");
    }

    #[test]
    fn test_disabled_overrides_every_interaction() {
        for (disabled, loading) in [(true, false), (false, true), (true, true)] {
            let state = state(None, false, disabled, loading);
            let style = ButtonStyle::resolve(&black_theme(), &state).unwrap();
            assert!(style.disabled);
            assert_eq!(style.background_for(Interaction::Idle), "#ccc");
            assert_eq!(style.background_for(Interaction::Hover), "#ccc");
            assert_eq!(style.pointer_events(), "none");
            assert_eq!(style.declarations().get("pointer-events"), Some("none"));
        }
    }

    #[test]
    fn test_width_follows_inline() {
        let theme = black_theme();
        let full = ButtonStyle::resolve(&theme, &state(None, false, false, false)).unwrap();
        let inline = ButtonStyle::resolve(&theme, &state(None, true, false, false)).unwrap();

        assert_eq!(full.declarations().get("width"), Some("100%"));
        assert_eq!(inline.declarations().get("width"), Some("auto"));
    }

    #[test]
    fn test_layout_tokens() {
        let decls = ButtonStyle::resolve(&black_theme(), &state(None, false, false, false))
            .unwrap()
            .declarations();
        assert_eq!(decls.get("padding"), Some("12px 40px"));
        assert_eq!(decls.get("border-radius"), Some("4px"));
        assert_eq!(decls.get("border"), Some("1px solid"));
        assert_eq!(decls.get("border-color"), Some("transparent"));
        assert_eq!(decls.get("text-align"), Some("center"));
        assert_eq!(decls.get("--themed-button-background"), Some("#000"));
        assert_eq!(decls.get("--themed-button-hover-background"), Some("#111"));
        assert_eq!(decls.get("--themed-button-disabled-background"), Some("#ccc"));
        assert_eq!(decls.get("pointer-events"), None);
    }

    #[test]
    fn test_unknown_variant_fails_strictly() {
        let state = state(Some("ghost"), false, false, false);
        let result = ButtonStyle::resolve(&black_theme(), &state);
        assert!(matches!(result, Err(ThemeError::UnknownVariant(name)) if name == "ghost"));
    }

    #[test]
    fn test_unknown_variant_falls_back_to_primary() {
        let state = state(Some("ghost"), true, false, false);
        let style = ButtonStyle::resolve_or_primary(&black_theme(), &state);
        assert_eq!(style.variant.as_str(), "primary");
        assert_eq!(style.background, "#000");
        assert_eq!(style.width, Width::Auto);
    }

    #[test]
    fn test_theme_without_primary_uses_builtin_colors() {
        let mut theme = black_theme();
        theme.colors.button.variants.clear();
        let style = ButtonStyle::resolve_or_primary(&theme, &state(None, false, false, false));
        assert_eq!(style.background, builtin_primary().background);
        assert_eq!(style.disabled_background, "#ccc");
    }

    #[test]
    fn test_content_visibility_and_opacity() {
        let idle = ContentStyle::resolve(false, false);
        assert_eq!(idle.visibility, Visibility::Visible);
        assert!(idle.declarations().is_empty());

        let loading = ContentStyle::resolve(true, true);
        assert_eq!(loading.declarations().get("visibility"), Some("hidden"));
        assert_eq!(loading.declarations().get("opacity"), Some("0.5"));
        assert_eq!(loading.declarations().get("display"), None);

        let disabled = ContentStyle::resolve(false, true);
        assert_eq!(disabled.visibility, Visibility::Visible);
        assert_eq!(disabled.opacity, DISABLED_CONTENT_OPACITY);
    }

    #[test]
    fn test_overlay_covers_parent() {
        let decls = loading_dots_declarations();
        assert_eq!(decls.get("position"), Some("absolute"));
        assert_eq!(decls.get("top"), Some("0"));
        assert_eq!(decls.get("left"), Some("0"));
        assert_eq!(decls.get("width"), Some("100%"));
        assert_eq!(decls.get("height"), Some("100%"));
    }

    #[test]
    fn test_wrapper_is_three_column_grid() {
        let decls = loading_dots_wrapper_declarations(&black_theme());
        assert_eq!(decls.get("display"), Some("grid"));
        assert_eq!(decls.get("grid-template-columns"), Some("repeat(3, auto)"));
        assert_eq!(decls.get("column-gap"), Some("8px"));
    }

    #[test]
    fn test_dot_declarations() {
        let decls = loading_dot_declarations(&black_theme(), 175);
        assert_eq!(decls.get("width"), Some("6px"));
        assert_eq!(decls.get("height"), Some("6px"));
        assert_eq!(decls.get("background-color"), Some("#fff"));
        assert_eq!(decls.get("border-radius"), Some("50%"));
        assert_eq!(decls.get("animation-delay"), Some("175ms"));
        assert_eq!(decls.get("animation-fill-mode"), Some("both"));
        assert_eq!(decls.get("transform-origin"), Some("bottom"));

        let inline = decls.to_inline_style();
        let shorthand = inline.find("animation:").unwrap();
        let delay = inline.find("animation-delay:").unwrap();
        assert!(shorthand < delay, "shorthand would reset the delay");
    }
}
