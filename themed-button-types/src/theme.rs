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

//! Design tokens consumed by the button.
//!
//! The shape mirrors the JSON a host page injects:
//!
//! ```json
//! {
//!   "colors": { "button": {
//!     "primary":  { "background": "#000", "hover": { "background": "#111" } },
//!     "disabled": { "background": "#ccc" },
//!     "loading":  { "foreground": "#fff" }
//!   } },
//!   "radii":   { "regular": "8px", "circle": "50%" },
//!   "space":   { "space8": "8px", "space12": "12px", "space40": "40px" },
//!   "borders": { "default": "1px solid" },
//!   "sizes":   { "icon": { "tiny": "6px" } }
//! }
//! ```
//!
//! A theme is never mutated after construction. Build one with
//! [`Theme::from_json`] (parse + validate) or start from [`Theme::default`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::state::Variant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: Colors,
    pub radii: Radii,
    pub space: Space,
    pub borders: Borders,
    pub sizes: Sizes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    pub button: ButtonPalette,
}

/// Colors under `colors.button`.
///
/// `disabled` and `loading` are state colors; every other key is a
/// selectable variant and lands in `variants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonPalette {
    pub disabled: DisabledColors,
    pub loading: LoadingColors,
    #[serde(flatten)]
    pub variants: BTreeMap<String, VariantColors>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantColors {
    pub background: String,
    pub hover: HoverColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverColors {
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisabledColors {
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingColors {
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radii {
    pub regular: String,
    pub circle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub space8: String,
    pub space12: String,
    pub space40: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sizes {
    pub icon: IconSizes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSizes {
    pub tiny: String,
}

impl Theme {
    /// Parse a theme from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Check the invariants every renderable theme must hold: the default
    /// variant exists and no token is blank.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if !self.colors.button.variants.contains_key(Variant::PRIMARY) {
            return Err(ThemeError::MissingDefaultVariant(Variant::PRIMARY));
        }

        for (name, colors) in &self.colors.button.variants {
            // Keys must be valid variant names. Reserved ones are consumed by
            // their own fields, but a hand-built theme can still smuggle one in.
            Variant::new(name.as_str())?;
            require_token(
                &format!("colors.button.{name}.background"),
                &colors.background,
            )?;
            require_token(
                &format!("colors.button.{name}.hover.background"),
                &colors.hover.background,
            )?;
        }

        let fixed = [
            (
                "colors.button.disabled.background",
                &self.colors.button.disabled.background,
            ),
            (
                "colors.button.loading.foreground",
                &self.colors.button.loading.foreground,
            ),
            ("radii.regular", &self.radii.regular),
            ("radii.circle", &self.radii.circle),
            ("space.space8", &self.space.space8),
            ("space.space12", &self.space.space12),
            ("space.space40", &self.space.space40),
            ("borders.default", &self.borders.default),
            ("sizes.icon.tiny", &self.sizes.icon.tiny),
        ];
        for (path, value) in fixed {
            require_token(path, value)?;
        }
        Ok(())
    }

    /// Look up the colors of a variant. Unknown variants are an error, never
    /// a silent fallback.
    pub fn variant_colors(&self, variant: &Variant) -> Result<&VariantColors, ThemeError> {
        self.colors
            .button
            .variants
            .get(variant.as_str())
            .ok_or_else(|| ThemeError::UnknownVariant(variant.as_str().to_string()))
    }

    /// Names of every selectable variant, in sorted order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.colors.button.variants.keys().map(String::as_str)
    }
}

fn require_token(path: &str, value: &str) -> Result<(), ThemeError> {
    if value.trim().is_empty() {
        Err(ThemeError::EmptyToken(path.to_string()))
    } else {
        Ok(())
    }
}

fn variant(background: &str, hover: &str) -> VariantColors {
    VariantColors {
        background: background.to_string(),
        hover: HoverColors {
            background: hover.to_string(),
        },
    }
}

/// Colors of the built-in `primary` variant, also used when a theme cannot
/// resolve any variant at all.
pub(crate) fn builtin_primary() -> VariantColors {
    variant("#1f6feb", "#1858c4")
}

impl Default for Theme {
    fn default() -> Self {
        let mut variants = BTreeMap::new();
        variants.insert(Variant::PRIMARY.to_string(), builtin_primary());
        variants.insert("secondary".to_string(), variant("#e7ecf3", "#d5dde8"));
        variants.insert("danger".to_string(), variant("#d1242f", "#a40e26"));

        Self {
            colors: Colors {
                button: ButtonPalette {
                    disabled: DisabledColors {
                        background: "#c8ced8".to_string(),
                    },
                    loading: LoadingColors {
                        foreground: "#ffffff".to_string(),
                    },
                    variants,
                },
            },
            radii: Radii {
                regular: "8px".to_string(),
                circle: "50%".to_string(),
            },
            space: Space {
                space8: "8px".to_string(),
                space12: "12px".to_string(),
                space40: "40px".to_string(),
            },
            borders: Borders {
                default: "1px solid".to_string(),
            },
            sizes: Sizes {
                icon: IconSizes {
                    tiny: "6px".to_string(),
                },
            },
        }
    }
}
