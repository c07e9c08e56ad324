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

//! Variant names and the per-render visual state of a button.

use std::fmt;

use crate::error::ThemeError;

/// Keys under `colors.button` that hold state colors rather than variants.
pub const RESERVED_KEYS: [&str; 2] = ["disabled", "loading"];

/// A named visual style bucket for the button, e.g. `primary`.
///
/// Construction rejects the reserved state keys and names containing
/// whitespace. Whether the theme actually defines the variant is only known
/// at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant(String);

impl Variant {
    pub const PRIMARY: &'static str = "primary";

    pub fn new(name: impl Into<String>) -> Result<Self, ThemeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ThemeError::EmptyVariant);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ThemeError::InvalidVariant(name));
        }
        if Self::is_reserved(&name) {
            return Err(ThemeError::ReservedVariant(name));
        }
        Ok(Self(name))
    }

    pub fn is_reserved(name: &str) -> bool {
        RESERVED_KEYS.contains(&name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_primary(&self) -> bool {
        self.0 == Self::PRIMARY
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self(Self::PRIMARY.to_string())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything that decides how a button looks on this render.
///
/// Derived from props every render and never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonVisualState {
    pub variant: Variant,
    pub inline: bool,
    pub disabled: bool,
    pub loading: bool,
}

impl ButtonVisualState {
    /// Build the state from optional props. A missing variant means `primary`.
    pub fn from_props(
        variant: Option<&str>,
        inline: bool,
        disabled: bool,
        loading: bool,
    ) -> Result<Self, ThemeError> {
        let variant = match variant {
            Some(name) => Variant::new(name)?,
            None => Variant::default(),
        };
        Ok(Self {
            variant,
            inline,
            disabled,
            loading,
        })
    }

    /// Like [`from_props`](Self::from_props) but an invalid variant name logs
    /// a warning and becomes `primary`.
    pub fn from_props_or_primary(
        variant: Option<&str>,
        inline: bool,
        disabled: bool,
        loading: bool,
    ) -> Self {
        Self::from_props(variant, inline, disabled, loading).unwrap_or_else(|err| {
            log::warn!("{err}; falling back to `{}`", Variant::PRIMARY);
            Self {
                variant: Variant::default(),
                inline,
                disabled,
                loading,
            }
        })
    }

    /// A loading button is never interactive.
    pub fn effective_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn overlay_visible(&self) -> bool {
        self.loading
    }
}
