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

//! Error types for theme parsing and style resolution.

use thiserror::Error;

/// Errors returned while building a [`Theme`](crate::Theme) or resolving a
/// button style against one.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The requested variant has no entry under `colors.button`.
    #[error("Unknown button variant: {0}")]
    UnknownVariant(String),

    /// `disabled` and `loading` hold state colors and cannot be selected.
    #[error("Reserved name cannot be used as a button variant: {0}")]
    ReservedVariant(String),

    #[error("Button variant name must not be empty")]
    EmptyVariant,

    /// Variant names double as class suffixes and cannot contain whitespace.
    #[error("Button variant name must not contain whitespace: {0:?}")]
    InvalidVariant(String),

    /// The theme has no `primary` variant, so defaulting is impossible.
    #[error("Theme is missing the default button variant `{0}`")]
    MissingDefaultVariant(&'static str),

    /// A design token resolved to an empty string.
    #[error("Theme token `{0}` is empty")]
    EmptyToken(String),

    /// The theme JSON could not be parsed.
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),
}
