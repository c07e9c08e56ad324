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

//! Class names and the one global stylesheet shared by every button.
//!
//! Inline styles cannot express pseudo-classes or keyframes, so those live
//! here. Per-instance values (variant colors) reach the sheet through CSS
//! custom properties that `StyledButton` sets inline.

use crate::animation::LoadingAnimation;

pub const BUTTON_CLASS: &str = "themed-button";
pub const CONTENT_CLASS: &str = "themed-button__content";
pub const TEXT_CLASS: &str = "themed-text";
pub const LOADING_DOTS_CLASS: &str = "themed-button__loading-dots";
pub const LOADING_DOTS_WRAPPER_CLASS: &str = "themed-button__loading-dots-wrapper";
pub const LOADING_DOT_CLASS: &str = "themed-button__loading-dot";

pub const BACKGROUND_VAR: &str = "--themed-button-background";
pub const HOVER_BACKGROUND_VAR: &str = "--themed-button-hover-background";
pub const DISABLED_BACKGROUND_VAR: &str = "--themed-button-disabled-background";

/// Render the global stylesheet.
pub fn stylesheet() -> String {
    format!(
        ".{button} {{ background: var({bg}); }}\n\
         .{button}:hover, .{button}:focus, .{button}:active {{ background: var({hover}); }}\n\
         .{button}:disabled {{ background: var({disabled}); pointer-events: none; }}\n\
         {keyframes}\n",
        button = BUTTON_CLASS,
        bg = BACKGROUND_VAR,
        hover = HOVER_BACKGROUND_VAR,
        disabled = DISABLED_BACKGROUND_VAR,
        keyframes = LoadingAnimation::keyframes_css(),
    )
}
