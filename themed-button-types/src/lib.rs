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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Framework-agnostic building blocks for the themed button.
//!
//! Nothing in here touches the DOM: the theme model, variant validation,
//! style resolution and the loading-dot animation are plain data so they can
//! be unit tested natively and reused by any rendering layer.

pub mod animation;
pub mod css;
pub mod error;
pub mod state;
pub mod style;
pub mod stylesheet;
pub mod theme;

pub use animation::{AnimationSchedule, DotTransform, Keyframe, LoadingAnimation};
pub use css::Declarations;
pub use error::ThemeError;
pub use state::{ButtonVisualState, Variant};
pub use style::{ButtonStyle, ContentStyle, Interaction, Visibility, Width};
pub use theme::Theme;
