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

//! The loading-dot bounce.
//!
//! Each dot squashes vertically, stretches to full height and then lifts by
//! half its own height, 300ms per direction, alternating forever. The three
//! dots start 175ms apart which turns the bounce into a wave.
//!
//! Browsers run this declaratively from [`LoadingAnimation::keyframes_css`].
//! [`LoadingAnimation::sample`] evaluates the same tween at an arbitrary time
//! for hosts that drive animation from their own frame loop.

use std::fmt::Write;

/// One checkpoint of the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub percent: u8,
    pub scale_y: f64,
    pub translate_y_percent: f64,
}

pub const KEYFRAMES: [Keyframe; 4] = [
    Keyframe {
        percent: 0,
        scale_y: 0.6,
        translate_y_percent: 0.0,
    },
    Keyframe {
        percent: 40,
        scale_y: 0.8,
        translate_y_percent: 0.0,
    },
    Keyframe {
        percent: 60,
        scale_y: 1.0,
        translate_y_percent: 0.0,
    },
    Keyframe {
        percent: 100,
        scale_y: 1.0,
        translate_y_percent: -50.0,
    },
];

/// Start offsets of the three dots.
pub struct AnimationSchedule;

impl AnimationSchedule {
    pub const DOT_COUNT: usize = 3;
    pub const DELAYS_MS: [u32; Self::DOT_COUNT] = [0, 175, 350];

    pub fn delay_for(index: usize) -> Option<u32> {
        Self::DELAYS_MS.get(index).copied()
    }
}

/// Transform applied to a dot at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotTransform {
    pub scale_y: f64,
    pub translate_y_percent: f64,
}

impl DotTransform {
    pub fn to_css(&self) -> String {
        format!(
            "scaleY({}) translateY({}%)",
            self.scale_y, self.translate_y_percent
        )
    }
}

impl From<Keyframe> for DotTransform {
    fn from(k: Keyframe) -> Self {
        Self {
            scale_y: k.scale_y,
            translate_y_percent: k.translate_y_percent,
        }
    }
}

/// CSS `cubic-bezier()` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const EASE_OUT: CubicBezier = CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    fn curve(a1: f64, a2: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a1 + 3.0 * mt * t * t * a2 + t * t * t
    }

    fn curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * a1 + 6.0 * mt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Output progress for input progress `x` in `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton first, bisection when the slope is too flat to trust.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::curve(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return Self::curve(self.y1, self.y2, t);
            }
            let slope = Self::curve_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::curve(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::curve(self.y1, self.y2, t)
    }
}

/// The `load` animation shared by every dot.
pub struct LoadingAnimation;

impl LoadingAnimation {
    pub const NAME: &'static str = "themed-button-load";
    /// Length of one direction; a full there-and-back cycle is twice this.
    pub const DURATION_MS: u32 = 300;
    pub const ITERATION_COUNT: &'static str = "infinite";
    pub const DIRECTION: &'static str = "alternate";
    pub const TIMING_FUNCTION: &'static str = "ease-out";
    pub const FILL_MODE: &'static str = "both";
    pub const TRANSFORM_ORIGIN: &'static str = "bottom";

    /// Value for the CSS `animation` shorthand.
    pub fn shorthand() -> String {
        format!(
            "{} {}ms {} {} {}",
            Self::NAME,
            Self::DURATION_MS,
            Self::ITERATION_COUNT,
            Self::DIRECTION,
            Self::TIMING_FUNCTION
        )
    }

    pub fn keyframes_css() -> String {
        let mut css = format!("@keyframes {} {{", Self::NAME);
        for keyframe in KEYFRAMES {
            let _ = write!(
                css,
                " {}% {{ transform: {}; }}",
                keyframe.percent,
                DotTransform::from(keyframe).to_css()
            );
        }
        css.push_str(" }");
        css
    }

    /// Transform of a dot `elapsed_ms` after mount, given its start offset.
    ///
    /// Before the offset has elapsed the first keyframe holds (fill mode
    /// `both`). Odd iterations run the keyframes backwards. The timing
    /// function applies per keyframe segment, as in CSS.
    pub fn sample(elapsed_ms: f64, delay_ms: u32) -> DotTransform {
        let local = elapsed_ms - f64::from(delay_ms);
        if local <= 0.0 {
            return KEYFRAMES[0].into();
        }

        let duration = f64::from(Self::DURATION_MS);
        let iteration = (local / duration).floor();
        let fraction = (local - iteration * duration) / duration;
        let progress = if iteration as u64 % 2 == 1 {
            1.0 - fraction
        } else {
            fraction
        };

        Self::at_progress(progress)
    }

    fn at_progress(progress: f64) -> DotTransform {
        let progress = progress.clamp(0.0, 1.0);
        for pair in KEYFRAMES.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let start = f64::from(from.percent) / 100.0;
            let end = f64::from(to.percent) / 100.0;
            if progress <= end {
                let local = (progress - start) / (end - start);
                let eased = CubicBezier::EASE_OUT.ease(local);
                return DotTransform {
                    scale_y: lerp(from.scale_y, to.scale_y, eased),
                    translate_y_percent: lerp(
                        from.translate_y_percent,
                        to.translate_y_percent,
                        eased,
                    ),
                };
            }
        }
        KEYFRAMES[KEYFRAMES.len() - 1].into()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
