// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Tuned rendering constants
//!
//! Every empirically tuned number the engine consumes lives here under a
//! name: shade-factor ramps per palette bucket, the alpha levels of relief,
//! etch and glow strokes, and the pixel periods of the overlay effects.
//! The values are visually tuned; tests validate range and monotonicity,
//! never derivation.

use super::palette::Bucket;

/// Bumped whenever a tuned value changes
pub const TUNE_VERSION: u32 = 3;

/// Number of entries in every bucket's shade ramp
pub const RAMP_LEN: usize = 8;

/// Ramp index whose factor is 1.0 (the unshaded base tone)
pub const BASE_SHADE: usize = 3;

/// Per-bucket shade factor sequences
///
/// Each sequence is monotone non-increasing, runs lightest to darkest and
/// passes through 1.0 at [`BASE_SHADE`].
pub const fn ramp_factors(bucket: Bucket) -> &'static [f32; RAMP_LEN] {
    match bucket {
        Bucket::Background => &[1.20, 1.10, 1.04, 1.00, 0.95, 0.90, 0.82, 0.70],
        Bucket::Button => &[1.18, 1.10, 1.04, 1.00, 0.93, 0.85, 0.76, 0.62],
        Bucket::Highlight => &[1.30, 1.16, 1.08, 1.00, 0.94, 0.86, 0.78, 0.66],
        Bucket::Focus => &[1.22, 1.12, 1.05, 1.00, 0.92, 0.84, 0.74, 0.60],
        Bucket::MouseOver => &[1.26, 1.14, 1.06, 1.00, 0.94, 0.87, 0.79, 0.68],
        Bucket::Menu => &[1.15, 1.08, 1.03, 1.00, 0.96, 0.90, 0.83, 0.72],
        Bucket::Tooltip => &[1.12, 1.06, 1.02, 1.00, 0.97, 0.93, 0.87, 0.78],
        Bucket::Selected => &[1.24, 1.13, 1.06, 1.00, 0.93, 0.85, 0.75, 0.63],
        Bucket::Sidebar => &[1.14, 1.07, 1.02, 1.00, 0.95, 0.89, 0.81, 0.70],
        Bucket::Slider => &[1.21, 1.11, 1.05, 1.00, 0.93, 0.86, 0.77, 0.64],
        Bucket::Progress => &[1.25, 1.14, 1.07, 1.00, 0.94, 0.87, 0.78, 0.66],
        Bucket::Check => &[1.17, 1.09, 1.03, 1.00, 0.94, 0.88, 0.80, 0.69],
    }
}

/// Ramp index of the depressed (active) tone
pub const ACTIVE_SHADE: usize = 5;
/// Ramp index of the prelight (mouse-over) tone
pub const PRELIGHT_SHADE: usize = 2;
/// Ramp index of the selected tone
pub const SELECTED_SHADE: usize = 2;
/// Ramp index of the border stroke tone
pub const BORDER_SHADE: usize = 6;
/// Ramp index used by the `Light` border profile
pub const BORDER_LIGHT_SHADE: usize = 4;

/// Shade factor of the light (top-left) relief stroke
pub const RELIEF_LIGHT_FACTOR: f32 = 1.22;
/// Shade factor of the dark (bottom-right) relief stroke
pub const RELIEF_DARK_FACTOR: f32 = 0.82;

/// Amount by which insensitive widgets are tinted toward the mid tone
pub const INSENSITIVE_TINT: f32 = 0.4;

/// Inverted-shade factor for sunken fills (troughs); applied negated
pub const SUNKEN_FILL_FACTOR: f32 = 0.95;

/// Alpha of the bottom-right pass of a sunken frame border
pub const SUNKEN_BORDER_LOWER_ALPHA: f32 = 0.4;

/// Width of the etch ring: the per-side inset between the requested rect
/// and the rect every later stage draws in when the etch overlay applies
pub const ETCH_INSET: f32 = 1.0;

/// Alpha of the dark (outer) etch stroke
pub const ETCH_DARK_ALPHA: f32 = 0.12;
/// Alpha of the light etch stroke drawn 1px further out
pub const ETCH_LIGHT_ALPHA: f32 = 0.48;
/// Alpha of the glow stroke (focus / mouse-over indicator)
pub const GLOW_ALPHA: f32 = 0.65;

/// Alpha of the decorative shine overlay on circular widgets
pub const SHINE_ALPHA: f32 = 0.35;
/// Alpha of coloured mouse-over segment overlays
pub const MOUSE_OVER_ALPHA: f32 = 0.4;

/// Pixel span over which a faded line's alpha ramps to zero at each end
pub const FADE_SPAN: f32 = 4.0;
/// Pixel period of dot-pattern fills
pub const DOT_PERIOD: f32 = 4.0;
/// Pixel period of striped fills
pub const STRIPE_PERIOD: f32 = 8.0;
/// Alpha of the stripe bands laid over a striped fill
pub const STRIPE_ALPHA: f32 = 0.25;
/// Spacing between the parallel strokes of a dash group
pub const DASH_SPACING: f32 = 3.0;
/// Length of each stroke in a dash group
pub const DASH_LEN: f32 = 6.0;
/// Strokes per dash-group decoration (splitters, slider thumbs)
pub const DASH_COUNT: u32 = 3;
