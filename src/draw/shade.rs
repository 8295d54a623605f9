// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour shading
//!
//! A [`ShadeModel`] maps `(colour, scalar factor)` to a new colour through a
//! chosen colour space. Factors above 1 lighten, factors below 1 darken; a
//! negative factor selects the inverted variant (the lightness axis is
//! flipped before scaling), used by some sunken elements.
//!
//! All operations here are total: inputs outside the documented ranges are
//! clamped, never rejected.

use super::color::Rgba;

/// Tolerance below which a shade factor is treated as the identity
const IDENTITY_EPS: f32 = 1e-6;

/// Colour space used by [`shade`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShadeModel {
    /// Direct per-channel multiplication
    Simple,
    /// Scale lightness in HSL space
    #[default]
    Hsl,
    /// Scale value in HSV space
    Hsv,
    /// Scale luma, preserving chroma offsets
    Hcy,
}

/// A shading request: scalar factor plus colour-space model
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadeSpec {
    pub factor: f32,
    pub model: ShadeModel,
}

impl ShadeSpec {
    /// Construct
    #[inline]
    pub fn new(factor: f32, model: ShadeModel) -> Self {
        ShadeSpec { factor, model }
    }

    /// Apply to a base colour
    #[inline]
    pub fn apply(self, base: Rgba) -> Rgba {
        shade(base, self)
    }
}

/// Shade `base` by `spec.factor` under `spec.model`
///
/// `factor == 1` is the identity (within float tolerance). A negative factor
/// flips the lightness axis before scaling by `|factor|`. The alpha
/// component is never modified.
pub fn shade(base: Rgba, spec: ShadeSpec) -> Rgba {
    let mut factor = spec.factor;
    if (factor - 1.0).abs() <= IDENTITY_EPS {
        return base;
    }

    let mut c = base;
    if factor < 0.0 {
        factor = -factor;
        c = invert_lightness(c, spec.model);
        if (factor - 1.0).abs() <= IDENTITY_EPS {
            return c;
        }
    }

    match spec.model {
        ShadeModel::Simple => c.multiply(factor),
        ShadeModel::Hsl => {
            let (h, s, l) = rgb_to_hsl(c);
            hsl_to_rgb(h, s, (l * factor).clamp(0.0, 1.0), c.a)
        }
        ShadeModel::Hsv => {
            let (h, s, v) = rgb_to_hsv(c);
            hsv_to_rgb(h, s, (v * factor).clamp(0.0, 1.0), c.a)
        }
        ShadeModel::Hcy => {
            let y = c.luma();
            let delta = (y * factor).clamp(0.0, 1.0) - y;
            Rgba::rgba(c.r + delta, c.g + delta, c.b + delta, c.a).clamp()
        }
    }
}

/// Channel-wise linear interpolation from `c1` (bias 0) to `c2` (bias 1)
///
/// `bias` is clamped to `[0, 1]` at the boundary: `bias ≤ 0` yields `c1`
/// exactly and `bias ≥ 1` yields `c2` exactly.
pub fn mix(c1: Rgba, c2: Rgba, bias: f32) -> Rgba {
    if bias <= 0.0 || bias.is_nan() {
        return c1;
    }
    if bias >= 1.0 {
        return c2;
    }
    let lerp = |a: f32, b: f32| a + (b - a) * bias;
    Rgba::rgba(
        lerp(c1.r, c2.r),
        lerp(c1.g, c2.g),
        lerp(c1.b, c2.b),
        lerp(c1.a, c2.a),
    )
}

/// Move `c` toward black by `amount ∈ [0, 1]`
///
/// Alpha is preserved, scaled by `alpha_keep`.
pub fn darken(c: Rgba, amount: f32, alpha_keep: f32) -> Rgba {
    let amount = amount.clamp(0.0, 1.0);
    let keep = 1.0 - amount;
    Rgba::rgba(
        c.r * keep,
        c.g * keep,
        c.b * keep,
        c.a * alpha_keep.clamp(0.0, 1.0),
    )
}

/// Move `c` toward white by `amount ∈ [0, 1]`
///
/// Alpha is preserved, scaled by `alpha_keep`.
pub fn lighten(c: Rgba, amount: f32, alpha_keep: f32) -> Rgba {
    let amount = amount.clamp(0.0, 1.0);
    Rgba::rgba(
        c.r + (1.0 - c.r) * amount,
        c.g + (1.0 - c.g) * amount,
        c.b + (1.0 - c.b) * amount,
        c.a * alpha_keep.clamp(0.0, 1.0),
    )
}

/// Shift `c` toward `tint`'s hue while preserving `c`'s perceived luma
///
/// Unlike [`mix`] this is non-symmetric: the result keeps `c`'s luminance
/// (and alpha), taking only chromatic content from `tint`. Used for
/// disabled/inactive contrast effects.
pub fn tint(c: Rgba, tint: Rgba, amount: f32) -> Rgba {
    let amount = amount.clamp(0.0, 1.0);
    if amount == 0.0 {
        return c;
    }
    let mixed = mix(c, tint, amount);
    let target = c.luma();
    let got = mixed.luma();
    let scaled = if got > 1e-5 {
        mixed.multiply(target / got)
    } else {
        Rgba::ga(target, mixed.a)
    };
    scaled.with_alpha(c.a).clamp()
}

fn invert_lightness(c: Rgba, model: ShadeModel) -> Rgba {
    match model {
        ShadeModel::Simple => Rgba::rgba(1.0 - c.r, 1.0 - c.g, 1.0 - c.b, c.a),
        ShadeModel::Hsl => {
            let (h, s, l) = rgb_to_hsl(c);
            hsl_to_rgb(h, s, 1.0 - l, c.a)
        }
        ShadeModel::Hsv => {
            let (h, s, v) = rgb_to_hsv(c);
            hsv_to_rgb(h, s, 1.0 - v, c.a)
        }
        ShadeModel::Hcy => {
            let y = c.luma();
            let delta = (1.0 - y) - y;
            Rgba::rgba(c.r + delta, c.g + delta, c.b + delta, c.a).clamp()
        }
    }
}

/// Convert to (hue ∈ [0, 6), saturation, lightness)
fn rgb_to_hsl(c: Rgba) -> (f32, f32, f32) {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let l = 0.5 * (max + min);
    if max <= min {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = hue_sextant(c, max, d);
    (h, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32, a: f32) -> Rgba {
    if s <= 0.0 {
        return Rgba::ga(l, a);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgba::rgba(
        hue_channel(p, q, h + 2.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 2.0),
        a,
    )
    .clamp()
}

fn hue_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 6.0;
    } else if t >= 6.0 {
        t -= 6.0;
    }
    if t < 1.0 {
        p + (q - p) * t
    } else if t < 3.0 {
        q
    } else if t < 4.0 {
        p + (q - p) * (4.0 - t)
    } else {
        p
    }
}

/// Convert to (hue ∈ [0, 6), saturation, value)
fn rgb_to_hsv(c: Rgba) -> (f32, f32, f32) {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    if max <= min {
        return (0.0, 0.0, max);
    }
    let d = max - min;
    (hue_sextant(c, max, d), d / max, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32, a: f32) -> Rgba {
    if s <= 0.0 {
        return Rgba::ga(v, a);
    }
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgba::rgba(r, g, b, a).clamp()
}

fn hue_sextant(c: Rgba, max: f32, d: f32) -> f32 {
    let h = if max == c.r {
        (c.g - c.b) / d
    } else if max == c.g {
        (c.b - c.r) / d + 2.0
    } else {
        (c.r - c.g) / d + 4.0
    };
    if h < 0.0 { h + 6.0 } else { h }
}

#[cfg(test)]
mod test {
    use super::*;

    const MODELS: [ShadeModel; 4] = [
        ShadeModel::Simple,
        ShadeModel::Hsl,
        ShadeModel::Hsv,
        ShadeModel::Hcy,
    ];

    fn in_range(c: Rgba) -> bool {
        let ok = |x: f32| (0.0..=1.0).contains(&x);
        ok(c.r) && ok(c.g) && ok(c.b) && ok(c.a)
    }

    #[test]
    fn channels_stay_in_range() {
        let base = Rgba::rgb(0.3, 0.8, 0.1);
        let mut factor = -0.95f32;
        while factor <= 1.0 {
            for model in MODELS {
                let c = shade(base, ShadeSpec::new(factor, model));
                assert!(in_range(c), "factor {factor} model {model:?}: {c:?}");
            }
            factor += 0.05;
        }
    }

    #[test]
    fn factor_one_is_identity() {
        let base = Rgba::rgb(0.21, 0.47, 0.89);
        for model in MODELS {
            assert_eq!(shade(base, ShadeSpec::new(1.0, model)), base);
        }
    }

    #[test]
    fn simple_grey_scenario() {
        let base = Rgba::rgba(0.5, 0.5, 0.5, 0.7);
        let c = shade(base, ShadeSpec::new(0.5, ShadeModel::Simple));
        assert_eq!(c, Rgba::rgba(0.25, 0.25, 0.25, 0.7));
    }

    #[test]
    fn mix_endpoints_and_linearity() {
        let c1 = Rgba::rgb(0.1, 0.2, 0.3);
        let c2 = Rgba::rgb(0.9, 0.8, 0.7);
        assert_eq!(mix(c1, c2, 0.0), c1);
        assert_eq!(mix(c1, c2, 1.0), c2);
        assert_eq!(mix(c1, c2, -5.0), c1);
        assert_eq!(mix(c1, c2, 5.0), c2);

        let mid = mix(c1, c2, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn darken_lighten_move_luma() {
        let c = Rgba::rgb(0.4, 0.5, 0.6);
        assert!(darken(c, 0.3, 1.0).luma() < c.luma());
        assert!(lighten(c, 0.3, 1.0).luma() > c.luma());
        assert_eq!(darken(c, 0.3, 0.5).a, 0.5);
        // Out-of-range amounts clamp
        assert_eq!(darken(c, 2.0, 1.0), Rgba::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn tint_preserves_luma() {
        let c = Rgba::rgb(0.5, 0.5, 0.5);
        let t = tint(c, Rgba::rgb(0.8, 0.2, 0.2), 0.5);
        assert!((t.luma() - c.luma()).abs() < 0.02);
        assert!(t.r > t.g);
    }

    #[test]
    fn hsl_round_trip() {
        for c in [
            Rgba::rgb(0.2, 0.4, 0.6),
            Rgba::rgb(0.9, 0.1, 0.5),
            Rgba::grey(0.5),
        ] {
            let (h, s, l) = rgb_to_hsl(c);
            let back = hsl_to_rgb(h, s, l, c.a);
            assert!((back.r - c.r).abs() < 1e-4);
            assert!((back.g - c.g).abs() < 1e-4);
            assert!((back.b - c.b).abs() < 1e-4);
        }
    }
}
