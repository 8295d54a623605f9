// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour palettes
//!
//! A [`Palette`] maps each semantic [`Bucket`] to a fixed-length ramp of
//! shaded colours, built once from a [`BaseColors`] set when configuration
//! loads. Rebuilding fully replaces the value; there is no incremental
//! update.

use super::tune::{self, BASE_SHADE, RAMP_LEN};
use crate::draw::color::{Rgba, Rgba8Srgb};
use crate::draw::shade::{self, ShadeModel, ShadeSpec};

/// Semantic colour bucket
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bucket {
    Background,
    Button,
    Highlight,
    Focus,
    MouseOver,
    Menu,
    Tooltip,
    Selected,
    Sidebar,
    Slider,
    Progress,
    Check,
}

impl Bucket {
    /// Number of buckets
    pub const COUNT: usize = 12;

    /// All buckets, in index order
    pub const ALL: [Bucket; Bucket::COUNT] = [
        Bucket::Background,
        Bucket::Button,
        Bucket::Highlight,
        Bucket::Focus,
        Bucket::MouseOver,
        Bucket::Menu,
        Bucket::Tooltip,
        Bucket::Selected,
        Bucket::Sidebar,
        Bucket::Slider,
        Bucket::Progress,
        Bucket::Check,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Base colours per semantic bucket, in sRGB storage format
///
/// This is the configuration-side value: the configuration loader fills it
/// in (or one of the built-in schemes is used) before the palette is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseColors {
    pub background: Rgba8Srgb,
    pub button: Rgba8Srgb,
    pub highlight: Rgba8Srgb,
    pub focus: Rgba8Srgb,
    pub mouse_over: Rgba8Srgb,
    pub menu: Rgba8Srgb,
    pub tooltip: Rgba8Srgb,
    pub selected: Rgba8Srgb,
    pub sidebar: Rgba8Srgb,
    pub slider: Rgba8Srgb,
    pub progress: Rgba8Srgb,
    pub check: Rgba8Srgb,
}

impl BaseColors {
    /// Default "light" scheme
    pub const LIGHT: BaseColors = BaseColors {
        background: Rgba8Srgb::parse("EFEFEC"),
        button: Rgba8Srgb::parse("E3E3DF"),
        highlight: Rgba8Srgb::parse("5A82C4"),
        focus: Rgba8Srgb::parse("4A72B8"),
        mouse_over: Rgba8Srgb::parse("6C96D8"),
        menu: Rgba8Srgb::parse("F5F5F2"),
        tooltip: Rgba8Srgb::parse("F8F4C6"),
        selected: Rgba8Srgb::parse("5A82C4"),
        sidebar: Rgba8Srgb::parse("E8E8E4"),
        slider: Rgba8Srgb::parse("D8D8D3"),
        progress: Rgba8Srgb::parse("6C96D8"),
        check: Rgba8Srgb::parse("4A72B8"),
    };

    /// Dark scheme
    pub const DARK: BaseColors = BaseColors {
        background: Rgba8Srgb::parse("3A3A3A"),
        button: Rgba8Srgb::parse("454545"),
        highlight: Rgba8Srgb::parse("5A82C4"),
        focus: Rgba8Srgb::parse("6C96D8"),
        mouse_over: Rgba8Srgb::parse("7BA5E7"),
        menu: Rgba8Srgb::parse("333333"),
        tooltip: Rgba8Srgb::parse("4A4A3A"),
        selected: Rgba8Srgb::parse("5A82C4"),
        sidebar: Rgba8Srgb::parse("404040"),
        slider: Rgba8Srgb::parse("505050"),
        progress: Rgba8Srgb::parse("5A82C4"),
        check: Rgba8Srgb::parse("6C96D8"),
    };

    /// Base colour for one bucket
    pub fn get(&self, bucket: Bucket) -> Rgba8Srgb {
        match bucket {
            Bucket::Background => self.background,
            Bucket::Button => self.button,
            Bucket::Highlight => self.highlight,
            Bucket::Focus => self.focus,
            Bucket::MouseOver => self.mouse_over,
            Bucket::Menu => self.menu,
            Bucket::Tooltip => self.tooltip,
            Bucket::Selected => self.selected,
            Bucket::Sidebar => self.sidebar,
            Bucket::Slider => self.slider,
            Bucket::Progress => self.progress,
            Bucket::Check => self.check,
        }
    }
}

impl Default for BaseColors {
    fn default() -> Self {
        BaseColors::LIGHT
    }
}

/// A built palette: one shade ramp per bucket plus the composed mid tone
///
/// Built once per configuration (re)load and read-only thereafter. Under the
/// Simple shading model ramp luma is monotonic by construction: the factor
/// tables in [`tune`] are monotone.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    ramps: [[Rgba; RAMP_LEN]; Bucket::COUNT],
    mid: Rgba,
}

impl Palette {
    /// Build from base colours
    ///
    /// `contrast` is clamped to `[0, 1]`. The per-bucket factor sequences
    /// come from [`tune::ramp_factors`].
    pub fn build(base: &BaseColors, model: ShadeModel, contrast: f32) -> Palette {
        let contrast = contrast.clamp(0.0, 1.0);
        let mut ramps = [[Rgba::TRANSPARENT; RAMP_LEN]; Bucket::COUNT];
        for bucket in Bucket::ALL {
            let col: Rgba = base.get(bucket).into();
            let factors = tune::ramp_factors(bucket);
            for (i, factor) in factors.iter().enumerate() {
                ramps[bucket.index()][i] = shade::shade(col, ShadeSpec::new(*factor, model));
            }
        }

        let mid = mid_tone(base.background.into(), contrast);
        log::debug!("Palette::build: model={model:?}, contrast={contrast}");
        Palette { ramps, mid }
    }

    /// Get a ramp entry; `idx` is clamped to the ramp
    #[inline]
    pub fn shade(&self, bucket: Bucket, idx: usize) -> Rgba {
        self.ramps[bucket.index()][idx.min(RAMP_LEN - 1)]
    }

    /// Get the whole ramp for one bucket
    #[inline]
    pub fn ramp(&self, bucket: Bucket) -> &[Rgba; RAMP_LEN] {
        &self.ramps[bucket.index()]
    }

    /// The unshaded base tone of a bucket
    #[inline]
    pub fn base(&self, bucket: Bucket) -> Rgba {
        self.ramps[bucket.index()][BASE_SHADE]
    }

    /// The composed mid tone derived from the background luma
    #[inline]
    pub fn mid(&self) -> Rgba {
        self.mid
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::build(&BaseColors::LIGHT, ShadeModel::default(), 0.5)
    }
}

/// Derive the mid tone from the background
///
/// The branch keeps contrast bounded at the extremes of the brightness range
/// instead of clipping to a flat colour: near-black backgrounds are
/// lightened, near-white ones darkened, and the mid range darkened in
/// proportion to its own luma.
fn mid_tone(bg: Rgba, contrast: f32) -> Rgba {
    let luma = bg.luma();
    if luma < 0.006 {
        shade::lighten(bg, 0.01 + 0.20 * contrast, 1.0)
    } else if luma > 0.93 {
        shade::darken(bg, 0.02 + 0.20 * contrast, 1.0)
    } else {
        let amount = (0.35 + 0.15 * luma) * luma * (0.55 + contrast * 0.35);
        shade::darken(bg, amount, 1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ramp_length_fixed_across_buckets() {
        let pal = Palette::build(&BaseColors::LIGHT, ShadeModel::Simple, 0.5);
        for bucket in Bucket::ALL {
            assert_eq!(pal.ramp(bucket).len(), RAMP_LEN);
        }
    }

    #[test]
    fn simple_model_luma_monotone() {
        let pal = Palette::build(&BaseColors::LIGHT, ShadeModel::Simple, 0.5);
        for bucket in Bucket::ALL {
            let ramp = pal.ramp(bucket);
            for i in 1..RAMP_LEN {
                assert!(
                    ramp[i].luma() <= ramp[i - 1].luma() + 1e-5,
                    "{bucket:?}[{i}]"
                );
            }
        }
    }

    #[test]
    fn base_entry_is_unshaded() {
        let pal = Palette::build(&BaseColors::DARK, ShadeModel::Hsl, 0.5);
        let base: Rgba = BaseColors::DARK.button.into();
        let got = pal.base(Bucket::Button);
        assert!((got.r - base.r).abs() < 1e-5);
        assert!((got.g - base.g).abs() < 1e-5);
        assert!((got.b - base.b).abs() < 1e-5);
    }

    #[test]
    fn mid_tone_branches() {
        // near-black lightens
        let black = Rgba::grey(0.0);
        assert!(mid_tone(black, 0.5).luma() > black.luma());
        // near-white darkens
        let white = Rgba::grey(1.0);
        assert!(mid_tone(white, 0.5).luma() < white.luma());
        // mid range darkens
        let grey = Rgba::grey(0.5);
        assert!(mid_tone(grey, 0.5).luma() < grey.luma());
    }

    #[test]
    fn shade_index_clamped() {
        let pal = Palette::default();
        assert_eq!(
            pal.shade(Bucket::Button, 999),
            pal.shade(Bucket::Button, RAMP_LEN - 1)
        );
    }
}
