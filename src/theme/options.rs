// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Theme options
//!
//! [`Options`] carries the configuration-supplied values the engine
//! consumes: shading model, contrast, rounding level, feature flags and
//! per-widget appearance selections. Parsing a configuration file is the
//! loader's business; this type is only the parsed value.

use super::gradient::Appearance;
use super::palette::BaseColors;
use super::widget::WidgetKind;
use crate::draw::shade::ShadeModel;
use std::collections::BTreeMap;

/// Corner rounding level
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    None,
    Slight,
    #[default]
    Full,
    Extra,
}

impl Rounding {
    /// Default corner radius in pixels
    pub fn radius(self) -> f32 {
        match self {
            Rounding::None => 0.0,
            Rounding::Slight => 2.0,
            Rounding::Full => 4.0,
            Rounding::Extra => 6.0,
        }
    }
}

/// Engine options
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Shading model used for palette ramps and gradient factors
    #[cfg_attr(feature = "serde", serde(default))]
    pub model: ShadeModel,

    /// Contrast, `[0, 1]`
    #[cfg_attr(feature = "serde", serde(default = "defaults::contrast"))]
    pub contrast: f32,

    /// Corner rounding level
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding: Rounding,

    /// Base colours per palette bucket
    #[cfg_attr(feature = "serde", serde(default))]
    pub colors: BaseColors,

    /// Appearance used when no per-widget selection applies
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_appearance: Appearance,

    /// Per-widget appearance selections
    #[cfg_attr(feature = "serde", serde(default))]
    pub appearances: BTreeMap<WidgetKind, Appearance>,

    /// Etch text entries (and combo boxes) into the background
    #[cfg_attr(feature = "serde", serde(default = "defaults::yes"))]
    pub etch_entry: bool,

    /// Draw a border around progress fills
    #[cfg_attr(feature = "serde", serde(default = "defaults::yes"))]
    pub border_progress: bool,

    /// Thin frame mode: suppresses etch/glow overlays entirely
    #[cfg_attr(feature = "serde", serde(default))]
    pub thin_frames: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            model: Default::default(),
            contrast: defaults::contrast(),
            rounding: Default::default(),
            colors: Default::default(),
            default_appearance: Default::default(),
            appearances: Default::default(),
            etch_entry: defaults::yes(),
            border_progress: defaults::yes(),
            thin_frames: false,
        }
    }
}

impl Options {
    /// Appearance selected for a widget kind
    pub fn appearance_for(&self, kind: WidgetKind) -> Appearance {
        self.appearances
            .get(&kind)
            .copied()
            .unwrap_or(self.default_appearance)
    }

    /// Default corner radius, from the rounding level
    #[inline]
    pub fn radius(&self) -> f32 {
        self.rounding.radius()
    }

    /// Read from a TOML document
    #[cfg(feature = "config")]
    pub fn read_toml(doc: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(doc)
    }

    /// Write to a TOML document
    #[cfg(feature = "config")]
    pub fn write_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

mod defaults {
    pub fn contrast() -> f32 {
        0.5
    }
    pub fn yes() -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn appearance_selection_falls_back() {
        let mut options = Options::default();
        assert_eq!(
            options.appearance_for(WidgetKind::PushButton),
            Appearance::Standard
        );
        options
            .appearances
            .insert(WidgetKind::PushButton, Appearance::Glass);
        assert_eq!(
            options.appearance_for(WidgetKind::PushButton),
            Appearance::Glass
        );
        assert_eq!(
            options.appearance_for(WidgetKind::Entry),
            Appearance::Standard
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_round_trip() {
        let mut options = Options::default();
        options.contrast = 0.8;
        options
            .appearances
            .insert(WidgetKind::ToolButton, Appearance::Soft);
        let doc = options.write_toml().unwrap();
        let back = Options::read_toml(&doc).unwrap();
        assert_eq!(options, back);
    }
}
