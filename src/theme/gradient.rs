// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Gradient resolution
//!
//! [`GradientTable`] maps an [`Appearance`] to a [`GradientDef`]: an ordered
//! stop list plus a border-augmentation tag. The table is built once when
//! configuration loads; [`GradientTable::resolve`] is a pure function of
//! `(appearance, widget kind, border profile)` — identical inputs always
//! yield the identical definition.

use super::widget::{BorderProfile, WidgetKind};
use crate::draw::color::Rgba;
use crate::draw::shade::{self, ShadeModel, ShadeSpec};
use crate::draw::{ColorStop, STOP_INLINE};
use linear_map::LinearMap;
use smallvec::SmallVec;

/// Appearance kind requested for a widget's fill
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Appearance {
    /// No gradient: solid base colour
    Flat,
    /// Barely-there lift
    Raised,
    /// Dark-to-light (sunken look)
    Inverted,
    /// Stronger inverted variant
    DarkInverted,
    /// Gentle top-to-bottom gradient
    Soft,
    /// The standard gradient
    #[default]
    Standard,
    /// High-contrast gradient
    Harsh,
    /// Glassy two-band gradient
    Glass,
    /// Strong top shine
    Shine,
    /// 3D bevel: bright crest, dark base
    Bevelled,
    /// Split gradient with a mid-band break
    Split,
    /// Flat-ish fill finished with a striped overlay
    Striped,
    /// Alpha fade-out (menu-item highlight)
    Fade,
    /// Toolbar fill
    Toolbar,
}

impl Appearance {
    const ALL: [Appearance; 14] = [
        Appearance::Flat,
        Appearance::Raised,
        Appearance::Inverted,
        Appearance::DarkInverted,
        Appearance::Soft,
        Appearance::Standard,
        Appearance::Harsh,
        Appearance::Glass,
        Appearance::Shine,
        Appearance::Bevelled,
        Appearance::Split,
        Appearance::Striped,
        Appearance::Fade,
        Appearance::Toolbar,
    ];

    /// True if the fill is a plain solid colour
    #[inline]
    pub fn is_flat(self) -> bool {
        self == Appearance::Flat
    }
}

/// Value of a gradient stop: a shade factor or an explicit colour
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StopValue {
    /// Shade the widget's base colour by this factor
    Factor(f32),
    /// Use this colour directly
    Color(Rgba),
}

/// One gradient stop
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis, in `[0, 1]`
    pub pos: f32,
    pub value: StopValue,
    /// Stop alpha, in `[0, 1]` (multiplied with the request alpha)
    pub alpha: f32,
}

impl GradientStop {
    const fn factor(pos: f32, factor: f32) -> Self {
        GradientStop {
            pos,
            value: StopValue::Factor(factor),
            alpha: 1.0,
        }
    }

    const fn faded(pos: f32, factor: f32, alpha: f32) -> Self {
        GradientStop {
            pos,
            value: StopValue::Factor(factor),
            alpha,
        }
    }

    /// Resolve against a base colour, yielding a concrete canvas stop
    pub fn resolve(&self, base: Rgba, model: ShadeModel, alpha_mult: f32) -> ColorStop {
        let color = match self.value {
            StopValue::Factor(f) => shade::shade(base, ShadeSpec::new(f, model)),
            StopValue::Color(c) => c,
        };
        let alpha = (self.alpha * alpha_mult).clamp(0.0, 1.0);
        ColorStop::new(self.pos, color.with_alpha(color.a * alpha))
    }
}

/// Border augmentation applied around a gradient fill
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientBorder {
    /// No augmentation
    None,
    /// Single light inner stroke
    Light,
    /// Light top-left stroke (3D hint)
    #[default]
    ThreeD,
    /// Light top-left plus dark bottom-right stroke
    ThreeDFull,
    /// Shine stroke along the top edge
    Shine,
}

/// An ordered gradient definition plus border augmentation
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDef {
    /// Stops with strictly increasing positions
    pub stops: SmallVec<[GradientStop; STOP_INLINE]>,
    pub border: GradientBorder,
}

impl GradientDef {
    fn new(stops: &[GradientStop], border: GradientBorder) -> Self {
        debug_assert!(stops.windows(2).all(|w| w[0].pos < w[1].pos));
        GradientDef {
            stops: SmallVec::from_slice(stops),
            border,
        }
    }

    /// Stop list with mirrored positions (`1 − pos`), reversed to keep
    /// positions increasing — the tab-inversion rule
    pub fn mirrored_stops(&self) -> SmallVec<[GradientStop; STOP_INLINE]> {
        let mut stops: SmallVec<[GradientStop; STOP_INLINE]> = self
            .stops
            .iter()
            .rev()
            .map(|s| GradientStop {
                pos: 1.0 - s.pos,
                ..*s
            })
            .collect();
        // guard against -0.0 at the former end stop
        for s in stops.iter_mut() {
            if s.pos == -0.0 {
                s.pos = 0.0;
            }
        }
        stops
    }
}

fn builtin_def(appearance: Appearance) -> GradientDef {
    use Appearance::*;
    use GradientStop as S;
    match appearance {
        Flat => GradientDef::new(
            &[S::factor(0.0, 1.0), S::factor(1.0, 1.0)],
            GradientBorder::None,
        ),
        Raised => GradientDef::new(
            &[S::factor(0.0, 1.05), S::factor(1.0, 0.96)],
            GradientBorder::Light,
        ),
        Inverted => GradientDef::new(
            &[S::factor(0.0, 0.87), S::factor(1.0, 1.23)],
            GradientBorder::ThreeD,
        ),
        DarkInverted => GradientDef::new(
            &[S::factor(0.0, 0.80), S::factor(1.0, 1.15)],
            GradientBorder::ThreeD,
        ),
        Soft => GradientDef::new(
            &[S::factor(0.0, 1.10), S::factor(1.0, 0.94)],
            GradientBorder::ThreeD,
        ),
        Standard => GradientDef::new(
            &[S::factor(0.0, 1.23), S::factor(1.0, 0.87)],
            GradientBorder::ThreeD,
        ),
        Harsh => GradientDef::new(
            &[S::factor(0.0, 1.30), S::factor(1.0, 0.83)],
            GradientBorder::ThreeD,
        ),
        Glass => GradientDef::new(
            &[
                S::factor(0.0, 1.25),
                S::factor(0.45, 1.06),
                S::factor(0.55, 0.94),
                S::factor(1.0, 1.12),
            ],
            GradientBorder::Shine,
        ),
        Shine => GradientDef::new(
            &[
                S::factor(0.0, 1.35),
                S::factor(0.3, 1.15),
                S::factor(1.0, 0.95),
            ],
            GradientBorder::Shine,
        ),
        Bevelled => GradientDef::new(
            &[
                S::factor(0.0, 1.22),
                S::factor(0.1, 1.05),
                S::factor(0.9, 0.93),
                S::factor(1.0, 0.76),
            ],
            GradientBorder::ThreeDFull,
        ),
        Split => GradientDef::new(
            &[
                S::factor(0.0, 1.16),
                S::factor(0.5, 1.04),
                S::factor(0.55, 0.92),
                S::factor(1.0, 0.82),
            ],
            GradientBorder::ThreeD,
        ),
        Striped => GradientDef::new(
            &[S::factor(0.0, 1.05), S::factor(1.0, 0.95)],
            GradientBorder::None,
        ),
        Fade => GradientDef::new(
            &[S::faded(0.0, 1.0, 1.0), S::faded(1.0, 1.0, 0.0)],
            GradientBorder::None,
        ),
        Toolbar => GradientDef::new(
            &[S::factor(0.0, 1.08), S::factor(1.0, 0.97)],
            GradientBorder::Light,
        ),
    }
}

/// The build-once appearance → gradient definition table
#[derive(Clone, Debug, PartialEq)]
pub struct GradientTable {
    map: LinearMap<Appearance, GradientDef>,
    /// Served for any appearance missing from the map
    fallback: GradientDef,
}

impl Default for GradientTable {
    fn default() -> Self {
        GradientTable::build()
    }
}

impl GradientTable {
    /// Build the table with the built-in definition per appearance
    pub fn build() -> Self {
        let mut map = LinearMap::with_capacity(Appearance::ALL.len());
        for appearance in Appearance::ALL {
            map.insert(appearance, builtin_def(appearance));
        }
        log::debug!("GradientTable::build: {} appearances", map.len());
        GradientTable {
            map,
            fallback: builtin_def(Appearance::Flat),
        }
    }

    /// Resolve the effective definition for a request
    ///
    /// Override rules:
    ///
    /// -   Bevelled requested for a kind that is neither a real push-button
    ///     nor a list header substitutes Standard (bevel relief only
    ///     applies to button-shaped widgets).
    /// -   Toolbar-hosted button kinds resolve to the Toolbar appearance.
    /// -   A Sunken border profile inverts Standard/Soft (→ Inverted) and
    ///     Harsh (→ DarkInverted).
    pub fn resolve(
        &self,
        appearance: Appearance,
        kind: WidgetKind,
        profile: BorderProfile,
    ) -> &GradientDef {
        let appearance = Self::effective(appearance, kind, profile);
        self.map.get(&appearance).unwrap_or(&self.fallback)
    }

    /// The appearance actually used after the override rules
    pub fn effective(
        appearance: Appearance,
        kind: WidgetKind,
        profile: BorderProfile,
    ) -> Appearance {
        let traits = kind.traits();
        let mut appearance = appearance;
        if appearance == Appearance::Bevelled && !(traits.button_like || traits.list_header) {
            appearance = Appearance::Standard;
        }
        if traits.on_toolbar && traits.uses_bevel {
            appearance = Appearance::Toolbar;
        }
        if profile == BorderProfile::Sunken {
            appearance = match appearance {
                Appearance::Standard | Appearance::Soft => Appearance::Inverted,
                Appearance::Harsh => Appearance::DarkInverted,
                other => other,
            };
        }
        appearance
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve_is_deterministic() {
        let table = GradientTable::build();
        let a = table.resolve(
            Appearance::Glass,
            WidgetKind::PushButton,
            BorderProfile::Raised,
        );
        let b = table.resolve(
            Appearance::Glass,
            WidgetKind::PushButton,
            BorderProfile::Raised,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn stops_strictly_increasing() {
        let table = GradientTable::build();
        for appearance in Appearance::ALL {
            let def = table.resolve(appearance, WidgetKind::Other, BorderProfile::Flat);
            for w in def.stops.windows(2) {
                assert!(w[0].pos < w[1].pos, "{appearance:?}");
            }
        }
    }

    #[test]
    fn bevel_needs_button_shape() {
        let eff = GradientTable::effective(
            Appearance::Bevelled,
            WidgetKind::Entry,
            BorderProfile::Raised,
        );
        assert_eq!(eff, Appearance::Standard);

        let eff = GradientTable::effective(
            Appearance::Bevelled,
            WidgetKind::PushButton,
            BorderProfile::Raised,
        );
        assert_eq!(eff, Appearance::Bevelled);

        let eff = GradientTable::effective(
            Appearance::Bevelled,
            WidgetKind::ListHeader,
            BorderProfile::Raised,
        );
        assert_eq!(eff, Appearance::Bevelled);
    }

    #[test]
    fn toolbar_button_resolves_to_toolbar() {
        let eff = GradientTable::effective(
            Appearance::Standard,
            WidgetKind::ToolButton,
            BorderProfile::Raised,
        );
        assert_eq!(eff, Appearance::Toolbar);
    }

    #[test]
    fn sunken_inverts() {
        let eff = GradientTable::effective(
            Appearance::Standard,
            WidgetKind::Frame,
            BorderProfile::Sunken,
        );
        assert_eq!(eff, Appearance::Inverted);
        let eff = GradientTable::effective(
            Appearance::Harsh,
            WidgetKind::Frame,
            BorderProfile::Sunken,
        );
        assert_eq!(eff, Appearance::DarkInverted);
    }

    #[test]
    fn mirrored_stops_reverse_positions() {
        let def = builtin_def(Appearance::Shine);
        let mirrored = def.mirrored_stops();
        assert_eq!(mirrored.len(), 3);
        assert_eq!(mirrored[0].pos, 0.0);
        assert!((mirrored[1].pos - 0.7).abs() < 1e-6);
        assert_eq!(mirrored[2].pos, 1.0);
        for w in mirrored.windows(2) {
            assert!(w[0].pos < w[1].pos);
        }
    }
}
