// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layered widget rendering
//!
//! [`render`] composites a widget skin in six stages, strictly ordered:
//!
//! 1.  background fill (flat selected fills, and blended underlays)
//! 2.  the primary gradient fill
//! 3.  inner relief strokes (light top-left, optionally dark bottom-right)
//! 4.  decorative overlays (shine, mouse-over segments, grips, arrows)
//! 5.  the etch or glow overlay
//! 6.  the outer border stroke
//!
//! Every stage may be skipped by its predicate; none reorders. Stage
//! geometry is derived through [`StageRects`]: each stage rect is a pure
//! function of the requested rect plus the etch decision, so the cumulative
//! inset between the request and the final border stroke is auditable.

use super::effects;
use super::gradient::{Appearance, GradientBorder, GradientDef, GradientTable};
use super::palette::Bucket;
use super::tune;
use super::widget::{
    BorderProfile, Decoration, InteractionState, KindTraits, RenderFlags, RenderRequest, WidgetKind,
};
use super::Theme;
use crate::cast::Conv;
use crate::dir::Direction;
use crate::draw::color::Rgba;
use crate::draw::shade::{self, ShadeModel, ShadeSpec};
use crate::draw::{
    with_clip, Canvas, ColorStop, LinearGradient, Path, RadialGradient, RoundedRect, STOP_INLINE,
};
use crate::geom::{Quad, Vec2};
use smallvec::SmallVec;
use std::f32::consts::PI;

/// Geometry shared by the render stages
///
/// All stage rects derive from `outer` (the requested rect) and the etch
/// decision alone. When the etch overlay applies, `content` is `outer`
/// shrunk by exactly [`tune::ETCH_INSET`] per side and the etch strokes
/// occupy the freed ring; otherwise `content == outer`. The border stroke
/// draws on `content`, i.e. on the requested rect minus the cumulative
/// inset.
#[derive(Copy, Clone, Debug, PartialEq)]
struct StageRects {
    outer: Quad,
    content: Quad,
    inset: f32,
}

impl StageRects {
    fn new(outer: Quad, etch: bool) -> Self {
        let inset = if etch { tune::ETCH_INSET } else { 0.0 };
        StageRects {
            outer,
            content: outer.shrink(inset),
            inset,
        }
    }

    /// Stages 1–2: fill rect
    fn fill(&self, inside_border: bool) -> Quad {
        if inside_border {
            self.content.shrink(1.0)
        } else {
            self.content
        }
    }

    /// Stages 3–4: relief and overlay strokes, 1px inside the border
    fn relief(&self) -> Quad {
        self.content.shrink(1.0)
    }

    /// Stage 5: dark etch pass, on the content boundary
    fn etch_dark(&self) -> Quad {
        self.content
    }

    /// Stage 5: light etch pass and glow stroke, 1px further out
    fn etch_light(&self) -> Quad {
        self.content.grow(1.0)
    }

    /// Stage 6: border stroke
    fn border(&self) -> Quad {
        self.content
    }
}

/// Stage-3 choice: which inner relief strokes are drawn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Relief {
    None,
    /// Single light stroke, top-left half only
    Light,
    /// Light top-left plus dark bottom-right
    TwoTone,
}

/// The stage-3 predicate table
///
/// Sunken widgets drop their relief entirely; kinds with the
/// `skip_bottom_relief` trait (check boxes and radio buttons) never receive
/// the dark bottom-right stroke.
fn relief_for(sunken: bool, traits: &KindTraits, border: GradientBorder) -> Relief {
    if sunken || !traits.inner_highlight {
        return Relief::None;
    }
    match border {
        GradientBorder::None => Relief::None,
        GradientBorder::Light | GradientBorder::ThreeD | GradientBorder::Shine => Relief::Light,
        GradientBorder::ThreeDFull => {
            if traits.skip_bottom_relief {
                Relief::Light
            } else {
                Relief::TwoTone
            }
        }
    }
}

/// Stage-5 gate: whether the etch/glow ring is reserved at all
fn etch_applies(theme: &Theme, req: &RenderRequest, traits: &KindTraits) -> bool {
    if !traits.etch
        || theme.options.thin_frames
        || req.state.is_insensitive()
        || req.flags.contains(RenderFlags::HIDE_EFFECT)
    {
        return false;
    }
    match req.kind {
        WidgetKind::Entry | WidgetKind::ComboBox => theme.options.etch_entry,
        _ => true,
    }
}

/// The state-adjusted base colour the fill and relief stages shade from
fn fill_base(theme: &Theme, req: &RenderRequest) -> Rgba {
    let bucket = req.bucket();
    let pal = &theme.palette;
    let base = match req.state {
        InteractionState::Normal => pal.base(bucket),
        InteractionState::Active => pal.shade(bucket, tune::ACTIVE_SHADE),
        InteractionState::Prelight => pal.shade(bucket, tune::PRELIGHT_SHADE),
        InteractionState::Selected => pal.shade(bucket, tune::SELECTED_SHADE),
        InteractionState::Insensitive => {
            shade::tint(pal.base(bucket), pal.mid(), tune::INSENSITIVE_TINT)
        }
    };
    if req.flags.contains(RenderFlags::SUNKEN) {
        // inverted variant: troughs darken where the base is light
        shade::shade(
            base,
            ShadeSpec::new(-tune::SUNKEN_FILL_FACTOR, theme.options.model),
        )
    } else {
        base
    }
}

/// Direction of the arrow glyph some kinds carry
fn arrow_dir(kind: WidgetKind) -> Option<Direction> {
    match kind {
        WidgetKind::SpinUp => Some(Direction::Up),
        WidgetKind::SpinDown | WidgetKind::ComboButton => Some(Direction::Down),
        _ => None,
    }
}

fn resolve_stops(
    def: &GradientDef,
    traits: &KindTraits,
    base: Rgba,
    model: ShadeModel,
    alpha: f32,
) -> SmallVec<[ColorStop; STOP_INLINE]> {
    if traits.mirror_gradient {
        def.mirrored_stops()
            .iter()
            .map(|s| s.resolve(base, model, alpha))
            .collect()
    } else {
        def.stops
            .iter()
            .map(|s| s.resolve(base, model, alpha))
            .collect()
    }
}

/// Gradient axis over `quad`, ending on the last pixel centre of the span
fn gradient_axis(quad: Quad, vertical: bool) -> (Vec2, Vec2) {
    if vertical {
        (quad.a, Vec2(quad.a.0, (quad.b.1 - 1.0).max(quad.a.1)))
    } else {
        (quad.a, Vec2((quad.b.0 - 1.0).max(quad.a.0), quad.a.1))
    }
}

/// Render one widget skin
///
/// Total over the input domain: degenerate geometry renders nothing and
/// out-of-range alpha is clamped. The same theme and request always produce
/// the same call sequence on `canvas`.
pub fn render(theme: &Theme, req: &RenderRequest, canvas: &mut dyn Canvas) {
    if req.rect.is_empty() {
        return;
    }
    if let Some(clip) = req.clip {
        canvas.push_clip(&Path::rect(Quad::conv(clip)));
        render_stages(theme, req, canvas);
        canvas.pop_clip();
    } else {
        render_stages(theme, req, canvas);
    }
}

fn render_stages(theme: &Theme, req: &RenderRequest, canvas: &mut dyn Canvas) {
    let traits = req.kind.traits();
    let model = theme.options.model;
    let alpha = req.alpha.clamp(0.0, 1.0);
    let col = |c: Rgba| c.with_alpha((c.a * alpha).clamp(0.0, 1.0));

    let appearance = theme.options.appearance_for(req.kind);
    let effective = GradientTable::effective(appearance, req.kind, req.profile);
    let def = theme.gradients.resolve(appearance, req.kind, req.profile);

    let rects = StageRects::new(Quad::conv(req.rect), etch_applies(theme, req, &traits));
    let radius = theme.options.radius();
    let base = fill_base(theme, req);

    // 1: background fill. A flat appearance fills only in the selected
    // state; non-flat appearances are covered by the gradient and take a
    // solid underlay only on request (BLEND).
    let selected_fill = effective.is_flat() && req.state == InteractionState::Selected;
    if selected_fill || req.flags.contains(RenderFlags::BLEND) {
        let fill_col = if selected_fill {
            base
        } else {
            theme.palette.base(Bucket::Background)
        };
        let rr = RoundedRect::new(rects.fill(false), radius, req.corners);
        canvas.fill_path(&rr.outline(), col(fill_col));
    }

    // 2: primary gradient fill
    if !effective.is_flat() {
        let quad = rects.fill(req.flags.contains(RenderFlags::DRAW_INSIDE));
        let rr = RoundedRect::new(quad, radius, req.corners);
        let stops = resolve_stops(def, &traits, base, model, alpha);
        if traits.shine_overlay {
            // circular kinds take a radial fill
            let gradient = RadialGradient {
                center: quad.center(),
                radius: 0.5 * quad.size().min_comp(),
                stops,
            };
            canvas.fill_path_radial(&rr.outline(), &gradient);
        } else {
            let (start, end) = gradient_axis(quad, req.flags.contains(RenderFlags::VERTICAL));
            let gradient = LinearGradient { start, end, stops };
            canvas.fill_path_linear(&rr.outline(), &gradient);
        }
        if effective == Appearance::Striped {
            let stripe = shade::shade(base, ShadeSpec::new(tune::RELIEF_LIGHT_FACTOR, model));
            effects::stripes(
                canvas,
                quad,
                col(stripe.with_alpha(tune::STRIPE_ALPHA)),
                req.flags.contains(RenderFlags::VERTICAL),
            );
        }
    }

    // 3: inner relief
    let sunken =
        req.flags.contains(RenderFlags::SUNKEN) || req.profile == BorderProfile::Sunken;
    let relief_rr = RoundedRect::new(rects.relief(), (radius - 1.0).max(0.0), req.corners);
    match relief_for(sunken, &traits, def.border) {
        Relief::None => (),
        Relief::Light => {
            let light = shade::shade(base, ShadeSpec::new(tune::RELIEF_LIGHT_FACTOR, model));
            canvas.stroke_path(&relief_rr.top_left_half(), col(light), 1.0);
        }
        Relief::TwoTone => {
            let light = shade::shade(base, ShadeSpec::new(tune::RELIEF_LIGHT_FACTOR, model));
            let dark = shade::shade(base, ShadeSpec::new(tune::RELIEF_DARK_FACTOR, model));
            canvas.stroke_path(&relief_rr.top_left_half(), col(light), 1.0);
            canvas.stroke_path(&relief_rr.bottom_right_half(), col(dark), 1.0);
        }
    }

    // 4: decorative overlays
    if traits.shine_overlay {
        let r = 0.5 * rects.content.size().min_comp() - 1.0;
        if r > 0.0 {
            let arc = Path::arc_span(rects.content.center(), r, 0.75 * PI, 1.5 * PI);
            canvas.stroke_path(&arc, col(Rgba::WHITE.with_alpha(tune::SHINE_ALPHA)), 1.0);
        }
    }
    if def.border == GradientBorder::Shine && !req.state.is_insensitive() {
        let y = rects.content.a.1 + 1.5;
        let light = shade::shade(base, ShadeSpec::new(tune::RELIEF_LIGHT_FACTOR, model));
        effects::faded_line(
            canvas,
            Vec2(rects.content.a.0 + radius, y),
            Vec2(rects.content.b.0 - radius, y),
            col(light),
            1.0,
        );
    }
    if traits.mouse_over_segments && req.state == InteractionState::Prelight {
        let over = col(theme
            .palette
            .base(Bucket::MouseOver)
            .with_alpha(tune::MOUSE_OVER_ALPHA));
        canvas.stroke_path(&relief_rr.top_left_half(), over, 1.0);
        if !traits.skip_bottom_relief {
            canvas.stroke_path(&relief_rr.bottom_right_half(), over, 1.0);
        }
    }
    match traits.decoration {
        Decoration::None => (),
        Decoration::Dots => {
            let dot = shade::shade(base, ShadeSpec::new(tune::RELIEF_DARK_FACTOR, model));
            effects::dot_pattern(canvas, rects.relief(), col(dot));
        }
        Decoration::Dashes => {
            let dash = shade::shade(base, ShadeSpec::new(tune::RELIEF_DARK_FACTOR, model));
            let dir = if req.flags.contains(RenderFlags::VERTICAL) {
                Direction::Down
            } else {
                Direction::Right
            };
            effects::dash_group(
                canvas,
                rects.content.center(),
                tune::DASH_COUNT,
                dir,
                col(dash),
                Some(model),
            );
        }
    }
    if let Some(dir) = arrow_dir(req.kind) {
        let margin = rects.content.size().min_comp() / 3.0;
        let mark = theme.palette.shade(req.bucket(), tune::BORDER_SHADE);
        effects::arrow(canvas, rects.content.shrink(margin), dir, col(mark), None);
    }

    // 5: etch or glow, mutually exclusive; the ring was reserved above
    if rects.inset > 0.0 {
        if req.flags.contains(RenderFlags::HAS_FOCUS) {
            let glow = theme.palette.base(Bucket::Focus).with_alpha(tune::GLOW_ALPHA);
            let rr = RoundedRect::new(rects.etch_light(), radius + 1.0, req.corners);
            canvas.stroke_path(&rr.outline(), col(glow), 1.0);
        } else {
            // carved groove: dark pass, then a lighter pass 1px further out
            let dark_rr = RoundedRect::new(rects.etch_dark(), radius, req.corners);
            canvas.stroke_path(
                &dark_rr.outline(),
                col(Rgba::BLACK.with_alpha(tune::ETCH_DARK_ALPHA)),
                1.0,
            );
            let light_rr = RoundedRect::new(rects.etch_light(), radius + 1.0, req.corners);
            canvas.stroke_path(
                &light_rr.outline(),
                col(Rgba::WHITE.with_alpha(tune::ETCH_LIGHT_ALPHA)),
                1.0,
            );
        }
    }

    // 6: outer border
    let draw_border = traits.bordered
        || req.flags.contains(RenderFlags::DO_BORDER)
        || (req.kind == WidgetKind::ProgressFill && theme.options.border_progress);
    if draw_border {
        let border_rr = RoundedRect::new(rects.border(), radius, req.corners);
        if let Some(gap) = req.gap {
            let region =
                RoundedRect::new(rects.outer.grow(1.0), radius, req.corners).clip_region(Some(gap));
            with_clip(canvas, &region, |c| {
                stroke_border(c, theme, req, &traits, &border_rr, alpha)
            });
        } else {
            stroke_border(canvas, theme, req, &traits, &border_rr, alpha);
        }
    }
}

fn stroke_border(
    canvas: &mut dyn Canvas,
    theme: &Theme,
    req: &RenderRequest,
    traits: &KindTraits,
    rr: &RoundedRect,
    alpha: f32,
) {
    let idx = match req.profile {
        BorderProfile::Light => tune::BORDER_LIGHT_SHADE,
        _ => tune::BORDER_SHADE,
    };
    let border = theme.palette.shade(req.bucket(), idx);
    let col = |c: Rgba| c.with_alpha((c.a * alpha).clamp(0.0, 1.0));
    if req.profile == BorderProfile::Sunken && traits.frame_like {
        // two passes fake depth: full-strength top-left, faded bottom-right
        canvas.stroke_path(&rr.top_left_half(), col(border), 1.0);
        canvas.stroke_path(
            &rr.bottom_right_half(),
            col(border.with_alpha(tune::SUNKEN_BORDER_LOWER_ALPHA)),
            1.0,
        );
    } else {
        canvas.stroke_path(&rr.outline(), col(border), 1.0);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::Rect;
    use crate::theme::Options;

    #[test]
    fn stage_rects_inset_chain() {
        let outer = Quad::conv(Rect::xywh(10, 10, 40, 20));
        let etched = StageRects::new(outer, true);
        assert_eq!(etched.inset, tune::ETCH_INSET);
        assert_eq!(etched.content, outer.shrink(tune::ETCH_INSET));
        assert_eq!(etched.border(), etched.content);
        assert_eq!(etched.etch_light(), outer);
        assert_eq!(etched.relief(), etched.content.shrink(1.0));

        let plain = StageRects::new(outer, false);
        assert_eq!(plain.inset, 0.0);
        assert_eq!(plain.content, outer);
        assert_eq!(plain.border(), outer);
    }

    #[test]
    fn relief_table() {
        let button = WidgetKind::PushButton.traits();
        let checkbox = WidgetKind::CheckBox.traits();
        let frame = WidgetKind::Frame.traits();

        assert_eq!(
            relief_for(false, &button, GradientBorder::ThreeDFull),
            Relief::TwoTone
        );
        assert_eq!(
            relief_for(false, &checkbox, GradientBorder::ThreeDFull),
            Relief::Light
        );
        assert_eq!(
            relief_for(false, &button, GradientBorder::ThreeD),
            Relief::Light
        );
        assert_eq!(
            relief_for(false, &button, GradientBorder::None),
            Relief::None
        );
        // sunken widgets drop their relief
        assert_eq!(
            relief_for(true, &button, GradientBorder::ThreeDFull),
            Relief::None
        );
        // frames never take inner relief
        assert_eq!(
            relief_for(false, &frame, GradientBorder::ThreeD),
            Relief::None
        );
    }

    #[test]
    fn etch_gating() {
        let theme = Theme::default();
        let rect = Rect::xywh(0, 0, 40, 20);
        let button = RenderRequest::new(WidgetKind::PushButton, InteractionState::Normal, rect);
        assert!(etch_applies(&theme, &button, &button.kind.traits()));

        let mut insensitive = button.clone();
        insensitive.state = InteractionState::Insensitive;
        assert!(!etch_applies(&theme, &insensitive, &button.kind.traits()));

        let mut hidden = button.clone();
        hidden.flags |= RenderFlags::HIDE_EFFECT;
        assert!(!etch_applies(&theme, &hidden, &button.kind.traits()));

        let entry = RenderRequest::new(WidgetKind::Entry, InteractionState::Normal, rect);
        assert!(etch_applies(&theme, &entry, &entry.kind.traits()));
        let mut options = Options::default();
        options.etch_entry = false;
        let no_etch = Theme::new(options);
        assert!(!etch_applies(&no_etch, &entry, &entry.kind.traits()));

        let mut options = Options::default();
        options.thin_frames = true;
        let thin = Theme::new(options);
        assert!(!etch_applies(&thin, &button, &button.kind.traits()));
    }

    #[test]
    fn sunken_flag_inverts_fill() {
        let theme = Theme::default();
        let rect = Rect::xywh(0, 0, 40, 20);
        let mut req = RenderRequest::new(WidgetKind::SliderTrack, InteractionState::Normal, rect);
        let plain = fill_base(&theme, &req);
        req.flags |= RenderFlags::SUNKEN;
        assert_ne!(fill_base(&theme, &req), plain);
    }

    #[test]
    fn gradient_axis_spans_pixel_centres() {
        let quad = Quad::conv(Rect::xywh(0, 0, 100, 10));
        let (start, end) = gradient_axis(quad, false);
        assert_eq!(start, Vec2(0.0, 0.0));
        assert_eq!(end, Vec2(99.0, 0.0));
        let (start, end) = gradient_axis(quad, true);
        assert_eq!(start, Vec2(0.0, 0.0));
        assert_eq!(end, Vec2(0.0, 9.0));
    }

    #[test]
    fn arrow_kinds() {
        assert_eq!(arrow_dir(WidgetKind::SpinUp), Some(Direction::Up));
        assert_eq!(arrow_dir(WidgetKind::SpinDown), Some(Direction::Down));
        assert_eq!(arrow_dir(WidgetKind::ComboButton), Some(Direction::Down));
        assert_eq!(arrow_dir(WidgetKind::PushButton), None);
    }
}
