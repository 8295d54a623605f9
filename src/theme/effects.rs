// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Effect overlays
//!
//! Small reusable renderers used by the layered renderer and by standalone
//! decorations (splitters, grip handles, separators): faded lines, dot and
//! stripe pattern fills, dash groups and arrow marks.

use super::tune;
use crate::dir::Direction;
use crate::draw::color::Rgba;
use crate::draw::shade::{self, ShadeModel, ShadeSpec};
use crate::draw::{Canvas, ColorStop, LinearGradient, Path};
use crate::geom::{Quad, Vec2};
use smallvec::SmallVec;

/// Draw a line whose alpha ramps to zero at each end
///
/// The fade spans [`tune::FADE_SPAN`] pixels at each end, built from a
/// linear gradient along the stroke axis. `p1` and `p2` must be
/// axis-aligned; `width` is the stroke thickness. Used for separators and
/// highlight underlines.
pub fn faded_line(canvas: &mut dyn Canvas, p1: Vec2, p2: Vec2, col: Rgba, width: f32) {
    let axis = p2 - p1;
    let len = axis.0.abs().max(axis.1.abs());
    if len <= 0.0 {
        return;
    }

    let half = 0.5 * width;
    let quad = if axis.1 == 0.0 {
        Quad::from_coords(
            Vec2(p1.0.min(p2.0), p1.1 - half),
            Vec2(p1.0.max(p2.0), p1.1 + half),
        )
    } else {
        Quad::from_coords(
            Vec2(p1.0 - half, p1.1.min(p2.1)),
            Vec2(p1.0 + half, p1.1.max(p2.1)),
        )
    };

    let span = (tune::FADE_SPAN / len).min(0.5);
    let transparent = col.with_alpha(0.0);
    let mut stops: SmallVec<[ColorStop; 8]> = SmallVec::new();
    stops.push(ColorStop::new(0.0, transparent));
    stops.push(ColorStop::new(span, col));
    if span < 0.5 {
        stops.push(ColorStop::new(1.0 - span, col));
    }
    stops.push(ColorStop::new(1.0, transparent));

    let gradient = LinearGradient {
        start: p1,
        end: p2,
        stops,
    };
    canvas.fill_path_linear(&Path::rect(quad), &gradient);
}

/// Fill `quad` with a repeating dot pattern
///
/// Dots repeat at [`tune::DOT_PERIOD`] on both axes. Used for grip handles.
pub fn dot_pattern(canvas: &mut dyn Canvas, quad: Quad, col: Rgba) {
    if quad.is_empty() {
        return;
    }
    let period = tune::DOT_PERIOD;
    let mut y = quad.a.1 + 0.5 * period;
    while y < quad.b.1 {
        let mut x = quad.a.0 + 0.5 * period;
        while x < quad.b.0 {
            canvas.fill_path(&Path::circle(Vec2(x, y), 1.0), col);
            x += period;
        }
        y += period;
    }
}

/// Fill `quad` with repeating stripes
///
/// Stripes repeat at [`tune::STRIPE_PERIOD`], half filled, half clear,
/// running across the given axis. Used for striped progress fills.
pub fn stripes(canvas: &mut dyn Canvas, quad: Quad, col: Rgba, vertical: bool) {
    if quad.is_empty() {
        return;
    }
    let period = tune::STRIPE_PERIOD;
    let band = 0.5 * period;
    if vertical {
        let mut y = quad.a.1;
        while y < quad.b.1 {
            let b1 = (y + band).min(quad.b.1);
            canvas.fill_path(
                &Path::rect(Quad::from_coords(Vec2(quad.a.0, y), Vec2(quad.b.0, b1))),
                col,
            );
            y += period;
        }
    } else {
        let mut x = quad.a.0;
        while x < quad.b.0 {
            let b0 = (x + band).min(quad.b.0);
            canvas.fill_path(
                &Path::rect(Quad::from_coords(Vec2(x, quad.a.1), Vec2(b0, quad.b.1))),
                col,
            );
            x += period;
        }
    }
}

/// Draw a group of short parallel strokes centred on `center`
///
/// `count` strokes of length [`tune::DASH_LEN`] are laid out perpendicular
/// to `dir` with [`tune::DASH_SPACING`] between them. The etched variant
/// (`etch_model` set) draws a second parallel line offset by 1px in a
/// complementary shade, simulating a groove. Used for splitters and
/// slider-thumb markings.
pub fn dash_group(
    canvas: &mut dyn Canvas,
    center: Vec2,
    count: u32,
    dir: Direction,
    col: Rgba,
    etch_model: Option<ShadeModel>,
) {
    if count == 0 {
        return;
    }
    let half_len = 0.5 * tune::DASH_LEN;
    let total = tune::DASH_SPACING * (count - 1) as f32;
    let mut offset = -0.5 * total;
    for _ in 0..count {
        let (p1, p2) = if dir.is_horizontal() {
            // strokes run vertically, spaced along x
            (
                Vec2(center.0 + offset, center.1 - half_len),
                Vec2(center.0 + offset, center.1 + half_len),
            )
        } else {
            (
                Vec2(center.0 - half_len, center.1 + offset),
                Vec2(center.0 + half_len, center.1 + offset),
            )
        };
        canvas.stroke_path(&Path::line(p1, p2), col, 1.0);
        if let Some(model) = etch_model {
            let light = shade::shade(col, ShadeSpec::new(tune::RELIEF_LIGHT_FACTOR, model));
            let off = if dir.is_horizontal() {
                Vec2(1.0, 0.0)
            } else {
                Vec2(0.0, 1.0)
            };
            canvas.stroke_path(&Path::line(p1 + off, p2 + off), light, 1.0);
        }
        offset += tune::DASH_SPACING;
    }
}

/// Draw a triangular arrow mark filling `quad`, pointing in `dir`
///
/// Optionally strokes a 1px darker edge. Used for combo, spin and
/// scrollbar arrows.
pub fn arrow(canvas: &mut dyn Canvas, quad: Quad, dir: Direction, col: Rgba, edge: Option<Rgba>) {
    if quad.is_empty() {
        return;
    }
    let Quad { a, b } = quad;
    let mid = quad.center();
    let (p1, p2, p3) = match dir {
        Direction::Up => (Vec2(a.0, b.1), Vec2(mid.0, a.1), Vec2(b.0, b.1)),
        Direction::Down => (Vec2(a.0, a.1), Vec2(mid.0, b.1), Vec2(b.0, a.1)),
        Direction::Left => (Vec2(b.0, a.1), Vec2(a.0, mid.1), Vec2(b.0, b.1)),
        Direction::Right => (Vec2(a.0, a.1), Vec2(b.0, mid.1), Vec2(a.0, b.1)),
    };
    let path = Path::polygon(&[p1, p2, p3]);
    canvas.fill_path(&path, col);
    if let Some(edge) = edge {
        canvas.stroke_path(&path, edge, 1.0);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::draw::PathEl;

    struct Count {
        fills: usize,
        gradients: usize,
        strokes: usize,
        last_path_points: usize,
    }

    impl Count {
        fn new() -> Self {
            Count {
                fills: 0,
                gradients: 0,
                strokes: 0,
                last_path_points: 0,
            }
        }
    }

    impl Canvas for Count {
        fn fill_path(&mut self, path: &Path, _: Rgba) {
            self.fills += 1;
            self.last_path_points = path
                .elements()
                .iter()
                .filter(|el| matches!(el, PathEl::Move(_) | PathEl::Line(_)))
                .count();
        }
        fn fill_path_linear(&mut self, _: &Path, _: &LinearGradient) {
            self.gradients += 1;
        }
        fn fill_path_radial(&mut self, _: &Path, _: &crate::draw::RadialGradient) {}
        fn stroke_path(&mut self, _: &Path, _: Rgba, _: f32) {
            self.strokes += 1;
        }
        fn push_clip(&mut self, _: &Path) {}
        fn push_clip_xor(&mut self, _: crate::geom::Rect) {}
        fn pop_clip(&mut self) {}
    }

    #[test]
    fn faded_line_is_one_gradient_fill() {
        let mut canvas = Count::new();
        faded_line(
            &mut canvas,
            Vec2(0.0, 10.0),
            Vec2(100.0, 10.0),
            Rgba::BLACK,
            1.0,
        );
        assert_eq!(canvas.gradients, 1);

        // zero-length line draws nothing
        faded_line(
            &mut canvas,
            Vec2(5.0, 5.0),
            Vec2(5.0, 5.0),
            Rgba::BLACK,
            1.0,
        );
        assert_eq!(canvas.gradients, 1);
    }

    #[test]
    fn dash_group_counts() {
        let mut canvas = Count::new();
        dash_group(
            &mut canvas,
            Vec2(20.0, 20.0),
            3,
            Direction::Right,
            Rgba::BLACK,
            None,
        );
        assert_eq!(canvas.strokes, 3);

        let mut canvas = Count::new();
        dash_group(
            &mut canvas,
            Vec2(20.0, 20.0),
            3,
            Direction::Down,
            Rgba::BLACK,
            Some(ShadeModel::Simple),
        );
        assert_eq!(canvas.strokes, 6);
    }

    #[test]
    fn arrow_is_triangle() {
        let mut canvas = Count::new();
        arrow(
            &mut canvas,
            Quad::from_coords(Vec2(0.0, 0.0), Vec2(8.0, 8.0)),
            Direction::Down,
            Rgba::BLACK,
            None,
        );
        assert_eq!(canvas.fills, 1);
        assert_eq!(canvas.last_path_points, 3);
        assert_eq!(canvas.strokes, 0);
    }

    #[test]
    fn stripes_fill_half_period_bands() {
        let mut canvas = Count::new();
        stripes(
            &mut canvas,
            Quad::from_coords(Vec2(0.0, 0.0), Vec2(32.0, 8.0)),
            Rgba::BLACK,
            false,
        );
        // 32px at a period of 8 is four bands
        assert_eq!(canvas.fills, 4);
    }
}
