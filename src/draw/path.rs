// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Rounded-rectangle path construction
//!
//! [`RoundedRect`] builds the path variants the layered renderer consumes:
//! the whole outline, the top-left and bottom-right half outlines (used for
//! two-tone relief strokes; corner arcs are split on the 45° diagonal so the
//! two halves tile the full outline), and a clip region with an optional
//! rectangular gap to be XOR-cut by the canvas (the tab-attachment gap).
//!
//! Angles follow screen-space convention: 0 is towards +x, angles increase
//! towards +y (clockwise on screen). Corner arcs are quarter circles.

use crate::geom::{Quad, Rect, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};

bitflags! {
    /// Selects which corners of a rectangle are rounded
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CornerMask: u8 {
        /// No rounding: all arcs degrade to square corners
        const NONE = 0;
        const TL = 1 << 0;
        const TR = 1 << 1;
        const BR = 1 << 2;
        const BL = 1 << 3;
        const TOP = Self::TL.bits() | Self::TR.bits();
        const BOTTOM = Self::BL.bits() | Self::BR.bits();
        const LEFT = Self::TL.bits() | Self::BL.bits();
        const RIGHT = Self::TR.bits() | Self::BR.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// A single path element
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathEl {
    /// Begin a new sub-path at the given point
    Move(Vec2),
    /// Straight segment to the given point
    Line(Vec2),
    /// Circular arc: centre `c`, radius `r`, from angle `a0` to `a1`
    Arc { c: Vec2, r: f32, a0: f32, a1: f32 },
    /// Close the current sub-path
    Close,
}

/// A path as an ordered list of elements
///
/// This is a plain value; the canvas interprets it. An empty path is the
/// degenerate output for empty geometry and is valid everywhere a path is
/// accepted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path(Vec<PathEl>);

impl Path {
    /// Construct an empty path
    #[inline]
    pub fn new() -> Self {
        Path(Vec::new())
    }

    /// True if the path contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the element list
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Count arc elements (mostly useful in tests)
    pub fn arc_count(&self) -> usize {
        self.0
            .iter()
            .filter(|el| matches!(el, PathEl::Arc { .. }))
            .count()
    }

    /// Compute the bounding box over all elements
    ///
    /// Returns `None` for an empty path. Arc bounds include the end points
    /// and any axis extreme crossed by the sweep.
    pub fn bounds(&self) -> Option<Quad> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        let mut any = false;
        let mut include = |p: Vec2| {
            min = Vec2(min.0.min(p.0), min.1.min(p.1));
            max = Vec2(max.0.max(p.0), max.1.max(p.1));
        };
        for el in &self.0 {
            match *el {
                PathEl::Move(p) | PathEl::Line(p) => {
                    include(p);
                    any = true;
                }
                PathEl::Arc { c, r, a0, a1 } => {
                    include(arc_point(c, r, a0));
                    include(arc_point(c, r, a1));
                    let (lo, hi) = (a0.min(a1), a0.max(a1));
                    // axis extremes at multiples of π/2 within the sweep
                    let mut k = (lo / FRAC_PI_2).ceil();
                    while k * FRAC_PI_2 <= hi {
                        include(arc_point(c, r, k * FRAC_PI_2));
                        k += 1.0;
                    }
                    any = true;
                }
                PathEl::Close => (),
            }
        }
        any.then(|| Quad::from_coords(min, max))
    }

    /// An axis-aligned rectangle outline
    ///
    /// Degenerate quads yield an empty path.
    pub fn rect(quad: Quad) -> Path {
        let mut path = Path::new();
        if quad.is_empty() {
            return path;
        }
        let Quad { a, b } = quad;
        path.move_to(a);
        path.line_to(Vec2(b.0, a.1));
        path.line_to(b);
        path.line_to(Vec2(a.0, b.1));
        path.push(PathEl::Close);
        path
    }

    /// A single straight segment
    pub fn line(p1: Vec2, p2: Vec2) -> Path {
        let mut path = Path::new();
        path.move_to(p1);
        path.line_to(p2);
        path
    }

    /// A closed polygon through the given points
    ///
    /// Fewer than three points yield an empty path.
    pub fn polygon(points: &[Vec2]) -> Path {
        let mut path = Path::new();
        if points.len() < 3 {
            return path;
        }
        path.move_to(points[0]);
        for p in &points[1..] {
            path.line_to(*p);
        }
        path.push(PathEl::Close);
        path
    }

    /// A full circle of radius `r` about `c`
    pub fn circle(c: Vec2, r: f32) -> Path {
        Self::arc_span(c, r, 0.0, 2.0 * PI)
    }

    /// A circular arc of radius `r` about `c` from angle `a0` to `a1`
    ///
    /// A non-positive radius yields an empty path.
    pub fn arc_span(c: Vec2, r: f32, a0: f32, a1: f32) -> Path {
        let mut path = Path::new();
        if r <= 0.0 {
            return path;
        }
        path.move_to(arc_point(c, r, a0));
        path.arc(c, r, a0, a1);
        path
    }

    fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    fn move_to(&mut self, p: Vec2) {
        self.push(PathEl::Move(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.push(PathEl::Line(p));
    }

    fn arc(&mut self, c: Vec2, r: f32, a0: f32, a1: f32) {
        self.push(PathEl::Arc { c, r, a0, a1 });
    }
}

fn arc_point(c: Vec2, r: f32, a: f32) -> Vec2 {
    Vec2(c.0 + r * a.cos(), c.1 + r * a.sin())
}

/// A clip shape: a path plus an optional rectangular gap
///
/// The gap is XOR-cut from the region by the canvas, leaving a hole through
/// which no drawing occurs (used where a tab attaches to its frame).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipRegion {
    pub path: Path,
    pub gap: Option<Rect>,
}

/// Rounded-rectangle path builder
///
/// The radius is clamped on construction so it never exceeds half the
/// smaller rect dimension; an empty [`CornerMask`] degrades every corner to
/// a square one. Degenerate rects yield empty paths from every builder.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundedRect {
    quad: Quad,
    radius: f32,
    corners: CornerMask,
}

impl RoundedRect {
    /// Construct, clamping `radius` to the geometry
    pub fn new(quad: Quad, radius: f32, corners: CornerMask) -> Self {
        let size = quad.size();
        let max_radius = 0.5 * size.min_comp().max(0.0);
        let radius = radius.clamp(0.0, max_radius);
        RoundedRect {
            quad,
            radius,
            corners,
        }
    }

    /// Effective radius at one corner
    #[inline]
    fn r(&self, corner: CornerMask) -> f32 {
        if self.corners.contains(corner) {
            self.radius
        } else {
            0.0
        }
    }

    /// Build the whole outline
    pub fn outline(&self) -> Path {
        let mut path = Path::new();
        if self.quad.is_empty() {
            return path;
        }
        let Quad { a, b } = self.quad;
        let (rtl, rtr, rbr, rbl) = (
            self.r(CornerMask::TL),
            self.r(CornerMask::TR),
            self.r(CornerMask::BR),
            self.r(CornerMask::BL),
        );

        path.move_to(Vec2(a.0 + rtl, a.1));
        path.line_to(Vec2(b.0 - rtr, a.1));
        if rtr > 0.0 {
            path.arc(Vec2(b.0 - rtr, a.1 + rtr), rtr, -FRAC_PI_2, 0.0);
        }
        path.line_to(Vec2(b.0, b.1 - rbr));
        if rbr > 0.0 {
            path.arc(Vec2(b.0 - rbr, b.1 - rbr), rbr, 0.0, FRAC_PI_2);
        }
        path.line_to(Vec2(a.0 + rbl, b.1));
        if rbl > 0.0 {
            path.arc(Vec2(a.0 + rbl, b.1 - rbl), rbl, FRAC_PI_2, PI);
        }
        path.line_to(Vec2(a.0, a.1 + rtl));
        if rtl > 0.0 {
            path.arc(Vec2(a.0 + rtl, a.1 + rtl), rtl, PI, 1.5 * PI);
        }
        path.push(PathEl::Close);
        path
    }

    /// Build the top-left half outline (lighter relief stroke)
    ///
    /// Runs from the bottom-left to the top-right of the rect: the upper
    /// half of the BL arc, the left edge, the full TL arc, the top edge and
    /// the left half of the TR arc.
    pub fn top_left_half(&self) -> Path {
        let mut path = Path::new();
        if self.quad.is_empty() {
            return path;
        }
        let Quad { a, b } = self.quad;
        let (rtl, rtr, rbl) = (
            self.r(CornerMask::TL),
            self.r(CornerMask::TR),
            self.r(CornerMask::BL),
        );

        if rbl > 0.0 {
            let c = Vec2(a.0 + rbl, b.1 - rbl);
            path.move_to(arc_point(c, rbl, 0.75 * PI));
            path.arc(c, rbl, 0.75 * PI, PI);
        } else {
            path.move_to(Vec2(a.0, b.1));
        }
        path.line_to(Vec2(a.0, a.1 + rtl));
        if rtl > 0.0 {
            path.arc(Vec2(a.0 + rtl, a.1 + rtl), rtl, PI, 1.5 * PI);
        }
        path.line_to(Vec2(b.0 - rtr, a.1));
        if rtr > 0.0 {
            let c = Vec2(b.0 - rtr, a.1 + rtr);
            path.arc(c, rtr, 1.5 * PI, 1.75 * PI);
        }
        path
    }

    /// Build the bottom-right half outline (darker relief stroke)
    ///
    /// The complement of [`Self::top_left_half`]: the remainder of the TR
    /// arc, the right edge, the full BR arc, the bottom edge and the lower
    /// half of the BL arc.
    pub fn bottom_right_half(&self) -> Path {
        let mut path = Path::new();
        if self.quad.is_empty() {
            return path;
        }
        let Quad { a, b } = self.quad;
        let (rtr, rbr, rbl) = (
            self.r(CornerMask::TR),
            self.r(CornerMask::BR),
            self.r(CornerMask::BL),
        );

        if rtr > 0.0 {
            let c = Vec2(b.0 - rtr, a.1 + rtr);
            path.move_to(arc_point(c, rtr, -0.25 * PI));
            path.arc(c, rtr, -0.25 * PI, 0.0);
        } else {
            path.move_to(Vec2(b.0, a.1));
        }
        path.line_to(Vec2(b.0, b.1 - rbr));
        if rbr > 0.0 {
            path.arc(Vec2(b.0 - rbr, b.1 - rbr), rbr, 0.0, FRAC_PI_2);
        }
        path.line_to(Vec2(a.0 + rbl, b.1));
        if rbl > 0.0 {
            let c = Vec2(a.0 + rbl, b.1 - rbl);
            path.arc(c, rbl, FRAC_PI_2, 0.75 * PI);
        }
        path
    }

    /// Build a clip region, optionally cutting a rectangular `gap`
    pub fn clip_region(&self, gap: Option<Rect>) -> ClipRegion {
        ClipRegion {
            path: self.outline(),
            gap,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cast::Conv;

    #[test]
    fn no_mask_is_plain_rect() {
        let quad = Quad::conv(Rect::xywh(3, 5, 20, 10));
        let rr = RoundedRect::new(quad, 6.0, CornerMask::NONE);
        let path = rr.outline();
        assert_eq!(path.arc_count(), 0);
        assert_eq!(path.bounds(), Some(quad));
    }

    #[test]
    fn top_mask_rounds_top_corners_only() {
        let quad = Quad::conv(Rect::xywh(0, 0, 50, 20));
        let rr = RoundedRect::new(quad, 4.0, CornerMask::TOP);
        let path = rr.outline();
        assert_eq!(path.arc_count(), 2);
        for el in path.elements() {
            if let PathEl::Arc { c, r, .. } = el {
                assert_eq!(*r, 4.0);
                assert_eq!(c.1, 4.0); // both arc centres on the top corner row
            }
        }
        // bottom edge is a straight segment between the two rect corners
        let els = path.elements();
        assert!(els.contains(&PathEl::Line(Vec2(50.0, 20.0))));
        assert!(els.contains(&PathEl::Line(Vec2(0.0, 20.0))));
    }

    #[test]
    fn radius_clamped_to_half_extent() {
        let quad = Quad::conv(Rect::xywh(0, 0, 40, 6));
        let rr = RoundedRect::new(quad, 10.0, CornerMask::ALL);
        for el in rr.outline().elements() {
            if let PathEl::Arc { r, .. } = el {
                assert_eq!(*r, 3.0);
            }
        }
    }

    #[test]
    fn degenerate_rect_is_empty_path() {
        let quad = Quad::conv(Rect::xywh(5, 5, 0, 10));
        let rr = RoundedRect::new(quad, 4.0, CornerMask::ALL);
        assert!(rr.outline().is_empty());
        assert!(rr.top_left_half().is_empty());
        assert!(rr.bottom_right_half().is_empty());
        assert!(rr.clip_region(None).path.is_empty());
    }

    #[test]
    fn halves_tile_the_outline() {
        let quad = Quad::conv(Rect::xywh(0, 0, 30, 30));
        let rr = RoundedRect::new(quad, 5.0, CornerMask::ALL);
        let tl = rr.top_left_half();
        let br = rr.bottom_right_half();
        // four quarter corners total, two half arcs each side of the split
        assert_eq!(tl.arc_count(), 3);
        assert_eq!(br.arc_count(), 3);

        // the two halves start/end on the 45° diagonal of the shared corners
        let first_tl = tl.elements().first().unwrap();
        if let PathEl::Move(p) = first_tl {
            let c = Vec2(5.0, 25.0);
            let d = ((p.0 - c.0).powi(2) + (p.1 - c.1).powi(2)).sqrt();
            assert!((d - 5.0).abs() < 1e-4);
        } else {
            panic!("expected Move, got {first_tl:?}");
        }
    }
}
