// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`] and [`Size`] are 2D integer (`i32`) types used for widget
//! geometry as supplied by the toolkit binding. [`Vec2`] and [`Quad`] are 2D
//! floating-point (`f32`) types used for drawing-space positions.
//!
//! Conversions use [`Conv`] and [`Cast`] from the [`crate::cast`] re-export.

use crate::cast::*;

/// A 2D coordinate (position of a widget's top-left pixel)
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub i32, pub i32);

impl Coord {
    /// The constant `(0, 0)`
    pub const ZERO: Self = Self(0, 0);

    /// Construct
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }

    /// Construct, using the same value on both axes
    #[inline]
    pub const fn splat(n: i32) -> Self {
        Self(n, n)
    }
}

impl std::ops::Add<Size> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Size) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

/// A 2D size (widget extent)
///
/// A `Size` is expected to be non-negative. Degenerate (zero or negative)
/// extents are valid *inputs* to the renderer and produce degenerate output;
/// they are never an error.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size(pub i32, pub i32);

impl Size {
    /// The constant `(0, 0)`
    pub const ZERO: Self = Self(0, 0);

    /// Construct
    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self(w, h)
    }

    /// Construct, using the same value on both axes
    #[inline]
    pub const fn splat(n: i32) -> Self {
        Self(n, n)
    }

    /// The smaller dimension
    #[inline]
    pub fn min_comp(self) -> i32 {
        self.0.min(self.1)
    }
}

/// An axis-aligned rectangular region
///
/// The region is defined by a point `pos` and an extent `size`. It is empty
/// unless `size` is positive on both axes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: Coord,
    pub size: Size,
}

impl Rect {
    /// The empty rect (all fields zero)
    pub const ZERO: Self = Self::new(Coord::ZERO, Size::ZERO);

    /// Construct from a [`Coord`] and [`Size`]
    #[inline]
    pub const fn new(pos: Coord, size: Size) -> Self {
        Rect { pos, size }
    }

    /// Construct from raw position and extent values
    #[inline]
    pub const fn xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect::new(Coord::new(x, y), Size::new(w, h))
    }

    /// Get the second corner (`pos + size`)
    #[inline]
    pub fn pos2(&self) -> Coord {
        self.pos + self.size
    }

    /// True unless both extents are positive
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.0 <= 0 || self.size.1 <= 0
    }

    /// Shrink self in all directions by the given `n`
    ///
    /// The result may be degenerate; it is never an error.
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn shrink(&self, n: i32) -> Rect {
        Rect {
            pos: Coord(self.pos.0 + n, self.pos.1 + n),
            size: Size(self.size.0 - n - n, self.size.1 - n - n),
        }
    }

    /// Calculate the intersection of two rects
    #[inline]
    pub fn intersection(&self, rhs: &Rect) -> Option<Rect> {
        let (l1, l2) = (self.pos, self.pos2());
        let (r1, r2) = (rhs.pos, rhs.pos2());
        let pos = Coord(l1.0.max(r1.0), l1.1.max(r1.1));
        let pos2 = Coord(l2.0.min(r2.0), l2.1.min(r2.1));
        if pos.0 <= pos2.0 && pos.1 <= pos2.1 {
            Some(Rect::new(pos, Size(pos2.0 - pos.0, pos2.1 - pos.1)))
        } else {
            None
        }
    }
}

/// 2D vector in drawing space
///
/// Vectors support component-wise comparison via methods like `lhs.le(rhs)`;
/// `PartialOrd` is deliberately not implemented.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2(pub f32, pub f32);

impl Vec2 {
    /// Zero
    pub const ZERO: Vec2 = Vec2::splat(0.0);

    /// Constructs a new instance with each element initialized to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Vec2(value, value)
    }

    /// Take the minimum component
    #[inline]
    pub fn min_comp(self) -> f32 {
        self.0.min(self.1)
    }

    /// True when for all components, `lhs ≤ rhs`
    #[inline]
    pub fn le(self, rhs: Self) -> bool {
        self.0 <= rhs.0 && self.1 <= rhs.1
    }

    /// True when for all components, `lhs < rhs`
    #[inline]
    pub fn lt(self, rhs: Self) -> bool {
        self.0 < rhs.0 && self.1 < rhs.1
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl std::ops::Add<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        Vec2(self.0 + rhs, self.1 + rhs)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl std::ops::Sub<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        Vec2(self.0 - rhs, self.1 - rhs)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

impl Conv<Coord> for Vec2 {
    #[inline]
    fn try_conv(arg: Coord) -> Result<Self> {
        Ok(Vec2(arg.0.try_cast()?, arg.1.try_cast()?))
    }
}

impl Conv<Size> for Vec2 {
    #[inline]
    fn try_conv(arg: Size) -> Result<Self> {
        Ok(Vec2(arg.0.try_cast()?, arg.1.try_cast()?))
    }
}

/// Axis-aligned 2D cuboid in drawing space, specified via two corners
///
/// Typically it is expected that `a.le(b)`, although this is not required.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad {
    pub a: Vec2,
    pub b: Vec2,
}

impl Quad {
    /// Construct with two coords
    #[inline]
    pub fn from_coords(a: Vec2, b: Vec2) -> Self {
        Quad { a, b }
    }

    /// Get the size
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.b - self.a
    }

    /// Get the centre point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2(0.5 * (self.a.0 + self.b.0), 0.5 * (self.a.1 + self.b.1))
    }

    /// True unless both extents are positive
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.a.lt(self.b)
    }

    /// Shrink self in all directions by the given `value`
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn shrink(&self, value: f32) -> Quad {
        Quad {
            a: self.a + value,
            b: self.b - value,
        }
    }

    /// Grow self in all directions by the given `value`
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn grow(&self, value: f32) -> Quad {
        Quad {
            a: self.a - value,
            b: self.b + value,
        }
    }
}

impl Conv<Rect> for Quad {
    #[inline]
    fn try_conv(rect: Rect) -> Result<Self> {
        let a = Vec2::try_conv(rect.pos)?;
        let b = a + Vec2::try_conv(rect.size)?;
        Ok(Quad { a, b })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rect_shrink_and_intersection() {
        let r = Rect::xywh(2, 3, 10, 8);
        assert_eq!(r.shrink(1), Rect::xywh(3, 4, 8, 6));
        assert!(r.shrink(5).is_empty());

        let s = Rect::xywh(8, 0, 10, 10);
        assert_eq!(r.intersection(&s), Some(Rect::xywh(8, 3, 4, 8)));
        assert_eq!(r.intersection(&Rect::xywh(100, 100, 1, 1)), None);
    }

    #[test]
    fn quad_conv() {
        let q = Quad::conv(Rect::xywh(1, 2, 3, 4));
        assert_eq!(q.a, Vec2(1.0, 2.0));
        assert_eq!(q.b, Vec2(4.0, 6.0));
        assert_eq!(q.center(), Vec2(2.5, 4.0));
    }
}
