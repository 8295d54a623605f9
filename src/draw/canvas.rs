// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Drawing APIs — the consumed canvas capability
//!
//! [`Canvas`] is the minimal immediate-mode surface the compositing engine
//! draws to. Implementations are supplied by the toolkit binding (a vector
//! backend, a software rasterizer, or a recording double in tests). All
//! methods are infallible: a backend unable to honour an operation drops it.
//!
//! Gradient stops handed to the canvas are fully resolved: shade factors and
//! alpha multipliers have already been applied by the engine, so a stop is a
//! plain `(position, colour)` pair.

use super::color::Rgba;
use super::path::{ClipRegion, Path};
use crate::geom::{Rect, Vec2};
use smallvec::SmallVec;

/// Maximum number of stops stored inline
///
/// Resolved gradients never exceed this in practice (the richest appearance
/// tables produce 8 stops); more simply spill to the heap.
pub const STOP_INLINE: usize = 8;

/// An ordered gradient stop with a resolved colour
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient axis, in `[0, 1]`
    pub pos: f32,
    pub color: Rgba,
}

impl ColorStop {
    /// Construct
    #[inline]
    pub fn new(pos: f32, color: Rgba) -> Self {
        ColorStop { pos, color }
    }
}

/// A linear gradient along an axis from `start` to `end`
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: SmallVec<[ColorStop; STOP_INLINE]>,
}

/// A radial gradient from `center` out to `radius`
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: SmallVec<[ColorStop; STOP_INLINE]>,
}

/// Base abstraction over drawing
///
/// The engine issues a bounded number of calls per render (a few dozen path,
/// fill and stroke operations); the canvas may batch or re-order them only
/// within a clip scope. Clip scopes nest: every `push_clip` /
/// `push_clip_xor` must be balanced by a `pop_clip`, which the engine
/// guarantees.
pub trait Canvas {
    /// Fill `path` with a uniform colour
    fn fill_path(&mut self, path: &Path, col: Rgba);

    /// Fill `path` with a linear gradient
    fn fill_path_linear(&mut self, path: &Path, gradient: &LinearGradient);

    /// Fill `path` with a radial gradient
    fn fill_path_radial(&mut self, path: &Path, gradient: &RadialGradient);

    /// Stroke `path` with a constant-width pen
    fn stroke_path(&mut self, path: &Path, col: Rgba, width: f32);

    /// Push a clip scope restricted to `path`
    fn push_clip(&mut self, path: &Path);

    /// Push a clip scope with `rect` XOR-cut out of the current region
    ///
    /// Drawing inside `rect` is suppressed until the matching
    /// [`Self::pop_clip`]. Used to cut the gap where a tab attaches to its
    /// frame.
    fn push_clip_xor(&mut self, rect: Rect);

    /// Pop the innermost clip scope
    fn pop_clip(&mut self);
}

/// Apply a [`ClipRegion`] to a canvas, run `f`, then unwind
///
/// This keeps the push/pop pairing in one place; the region's gap (if any)
/// is XOR-cut inside the path clip.
pub fn with_clip<C: Canvas + ?Sized>(canvas: &mut C, region: &ClipRegion, f: impl FnOnce(&mut C)) {
    canvas.push_clip(&region.path);
    if let Some(gap) = region.gap {
        canvas.push_clip_xor(gap);
    }
    f(canvas);
    if region.gap.is_some() {
        canvas.pop_clip();
    }
    canvas.pop_clip();
}
