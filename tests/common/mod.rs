// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A canvas double recording every draw call

use veneer::draw::color::Rgba;
use veneer::draw::{Canvas, ColorStop, LinearGradient, Path, RadialGradient};
use veneer::geom::{Quad, Rect, Vec2};

/// One recorded canvas call
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Fill {
        color: Rgba,
    },
    FillLinear {
        start: Vec2,
        end: Vec2,
        stops: Vec<ColorStop>,
    },
    FillRadial {
        stops: Vec<ColorStop>,
    },
    Stroke {
        color: Rgba,
        width: f32,
        bounds: Option<Quad>,
    },
    PushClip,
    PushClipXor(Rect),
    PopClip,
}

/// Recording double driving the call-sequence assertions
#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Call>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn solid_fills(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Fill { .. }))
            .count()
    }

    pub fn gradient_fills(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::FillLinear { .. } | Call::FillRadial { .. }))
            .count()
    }

    /// The stroke calls, in emission order
    pub fn strokes(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Stroke { .. }))
            .collect()
    }

    /// Alpha of each stroke, in emission order
    pub fn stroke_alphas(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Stroke { color, .. } => Some(color.a),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_path(&mut self, _: &Path, color: Rgba) {
        self.calls.push(Call::Fill { color });
    }

    fn fill_path_linear(&mut self, _: &Path, gradient: &LinearGradient) {
        self.calls.push(Call::FillLinear {
            start: gradient.start,
            end: gradient.end,
            stops: gradient.stops.to_vec(),
        });
    }

    fn fill_path_radial(&mut self, _: &Path, gradient: &RadialGradient) {
        self.calls.push(Call::FillRadial {
            stops: gradient.stops.to_vec(),
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) {
        self.calls.push(Call::Stroke {
            color,
            width,
            bounds: path.bounds(),
        });
    }

    fn push_clip(&mut self, _: &Path) {
        self.calls.push(Call::PushClip);
    }

    fn push_clip_xor(&mut self, rect: Rect) {
        self.calls.push(Call::PushClipXor(rect));
    }

    fn pop_clip(&mut self) {
        self.calls.push(Call::PopClip);
    }
}
