// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Theme APIs
//!
//! A [`Theme`] is an immutable value bundling the built [`Palette`], the
//! [`Options`] it was built from and the [`GradientTable`]. It is
//! constructed once per configuration (re)load and passed by reference into
//! every [`Theme::render`] call; the engine holds no ambient global state.

pub mod effects;
pub mod tune;

mod gradient;
mod options;
mod palette;
mod render;
mod widget;

pub use gradient::{Appearance, GradientBorder, GradientDef, GradientStop, GradientTable, StopValue};
pub use options::{Options, Rounding};
pub use palette::{BaseColors, Bucket, Palette};
pub use render::render;
pub use widget::{
    BorderProfile, Decoration, InteractionState, KindTraits, RenderFlags, RenderRequest, WidgetKind,
};

use crate::draw::Canvas;

/// A fully built theme
///
/// Lifecycle: build once when configuration loads (`Theme::new`), share
/// read-only across all subsequent renders, rebuild wholesale on an
/// explicit reconfiguration. No interior mutability, no locking.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub options: Options,
    pub gradients: GradientTable,
}

impl Theme {
    /// Build from options
    pub fn new(options: Options) -> Self {
        let palette = Palette::build(&options.colors, options.model, options.contrast);
        let gradients = GradientTable::build();
        Theme {
            palette,
            options,
            gradients,
        }
    }

    /// Render one widget skin
    ///
    /// Pure apart from the draw calls issued to `canvas`: the same theme and
    /// request always produce the same call sequence. Total over the input
    /// domain; degenerate geometry renders nothing.
    #[inline]
    pub fn render(&self, req: &RenderRequest, canvas: &mut dyn Canvas) {
        render::render(self, req, canvas);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(Options::default())
    }
}
