// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Drawing APIs
//!
//! This module hosts the colour types and shading math, rounded-rectangle
//! path construction, and the [`Canvas`] capability consumed by the
//! renderer.

pub mod color;
pub mod shade;

mod canvas;
mod path;

pub use canvas::{Canvas, ColorStop, LinearGradient, RadialGradient, STOP_INLINE, with_clip};
pub use path::{ClipRegion, CornerMask, Path, PathEl, RoundedRect};
