// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Veneer: widget appearance compositing
//!
//! Veneer turns a widget's kind, interaction state and geometry into an
//! ordered sequence of fill, stroke, gradient and clip operations against an
//! abstract [`draw::Canvas`]. It does not talk to any toolkit directly: a
//! toolkit binding classifies widgets, builds a [`theme::RenderRequest`] per
//! paint event and hands both to [`theme::render`] together with a
//! previously built [`theme::Theme`].
//!
//! The crate is split into three modules:
//!
//! -   [`geom`]: integer and floating-point geometry
//! -   [`draw`]: colors, shading models, path construction and the consumed
//!     [`draw::Canvas`] capability
//! -   [`theme`]: palettes, gradient tables, widget classification and the
//!     layered renderer
//!
//! All rendering entry points are total: out-of-range numeric inputs are
//! clamped and degenerate geometry yields degenerate-but-valid output.

#![allow(clippy::identity_op)]

#[macro_use]
extern crate bitflags;

pub extern crate easy_cast as cast;

pub mod dir;
pub mod draw;
pub mod geom;
pub mod theme;
