// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// griffel-raster: Low-level raster operations used by the scribble effect.
//
// Provides colour-space conversion (BGR, luma, HSV), multiplicative blending,
// thick polyline rasterization, Sobel edge maps, masked pixel noise, and a
// small Gaussian softening filter. Built on the `image` and `imageproc` crates.

pub mod blend;
pub mod color;
pub mod draw;
pub mod edges;
pub mod filter;
pub mod noise;

pub use blend::{multiply, multiply_image};
pub use draw::draw_polyline;
pub use noise::{NoiseMode, add_noise};
