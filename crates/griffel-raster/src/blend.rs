// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Multiplicative ("multiply" mode) blending.

use griffel_core::error::{GriffelError, Result};
use griffel_core::Image;
use image::{GrayImage, ImageBuffer, Pixel};

/// `round(a * b / 255)` for one sample. Never exceeds `min(a, b)`.
#[inline]
pub fn multiply_sample(a: u8, b: u8) -> u8 {
    // a*b/255 is never exactly halfway between integers, so adding 127
    // before the division rounds to nearest.
    ((a as u32 * b as u32 + 127) / 255) as u8
}

/// Per-channel multiply blend of two equally sized buffers.
pub fn multiply<P>(
    a: &ImageBuffer<P, Vec<u8>>,
    b: &ImageBuffer<P, Vec<u8>>,
) -> Result<ImageBuffer<P, Vec<u8>>>
where
    P: Pixel<Subpixel = u8>,
{
    if a.dimensions() != b.dimensions() {
        return Err(GriffelError::ShapeMismatch {
            expected: format!("{}x{}", a.width(), a.height()),
            actual: format!("{}x{}", b.width(), b.height()),
        });
    }

    let mut out = a.clone();
    for (dst, &src) in out.iter_mut().zip(b.iter()) {
        *dst = multiply_sample(*dst, src);
    }
    Ok(out)
}

/// Multiply blend of two [`Image`]s of the same shape and depth.
pub fn multiply_image(a: &Image, b: &Image) -> Result<Image> {
    match (a, b) {
        (Image::Gray(x), Image::Gray(y)) => multiply::<image::Luma<u8>>(x, y).map(Image::Gray),
        (Image::Color(x), Image::Color(y)) => multiply(x, y).map(Image::Color),
        _ => Err(GriffelError::ShapeMismatch {
            expected: a.shape(),
            actual: b.shape(),
        }),
    }
}

/// Multiply blend on luma buffers.
pub fn multiply_gray(a: &GrayImage, b: &GrayImage) -> Result<GrayImage> {
    multiply(a, b)
}
