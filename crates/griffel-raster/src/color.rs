// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour conversions on BGR-ordered buffers: luma, channel-depth changes,
// and HSV value shifting.

use griffel_core::{ChannelDepth, Image};
use image::{GrayImage, Luma, Rgb, RgbImage};

// BT.601 luma weights in 14-bit fixed point. They sum to 1 << 14, so neutral
// pixels convert without rounding drift.
const LUMA_B: u32 = 1868;
const LUMA_G: u32 = 9617;
const LUMA_R: u32 = 4899;
const LUMA_SHIFT: u32 = 14;

/// Luma of one BGR pixel.
pub fn bgr_luma([b, g, r]: [u8; 3]) -> u8 {
    let weighted = b as u32 * LUMA_B + g as u32 * LUMA_G + r as u32 * LUMA_R;
    ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Collapse a BGR image to single-channel luma.
pub fn bgr_to_gray(bgr: &RgbImage) -> GrayImage {
    GrayImage::from_fn(bgr.width(), bgr.height(), |x, y| {
        Luma([bgr_luma(bgr.get_pixel(x, y).0)])
    })
}

/// Replicate a luma image into three identical channels.
pub fn gray_to_bgr(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}

/// Colour view of any [`Image`]. Colour images are cloned as-is.
pub fn to_bgr(image: &Image) -> RgbImage {
    match image {
        Image::Gray(gray) => gray_to_bgr(gray),
        Image::Color(bgr) => bgr.clone(),
    }
}

/// Wrap a BGR buffer back into an [`Image`] of the requested depth.
pub fn restore_depth(bgr: RgbImage, depth: ChannelDepth) -> Image {
    match depth {
        ChannelDepth::Gray => Image::Gray(bgr_to_gray(&bgr)),
        ChannelDepth::Color => Image::Color(bgr),
    }
}

// -- HSV ----------------------------------------------------------------------

/// Convert a BGR pixel to 8-bit HSV: hue in `[0, 180)` (degrees halved),
/// saturation and value in `[0, 255]`.
pub fn bgr_to_hsv([b, g, r]: [u8; 3]) -> [u8; 3] {
    let (bf, gf, rf) = (b as f32, g as f32, r as f32);
    let v = bf.max(gf).max(rf);
    let min = bf.min(gf).min(rf);
    let diff = v - min;

    let s = if v > 0.0 { diff * 255.0 / v } else { 0.0 };

    let mut h = if diff == 0.0 {
        0.0
    } else if v == rf {
        60.0 * (gf - bf) / diff
    } else if v == gf {
        120.0 + 60.0 * (bf - rf) / diff
    } else {
        240.0 + 60.0 * (rf - gf) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    let hue = (h / 2.0).round() as u32 % 180;
    [hue as u8, s.round() as u8, v as u8]
}

/// Inverse of [`bgr_to_hsv`].
pub fn hsv_to_bgr([h, s, v]: [u8; 3]) -> [u8; 3] {
    if s == 0 {
        return [v, v, v];
    }

    let hue = (h as f32 * 2.0) / 60.0;
    let sat = s as f32 / 255.0;
    let val = v as f32;

    let sector = hue.floor();
    let frac = hue - sector;
    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * frac);
    let t = val * (1.0 - sat * (1.0 - frac));

    let (r, g, b) = match sector as u32 % 6 {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };

    let to_u8 = |c: f32| c.round().clamp(0.0, 255.0) as u8;
    [to_u8(b), to_u8(g), to_u8(r)]
}

/// Add `delta` to the HSV value channel of every pixel, clamping to
/// `[0, 255]`. Hue and saturation are kept.
pub fn shift_value(bgr: &RgbImage, delta: i32) -> RgbImage {
    RgbImage::from_fn(bgr.width(), bgr.height(), |x, y| {
        let [h, s, v] = bgr_to_hsv(bgr.get_pixel(x, y).0);
        let shifted = (v as i32).saturating_add(delta).clamp(0, 255) as u8;
        Rgb(hsv_to_bgr([h, s, shifted]))
    })
}
