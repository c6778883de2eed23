// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge maps for edge-restricted noise.

use image::{GrayImage, Luma};
use imageproc::gradients::sobel_gradients;

/// Sobel gradient magnitude, saturated to 8 bits.
pub fn sobel_edges(gray: &GrayImage) -> GrayImage {
    let gradients = sobel_gradients(gray);
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let magnitude = gradients.get_pixel(x, y).0[0];
        Luma([magnitude.min(u8::MAX as u16) as u8])
    })
}

/// Pixels with a non-zero Sobel response, row-major.
pub fn edge_mask(gray: &GrayImage) -> Vec<bool> {
    sobel_edges(gray).pixels().map(|p| p.0[0] > 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_has_no_edges() {
        let gray = GrayImage::from_pixel(12, 9, Luma([180]));
        assert!(edge_mask(&gray).iter().all(|&edge| !edge));
    }

    #[test]
    fn vertical_step_is_detected_only_near_the_step() {
        let gray = GrayImage::from_fn(12, 6, |x, _| Luma([if x < 6 { 0 } else { 255 }]));
        let edges = sobel_edges(&gray);

        for y in 0..6 {
            assert_eq!(edges.get_pixel(5, y).0[0], 255);
            assert_eq!(edges.get_pixel(6, y).0[0], 255);
            assert_eq!(edges.get_pixel(1, y).0[0], 0);
            assert_eq!(edges.get_pixel(10, y).0[0], 0);
        }
    }
}
