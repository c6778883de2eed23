// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Smoothing filters.

use image::RgbImage;
use imageproc::filter::separable_filter_equal;

/// Normalised 3-tap Gaussian kernel (binomial 1-2-1). The weights are exact
/// in binary floating point, so flat regions come through unchanged.
pub const GAUSSIAN_3: [f32; 3] = [0.25, 0.5, 0.25];

/// Soften an image with a 3×3 Gaussian blur.
pub fn soften(bgr: &RgbImage) -> RgbImage {
    if bgr.width() == 0 || bgr.height() == 0 {
        return bgr.clone();
    }
    separable_filter_equal(bgr, &GAUSSIAN_3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn flat_image_is_unchanged() {
        let img = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        assert_eq!(soften(&img), img);
    }

    #[test]
    fn isolated_dark_pixel_spreads_to_neighbours() {
        let mut img = RgbImage::from_pixel(9, 9, Rgb([255, 255, 255]));
        img.put_pixel(4, 4, Rgb([0, 0, 0]));
        let soft = soften(&img);

        let centre = soft.get_pixel(4, 4).0[0];
        let neighbour = soft.get_pixel(5, 4).0[0];
        let far = soft.get_pixel(0, 0).0[0];
        assert!(centre > 0 && centre < neighbour, "centre {centre}, neighbour {neighbour}");
        assert!(neighbour < 255);
        assert_eq!(far, 255);
        assert_eq!(*soft.get_pixel(7, 4), Rgb([255, 255, 255]));
    }
}
