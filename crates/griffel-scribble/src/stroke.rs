// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pencil stroke texture: rasterizes a curve, adds graphite grain and rough
// edges, softens, lightens, and multiplies the result onto a scribble canvas.

use griffel_core::IntRange;
use griffel_core::error::Result;
use griffel_raster::color::{bgr_to_gray, gray_to_bgr, shift_value};
use griffel_raster::filter::soften;
use griffel_raster::{NoiseMode, add_noise, draw_polyline, multiply};
use image::{Rgb, RgbImage};
use rand::Rng;
use tracing::{debug, instrument};

use crate::curve::Curve;

/// Share of all pixels that receive grain.
pub const GRAIN_FRACTION: (f32, f32) = (0.3, 0.5);
/// Share of edge pixels that are roughened.
pub const EDGE_FRACTION: (f32, f32) = (0.4, 0.7);
/// Intensity range of both noise layers.
pub const NOISE_MAGNITUDE: (u8, u8) = (32, 128);
/// Luma below which a pixel counts as part of the drawn stroke.
pub const STROKE_THRESHOLD: u8 = 64;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Renders single pencil strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeTextureSynthesizer {
    thickness_range: IntRange,
    brightness_change: i32,
}

impl StrokeTextureSynthesizer {
    pub fn new(thickness_range: IntRange, brightness_change: i32) -> Self {
        Self {
            thickness_range,
            brightness_change,
        }
    }

    pub fn thickness_range(&self) -> IntRange {
        self.thickness_range
    }

    pub fn brightness_change(&self) -> i32 {
        self.brightness_change
    }

    /// Render `curve` as a pencil stroke on a fresh white canvas of
    /// `width`×`height`.
    ///
    /// ## Pipeline
    ///
    /// 1. Draw the curve in black with a random thickness
    /// 2. Convert to luma
    /// 3. Build a grain layer (30–50% of pixels replaced by 32–128)
    /// 4. Copy grain into every stroke pixel darker than 64
    /// 5. Brighten 40–70% of Sobel edge pixels by 32–128
    /// 6. Back to three channels, 3×3 Gaussian soften
    /// 7. Shift the HSV value channel by the configured brightness change
    pub fn render<R: Rng + ?Sized>(
        &self,
        width: u32,
        height: u32,
        curve: &Curve,
        rng: &mut R,
    ) -> RgbImage {
        let thickness = self.thickness_range.sample(rng);

        let mut canvas = RgbImage::from_pixel(width, height, WHITE);
        draw_polyline(&mut canvas, curve.vertices(), thickness, BLACK);

        let mut stroke = bgr_to_gray(&canvas);
        let grain = add_noise(&stroke, GRAIN_FRACTION, NOISE_MAGNITUDE, NoiseMode::Replace, rng);
        let mut graphite = 0usize;
        for (value, &grain_value) in stroke.iter_mut().zip(grain.iter()) {
            if *value < STROKE_THRESHOLD {
                *value = grain_value;
                graphite += 1;
            }
        }

        let rough = add_noise(&stroke, EDGE_FRACTION, NOISE_MAGNITUDE, NoiseMode::AddOnEdges, rng);
        let soft = soften(&gray_to_bgr(&rough));

        debug!(thickness, graphite, "Pencil stroke rendered");
        shift_value(&soft, self.brightness_change)
    }

    /// Render `curve` at the canvas size and multiply it onto `canvas`.
    ///
    /// Strokes only ever darken the canvas; white stays white.
    #[instrument(skip_all, fields(width = canvas.width(), height = canvas.height(), vertices = curve.len()))]
    pub fn apply<R: Rng + ?Sized>(
        &self,
        canvas: &mut RgbImage,
        curve: &Curve,
        rng: &mut R,
    ) -> Result<()> {
        let stroke = self.render(canvas.width(), canvas.height(), curve, rng);
        *canvas = multiply(&stroke, canvas)?;
        Ok(())
    }
}
