// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scribble composition: several pencil strokes layered onto one square
// sprite sized to fit the target image.

use griffel_core::IntRange;
use griffel_core::error::Result;
use image::{Rgb, RgbImage};
use rand::Rng;
use tracing::{debug, instrument};

use crate::curve::StrokeCurveGenerator;
use crate::stroke::StrokeTextureSynthesizer;

/// Smallest lower bound a sprite size is drawn from.
pub const MIN_SIZE_FLOOR: u32 = 30;
/// Smallest upper bound a sprite size is drawn from.
pub const MAX_SIZE_FLOOR: u32 = 40;

/// A rendered square scribble in BGR order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScribbleSprite {
    image: RgbImage,
}

impl ScribbleSprite {
    /// Wrap a rendered image as a sprite.
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Builds scribble sprites from several strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScribbleComposer {
    size_range: IntRange,
    stroke_count_range: IntRange,
    synthesizer: StrokeTextureSynthesizer,
}

impl ScribbleComposer {
    pub fn new(
        size_range: IntRange,
        stroke_count_range: IntRange,
        synthesizer: StrokeTextureSynthesizer,
    ) -> Self {
        Self {
            size_range,
            stroke_count_range,
            synthesizer,
        }
    }

    /// Draw a sprite side length.
    ///
    /// Sampled from `[max(low, 30), max(high, 40)]`, then clamped so the
    /// sprite fits inside `max_height`×`max_width`.
    pub fn sample_size<R: Rng + ?Sized>(&self, max_height: u32, max_width: u32, rng: &mut R) -> u32 {
        let low = self.size_range.low().max(MIN_SIZE_FLOOR);
        let high = self.size_range.high().max(MAX_SIZE_FLOOR).max(low);
        IntRange::new(low, high)
            .sample(rng)
            .min(max_height)
            .min(max_width)
    }

    /// Compose one scribble that fits inside `max_height`×`max_width`.
    #[instrument(skip(self, rng))]
    pub fn compose<R: Rng + ?Sized>(
        &self,
        max_height: u32,
        max_width: u32,
        rng: &mut R,
    ) -> Result<ScribbleSprite> {
        let size = self.sample_size(max_height, max_width, rng);
        let strokes = self.stroke_count_range.sample(rng);
        debug!(size, strokes, "Composing scribble");

        let generator = StrokeCurveGenerator::new(size);
        let mut canvas = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
        for _ in 0..strokes {
            let curve = generator.generate(rng)?;
            self.synthesizer.apply(&mut canvas, &curve, rng)?;
        }

        Ok(ScribbleSprite::from_image(canvas))
    }
}
