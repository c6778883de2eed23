// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sprite placement: opaque paste at a random offset that keeps the sprite
// fully inside the target.

use griffel_core::Image;
use griffel_core::error::{GriffelError, Result};
use griffel_raster::color::{restore_depth, to_bgr};
use image::GenericImage;
use rand::Rng;
use tracing::trace;

use crate::compose::ScribbleSprite;

/// Pastes scribble sprites onto target images.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placer;

impl Placer {
    pub fn new() -> Self {
        Self
    }

    /// Paste `sprite` at a uniformly random offset inside `target`.
    ///
    /// Grayscale targets are pasted in colour and converted back, so the
    /// result has the same shape as `target`. Fails with
    /// [`GriffelError::SpriteTooLarge`] if the sprite does not fit.
    pub fn place<R: Rng + ?Sized>(
        &self,
        sprite: &ScribbleSprite,
        target: Image,
        rng: &mut R,
    ) -> Result<Image> {
        let (x, y) = self.sample_offset(sprite, &target, rng)?;
        self.paste_at(sprite, target, x, y)
    }

    /// Draw a top-left offset from `[0, target - sprite]` on both axes.
    pub fn sample_offset<R: Rng + ?Sized>(
        &self,
        sprite: &ScribbleSprite,
        target: &Image,
        rng: &mut R,
    ) -> Result<(u32, u32)> {
        check_fits(sprite, target)?;
        let max_x = target.width() - sprite.width();
        let max_y = target.height() - sprite.height();
        Ok((rng.random_range(0..=max_x), rng.random_range(0..=max_y)))
    }

    /// Paste `sprite` with its top-left corner at `(x, y)`, overwriting the
    /// covered pixels.
    pub fn paste_at(&self, sprite: &ScribbleSprite, target: Image, x: u32, y: u32) -> Result<Image> {
        check_fits(sprite, &target)?;
        if x > target.width() - sprite.width() || y > target.height() - sprite.height() {
            return Err(too_large(sprite, &target));
        }

        let depth = target.depth();
        let mut canvas = match target {
            Image::Color(bgr) => bgr,
            gray @ Image::Gray(_) => to_bgr(&gray),
        };
        canvas
            .copy_from(sprite.as_image(), x, y)
            .map_err(|_| too_large_dims(sprite, canvas.width(), canvas.height()))?;

        trace!(x, y, size = sprite.size(), ?depth, "Sprite pasted");
        Ok(restore_depth(canvas, depth))
    }
}

fn check_fits(sprite: &ScribbleSprite, target: &Image) -> Result<()> {
    if sprite.width() > target.width() || sprite.height() > target.height() {
        return Err(too_large(sprite, target));
    }
    Ok(())
}

fn too_large(sprite: &ScribbleSprite, target: &Image) -> GriffelError {
    too_large_dims(sprite, target.width(), target.height())
}

fn too_large_dims(sprite: &ScribbleSprite, target_w: u32, target_h: u32) -> GriffelError {
    GriffelError::SpriteTooLarge {
        sprite_w: sprite.width(),
        sprite_h: sprite.height(),
        target_w,
        target_h,
    }
}
