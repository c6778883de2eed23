// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pencil scribble effect: the probability-gated entry point that pastes a
// random number of scribbles onto a copy of the input image.

use griffel_core::error::Result;
use griffel_core::{Augmentation, Image, ScribbleConfig};
use griffel_raster::multiply_image;
use rand::{Rng, RngCore};
use tracing::{debug, info, instrument, warn};

use crate::compose::ScribbleComposer;
use crate::placer::Placer;
use crate::stroke::StrokeTextureSynthesizer;

/// Applies random pencil scribbles to an image.
///
/// The effect only holds its immutable configuration, so one instance can be
/// shared freely; every call draws from the generator it is handed.
///
/// ```ignore
/// let effect = PencilScribbleEffect::new(ScribbleConfig::charcoal())?;
/// let mut rng = rand::rng();
/// let scribbled = effect.apply(&page, None, false, &mut rng)?;
/// ```
#[derive(Debug, Clone)]
pub struct PencilScribbleEffect {
    config: ScribbleConfig,
    composer: ScribbleComposer,
    placer: Placer,
}

impl PencilScribbleEffect {
    // -- Construction ---------------------------------------------------------

    /// Validate `config` and build the effect.
    pub fn new(config: ScribbleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Parse a JSON configuration and build the effect.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(ScribbleConfig::from_json_str(json)?)
    }

    fn from_valid(config: ScribbleConfig) -> Self {
        let synthesizer =
            StrokeTextureSynthesizer::new(config.thickness_range, config.brightness_change);
        let composer =
            ScribbleComposer::new(config.size_range, config.stroke_count_range, synthesizer);
        Self {
            config,
            composer,
            placer: Placer::new(),
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn config(&self) -> &ScribbleConfig {
        &self.config
    }

    pub fn composer(&self) -> &ScribbleComposer {
        &self.composer
    }

    // -- Application ----------------------------------------------------------

    /// Paste scribbles onto a copy of `image`, bypassing the probability gate.
    ///
    /// For each of `count_range` iterations a scribble is composed to fit the
    /// image, pasted at a random offset onto a white canvas of the image's
    /// shape, and that canvas is multiplied onto the working copy.
    #[instrument(
        skip_all,
        fields(width = image.width(), height = image.height(), depth = ?image.depth())
    )]
    pub fn run<R: Rng + ?Sized>(&self, image: &Image, rng: &mut R) -> Result<Image> {
        let mut working = image.clone();
        let (width, height) = working.dimensions();
        if width == 0 || height == 0 {
            warn!("Empty image; nothing to scribble on");
            return Ok(working);
        }

        let count = self.config.count_range.sample(rng);
        info!(count, "Applying pencil scribbles");

        for index in 0..count {
            let sprite = self.composer.compose(height, width, rng)?;
            let overlay = self.placer.place(&sprite, working.white_like(), rng)?;
            working = multiply_image(&overlay, &working)?;
            debug!(index, size = sprite.size(), "Scribble composited");
        }

        Ok(working)
    }
}

impl Default for PencilScribbleEffect {
    fn default() -> Self {
        Self::from_valid(ScribbleConfig::default())
    }
}

impl Augmentation for PencilScribbleEffect {
    fn probability(&self) -> f64 {
        self.config.p
    }

    /// `layer` is accepted for pipeline compatibility and not used.
    fn apply(
        &self,
        image: &Image,
        _layer: Option<&str>,
        force: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Image>> {
        if !force && !self.should_run(rng) {
            debug!(p = self.config.p, "Probability gate declined; image untouched");
            return Ok(None);
        }
        self.run(image, rng).map(Some)
    }
}

impl std::fmt::Display for PencilScribbleEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = &self.config;
        write!(
            f,
            "PencilScribbles(size_range={}, count_range={}, stroke_count_range={}, \
             thickness_range={}, brightness_change={}, p={})",
            c.size_range,
            c.count_range,
            c.stroke_count_range,
            c.thickness_range,
            c.brightness_change,
            c.p
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use griffel_core::{ChannelDepth, GriffelError};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn display_lists_the_configuration() {
        let effect = PencilScribbleEffect::default();
        assert_eq!(
            effect.to_string(),
            "PencilScribbles(size_range=(250, 400), count_range=(1, 10), \
             stroke_count_range=(1, 6), thickness_range=(2, 6), brightness_change=128, p=1)"
        );
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let err = PencilScribbleEffect::new(ScribbleConfig::default().with_count_range(5, 1))
            .unwrap_err();
        assert!(matches!(err, GriffelError::InvalidRange { name: "count_range", .. }));
    }

    #[test]
    fn default_matches_default_config() {
        let built = PencilScribbleEffect::new(ScribbleConfig::default()).unwrap();
        let default = PencilScribbleEffect::default();
        assert_eq!(built.config(), default.config());
        assert_eq!(built.composer(), default.composer());
    }

    #[test]
    fn zero_count_returns_an_identical_copy() {
        let effect =
            PencilScribbleEffect::new(ScribbleConfig::default().with_count_range(0, 0)).unwrap();
        let image = Image::white(64, 48, ChannelDepth::Color);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(effect.run(&image, &mut rng).unwrap(), image);
    }

    #[test]
    fn empty_image_is_returned_unchanged() {
        let effect = PencilScribbleEffect::default();
        let image = Image::white(0, 10, ChannelDepth::Gray);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let out = effect.apply(&image, None, true, &mut rng).unwrap().unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn forced_run_ignores_zero_probability() {
        let config = ScribbleConfig::default()
            .with_probability(0.0)
            .with_count_range(1, 1)
            .with_size_range(40, 40);
        let effect = PencilScribbleEffect::new(config).unwrap();
        let image = Image::white(60, 60, ChannelDepth::Gray);
        let mut rng = ChaCha8Rng::seed_from_u64(10);

        assert!(effect.apply(&image, Some("ink"), false, &mut rng).unwrap().is_none());
        let forced = effect.apply(&image, Some("ink"), true, &mut rng).unwrap();
        assert!(forced.is_some());
    }

    #[test]
    fn output_never_brighter_than_input() {
        let effect = PencilScribbleEffect::new(
            ScribbleConfig::charcoal()
                .with_count_range(2, 3)
                .with_size_range(60, 90),
        )
        .unwrap();
        let mut gradient = image::RgbImage::new(120, 100);
        for (x, y, pixel) in gradient.enumerate_pixels_mut() {
            *pixel = image::Rgb([(x * 2) as u8, (y * 2) as u8, 200]);
        }
        let image = Image::Color(gradient);
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let out = effect.run(&image, &mut rng).unwrap();

        for (after, before) in out.as_raw().iter().zip(image.as_raw()) {
            assert!(after <= before);
        }
    }
}
