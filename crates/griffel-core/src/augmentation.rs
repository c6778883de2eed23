// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invocation contract shared by image augmentations.

use rand::{Rng, RngCore};

use crate::error::Result;
use crate::types::Image;

/// A randomized, probability-gated image augmentation.
///
/// Randomness is always supplied by the caller, so a seeded generator gives
/// reproducible output and no generator is shared behind the caller's back.
pub trait Augmentation {
    /// Probability in `[0, 1]` that [`Augmentation::apply`] runs when not forced.
    fn probability(&self) -> f64;

    /// Bernoulli switch consulted once per call. `p = 0` never runs and
    /// `p = 1` always runs.
    fn should_run(&self, rng: &mut dyn RngCore) -> bool {
        rng.random::<f64>() < self.probability()
    }

    /// Apply the augmentation to a copy of `image`.
    ///
    /// Returns `Ok(None)` when the probability gate declines and `force` is
    /// false. `layer` names the pipeline layer the call belongs to.
    fn apply(
        &self,
        image: &Image,
        layer: Option<&str>,
        force: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Image>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Invert {
        p: f64,
    }

    impl Augmentation for Invert {
        fn probability(&self) -> f64 {
            self.p
        }

        fn apply(
            &self,
            image: &Image,
            _layer: Option<&str>,
            force: bool,
            rng: &mut dyn RngCore,
        ) -> Result<Option<Image>> {
            if !force && !self.should_run(rng) {
                return Ok(None);
            }
            let mut out = image.clone();
            if let Image::Gray(gray) = &mut out {
                image::imageops::invert(gray);
            }
            Ok(Some(out))
        }
    }

    #[test]
    fn gate_with_zero_probability_never_runs() {
        let aug = Invert { p: 0.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!((0..500).all(|_| !aug.should_run(&mut rng)));
    }

    #[test]
    fn gate_with_unit_probability_always_runs() {
        let aug = Invert { p: 1.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!((0..500).all(|_| aug.should_run(&mut rng)));
    }

    #[test]
    fn force_bypasses_gate() {
        let aug = Invert { p: 0.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let img = Image::white(3, 3, crate::ChannelDepth::Gray);
        let out = aug.apply(&img, None, true, &mut rng).unwrap().unwrap();
        assert!(out.as_raw().iter().all(|&v| v == 0));
        assert!(aug.apply(&img, None, false, &mut rng).unwrap().is_none());
    }
}
