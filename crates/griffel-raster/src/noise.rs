// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel noise: random intensity perturbation of a random subset of pixels.

use image::GrayImage;
use rand::Rng;
use tracing::trace;

use crate::edges::edge_mask;

/// How selected pixels are perturbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseMode {
    /// Any pixel may be selected; its value is replaced by the noise sample.
    Replace,
    /// Only Sobel edge pixels may be selected; the noise sample is added with
    /// saturation.
    AddOnEdges,
}

/// Perturb a random subset of pixels.
///
/// A fraction is drawn uniformly from `fraction_range`; each eligible pixel
/// is then selected with that probability and receives a sample drawn
/// uniformly from `magnitude_range` (both ends inclusive). The input is left
/// untouched.
pub fn add_noise<R: Rng + ?Sized>(
    gray: &GrayImage,
    fraction_range: (f32, f32),
    magnitude_range: (u8, u8),
    mode: NoiseMode,
    rng: &mut R,
) -> GrayImage {
    let (f_lo, f_hi) = fraction_range;
    let fraction = if f_hi > f_lo {
        rng.random_range(f_lo..=f_hi)
    } else {
        f_lo
    };
    let (m_lo, m_hi) = magnitude_range;
    let m_hi = m_hi.max(m_lo);

    let mut out = gray.clone();
    let mut touched = 0usize;

    match mode {
        NoiseMode::Replace => {
            for value in out.iter_mut() {
                if rng.random::<f32>() < fraction {
                    *value = rng.random_range(m_lo..=m_hi);
                    touched += 1;
                }
            }
        }
        NoiseMode::AddOnEdges => {
            let mask = edge_mask(gray);
            for (value, _) in out.iter_mut().zip(mask).filter(|(_, edge)| *edge) {
                if rng.random::<f32>() < fraction {
                    *value = value.saturating_add(rng.random_range(m_lo..=m_hi));
                    touched += 1;
                }
            }
        }
    }

    trace!(?mode, fraction, touched, "Noise applied");
    out
}
