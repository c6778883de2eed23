// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Griffel scribble effect.

use image::{DynamicImage, GrayImage, RgbImage};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GriffelError, Result};

/// Inclusive integer sampling interval `(low, high)`.
///
/// Serialized as a two-element array, e.g. `[250, 400]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange(pub u32, pub u32);

impl IntRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self(low, high)
    }

    pub fn low(&self) -> u32 {
        self.0
    }

    pub fn high(&self) -> u32 {
        self.1
    }

    /// Whether `value` lies inside the interval (both ends inclusive).
    pub fn contains(&self, value: u32) -> bool {
        (self.0..=self.1).contains(&value)
    }

    /// Draw a value uniformly from `[low, high]`.
    ///
    /// Callers must have validated the range; a reversed range is treated as
    /// the single value `low`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.1 <= self.0 {
            return self.0;
        }
        rng.random_range(self.0..=self.1)
    }

    /// Fail with [`GriffelError::InvalidRange`] when `low > high`.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        if self.0 > self.1 {
            return Err(GriffelError::InvalidRange {
                name,
                low: self.0,
                high: self.1,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for IntRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<(u32, u32)> for IntRange {
    fn from((low, high): (u32, u32)) -> Self {
        Self(low, high)
    }
}

/// Channel depth of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelDepth {
    /// Single-channel luma, H×W.
    Gray,
    /// Three-channel colour, H×W×3.
    Color,
}

/// An 8-bit image in one of the two supported channel depths.
///
/// The colour variant stores samples in B, G, R order inside the `image`
/// crate's three-channel buffer. [`Image::from_dynamic`] and
/// [`Image::into_dynamic`] swap to and from the RGB order used by the
/// `image` crate's codecs.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    Gray(GrayImage),
    Color(RgbImage),
}

impl Image {
    // -- Construction ---------------------------------------------------------

    /// A pure white image of the given size and depth.
    pub fn white(width: u32, height: u32, depth: ChannelDepth) -> Self {
        match depth {
            ChannelDepth::Gray => Self::Gray(GrayImage::from_pixel(width, height, image::Luma([255]))),
            ChannelDepth::Color => {
                Self::Color(RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255])))
            }
        }
    }

    /// A pure white image with the same shape as `self`.
    pub fn white_like(&self) -> Self {
        Self::white(self.width(), self.height(), self.depth())
    }

    /// Wrap a decoded `DynamicImage`. Luma images (with or without alpha, any
    /// bit depth) become [`Image::Gray`]; everything else becomes
    /// [`Image::Color`] with alpha dropped.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(gray) => Self::Gray(gray),
            luma @ (DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLumaA16(_)) => Self::Gray(luma.to_luma8()),
            other => {
                let mut rgb = other.to_rgb8();
                swap_red_blue(&mut rgb);
                Self::Color(rgb)
            }
        }
    }

    /// Convert back into a `DynamicImage` (RGB order for colour images).
    pub fn into_dynamic(self) -> DynamicImage {
        match self {
            Self::Gray(gray) => DynamicImage::ImageLuma8(gray),
            Self::Color(mut bgr) => {
                swap_red_blue(&mut bgr);
                DynamicImage::ImageRgb8(bgr)
            }
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        match self {
            Self::Gray(img) => img.width(),
            Self::Color(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Gray(img) => img.height(),
            Self::Color(img) => img.height(),
        }
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn depth(&self) -> ChannelDepth {
        match self {
            Self::Gray(_) => ChannelDepth::Gray,
            Self::Color(_) => ChannelDepth::Color,
        }
    }

    pub fn is_gray(&self) -> bool {
        matches!(self, Self::Gray(_))
    }

    /// Raw samples in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        match self {
            Self::Gray(img) => img.as_raw(),
            Self::Color(img) => img.as_raw(),
        }
    }

    /// Short shape description used in error messages, e.g. `"640x480x3"`.
    pub fn shape(&self) -> String {
        match self {
            Self::Gray(img) => format!("{}x{}", img.width(), img.height()),
            Self::Color(img) => format!("{}x{}x3", img.width(), img.height()),
        }
    }
}

fn swap_red_blue(img: &mut RgbImage) {
    for pixel in img.pixels_mut() {
        pixel.0.swap(0, 2);
    }
}
