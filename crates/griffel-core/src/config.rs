// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scribble effect configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GriffelError, Result};
use crate::types::IntRange;

/// Value-channel shift giving a light graphite look.
pub const GRAPHITE_BRIGHTNESS: i32 = 128;
/// Value-channel shift giving a dark charcoal look.
pub const CHARCOAL_BRIGHTNESS: i32 = 32;
/// Thickest stroke a configuration may ask for, in pixels.
pub const MAX_THICKNESS: u32 = 1024;

/// Settings for the pencil-scribble effect.
///
/// Missing fields fall back to [`ScribbleConfig::default`] when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribbleConfig {
    /// Side length of a scribble sprite in pixels.
    pub size_range: IntRange,
    /// Number of scribbles pasted per call.
    pub count_range: IntRange,
    /// Number of pencil strokes in each scribble.
    pub stroke_count_range: IntRange,
    /// Stroke thickness in pixels.
    pub thickness_range: IntRange,
    /// Shift added to the HSV value channel of every stroke.
    pub brightness_change: i32,
    /// Probability that the effect runs at all.
    pub p: f64,
}

impl Default for ScribbleConfig {
    fn default() -> Self {
        Self {
            size_range: IntRange::new(250, 400),
            count_range: IntRange::new(1, 10),
            stroke_count_range: IntRange::new(1, 6),
            thickness_range: IntRange::new(2, 6),
            brightness_change: GRAPHITE_BRIGHTNESS,
            p: 1.0,
        }
    }
}

impl ScribbleConfig {
    /// Light, graphite-like strokes (the default).
    pub fn graphite() -> Self {
        Self::default()
    }

    /// Dark, charcoal-like strokes.
    pub fn charcoal() -> Self {
        Self {
            brightness_change: CHARCOAL_BRIGHTNESS,
            ..Self::default()
        }
    }

    /// Parse a JSON document and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "Scribble configuration parsed");
        Ok(config)
    }

    /// Check every range and the run probability.
    pub fn validate(&self) -> Result<()> {
        self.size_range.validate("size_range")?;
        self.count_range.validate("count_range")?;
        self.stroke_count_range.validate("stroke_count_range")?;
        self.thickness_range.validate("thickness_range")?;

        if self.thickness_range.low() == 0 {
            return Err(GriffelError::InvalidConfig(
                "thickness_range must start at 1 or more".into(),
            ));
        }
        if self.thickness_range.high() > MAX_THICKNESS {
            return Err(GriffelError::InvalidConfig(format!(
                "thickness_range must not exceed {MAX_THICKNESS}"
            )));
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(GriffelError::InvalidProbability(self.p));
        }
        Ok(())
    }

    // -- Builder-style setters ------------------------------------------------

    pub fn with_size_range(mut self, low: u32, high: u32) -> Self {
        self.size_range = IntRange::new(low, high);
        self
    }

    pub fn with_count_range(mut self, low: u32, high: u32) -> Self {
        self.count_range = IntRange::new(low, high);
        self
    }

    pub fn with_stroke_count_range(mut self, low: u32, high: u32) -> Self {
        self.stroke_count_range = IntRange::new(low, high);
        self
    }

    pub fn with_thickness_range(mut self, low: u32, high: u32) -> Self {
        self.thickness_range = IntRange::new(low, high);
        self
    }

    pub fn with_brightness_change(mut self, value: i32) -> Self {
        self.brightness_change = value;
        self
    }

    pub fn with_probability(mut self, p: f64) -> Self {
        self.p = p;
        self
    }
}
