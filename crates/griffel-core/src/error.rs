// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Griffel.

use thiserror::Error;

/// Top-level error type for all Griffel operations.
#[derive(Debug, Error)]
pub enum GriffelError {
    // -- Configuration errors --
    #[error("invalid range for {name}: low {low} is greater than high {high}")]
    InvalidRange {
        name: &'static str,
        low: u32,
        high: u32,
    },

    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Compositing errors --
    #[error(
        "scribble sprite {sprite_w}x{sprite_h} does not fit into target {target_w}x{target_h}"
    )]
    SpriteTooLarge {
        sprite_w: u32,
        sprite_h: u32,
        target_w: u32,
        target_h: u32,
    },

    #[error("image shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("stroke curve fit failed: {0}")]
    CurveFit(String),

    // -- Serialization --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GriffelError>;
