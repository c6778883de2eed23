// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// griffel-scribble: Pencil-scribble degradation effect.
//
// Generates randomized quadratic stroke curves, renders them into grainy
// pencil textures, composes strokes into square scribble sprites, and pastes
// those sprites onto a target image with multiplicative blending.

pub mod compose;
pub mod curve;
pub mod effect;
pub mod placer;
pub mod stroke;

// Re-export the primary structs so callers can use `griffel_scribble::PencilScribbleEffect` etc.
pub use compose::{ScribbleComposer, ScribbleSprite};
pub use curve::{Curve, StrokeCurveGenerator};
pub use effect::PencilScribbleEffect;
pub use placer::Placer;
pub use stroke::StrokeTextureSynthesizer;
