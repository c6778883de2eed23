// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Griffel: Core types, configuration, and error definitions shared across all crates.

pub mod augmentation;
pub mod config;
pub mod error;
pub mod types;

pub use augmentation::Augmentation;
pub use config::ScribbleConfig;
pub use error::GriffelError;
pub use types::*;
