// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stroke curve generation: a quadratic least-squares curve through five
// random control points, sampled as a 50-vertex polyline.

use griffel_core::error::{GriffelError, Result};
use nalgebra::{DMatrix, DVector};
use rand::Rng;
use tracing::{trace, warn};

/// Number of vertices in every generated curve.
pub const CURVE_SAMPLES: usize = 50;
/// Number of random control points the quadratic is fitted through.
pub const CONTROL_POINTS: usize = 5;

/// Control points keep this distance from the top/left edge.
const NEAR_MARGIN: i64 = 5;
/// Control points keep this distance from the bottom/right edge.
const FAR_MARGIN: i64 = 25;
/// The sampled y-span keeps this distance from the bottom edge.
const SPAN_MARGIN: i64 = 5;

/// An open polyline with integer vertices, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    vertices: Vec<(i32, i32)>,
    /// `[a, b, c]` of `x = a*y^2 + b*y + c`.
    coefficients: [f64; 3],
}

impl Curve {
    /// Build a curve from explicit vertices (coefficients are left at zero).
    pub fn from_vertices(vertices: Vec<(i32, i32)>) -> Self {
        Self {
            vertices,
            coefficients: [0.0; 3],
        }
    }

    pub fn vertices(&self) -> &[(i32, i32)] {
        &self.vertices
    }

    pub fn coefficients(&self) -> [f64; 3] {
        self.coefficients
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Produces random stroke curves inside a square canvas.
#[derive(Debug, Clone, Copy)]
pub struct StrokeCurveGenerator {
    size: u32,
}

impl StrokeCurveGenerator {
    /// Generator for a `size`×`size` canvas.
    ///
    /// Canvases of 40 pixels or more use the full control-point layout;
    /// smaller canvases squeeze the sampling intervals so they never become
    /// empty.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Draw one curve.
    ///
    /// 1. Five x and five y control coordinates from `[5, size-25]`.
    /// 2. A y-span `[start, stop]` from `[5, size/2]` and `[size/2, size-5]`.
    /// 3. Least-squares quadratic `x = f(y)` through the control points.
    /// 4. `f` evaluated at 50 evenly spaced y values across the span, both
    ///    axes truncated toward zero.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Curve> {
        let size = self.size as i64;
        let half = size / 2;

        let control = self.interval(NEAR_MARGIN, size - FAR_MARGIN);
        let xs: Vec<f64> = (0..CONTROL_POINTS)
            .map(|_| rng.random_range(control.0..=control.1) as f64)
            .collect();
        let ys: Vec<f64> = (0..CONTROL_POINTS)
            .map(|_| rng.random_range(control.0..=control.1) as f64)
            .collect();

        let start_range = self.interval(NEAR_MARGIN, half);
        let stop_range = self.interval(half, size - SPAN_MARGIN);
        let a = rng.random_range(start_range.0..=start_range.1);
        let b = rng.random_range(stop_range.0..=stop_range.1);
        let (start, stop) = (a.min(b) as f64, a.max(b) as f64);

        let coefficients = fit_quadratic(&ys, &xs)?;
        let vertices = linspace(start, stop, CURVE_SAMPLES)
            .map(|y| {
                let x = evaluate(coefficients, y);
                (x as i32, y as i32)
            })
            .collect();

        trace!(size = self.size, start, stop, ?coefficients, "Stroke curve generated");
        Ok(Curve {
            vertices,
            coefficients,
        })
    }

    /// `[low, high]` made non-empty and kept inside the canvas where possible.
    fn interval(&self, low: i64, high: i64) -> (i64, i64) {
        let last = (self.size as i64 - 1).max(0);
        let low = low.min(last);
        (low, high.max(low))
    }
}

/// `num` evenly spaced values over `[start, stop]`, both ends included.
fn linspace(start: f64, stop: f64, num: usize) -> impl Iterator<Item = f64> {
    let step = if num > 1 {
        (stop - start) / (num - 1) as f64
    } else {
        0.0
    };
    (0..num).map(move |i| {
        if i + 1 == num {
            stop
        } else {
            start + step * i as f64
        }
    })
}

fn evaluate([a, b, c]: [f64; 3], t: f64) -> f64 {
    (a * t + b) * t + c
}

/// Least-squares fit of `v = a*t^2 + b*t + c`, returning `[a, b, c]`.
///
/// Solved through an SVD of the Vandermonde matrix; singular values below a
/// relative cutoff are dropped, so rank-deficient input (all `t` equal, fewer
/// than three distinct `t`) yields the minimum-norm solution rather than an
/// error.
pub fn fit_quadratic(t: &[f64], v: &[f64]) -> Result<[f64; 3]> {
    if t.len() != v.len() || t.is_empty() {
        return Err(GriffelError::CurveFit(format!(
            "need matching non-empty samples, got {} and {}",
            t.len(),
            v.len()
        )));
    }

    let vandermonde = DMatrix::from_fn(t.len(), 3, |row, col| t[row].powi(2 - col as i32));
    let rhs = DVector::from_column_slice(v);

    let svd = vandermonde.svd(true, true);
    let cutoff = svd.singular_values.amax() * t.len() as f64 * f64::EPSILON;
    let rank = svd.singular_values.iter().filter(|&&s| s > cutoff).count();
    if rank < 3 {
        warn!(rank, "Quadratic fit is rank deficient; curve may be degenerate");
    }

    let solution = svd
        .solve(&rhs, cutoff)
        .map_err(|err| GriffelError::CurveFit(err.to_string()))?;
    Ok([solution[0], solution[1], solution[2]])
}
