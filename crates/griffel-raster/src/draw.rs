// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Open polyline rasterization with stroke thickness.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use tracing::trace;

/// Draw an open polyline through `points` onto `canvas`.
///
/// A `thickness` of 0 or 1 draws single-pixel segments. Thicker strokes are
/// built from one filled quad per segment plus round joints at every vertex,
/// so consecutive segments meet without notches. Parts outside the canvas are
/// clipped.
///
/// Vertices far outside the canvas are pulled into a window one canvas-size
/// wide around it; this bounds the drawing cost for runaway curves.
pub fn draw_polyline(canvas: &mut RgbImage, points: &[(i32, i32)], thickness: u32, color: Rgb<u8>) {
    if points.is_empty() || canvas.width() == 0 || canvas.height() == 0 {
        return;
    }

    let extent = i32::try_from(canvas.width().max(canvas.height())).unwrap_or(i32::MAX);
    let span = extent.saturating_add(i32::try_from(thickness).unwrap_or(i32::MAX));
    let far = span.saturating_mul(2);
    let clamp = |(x, y): (i32, i32)| (x.clamp(-span, far), y.clamp(-span, far));
    let points: Vec<(i32, i32)> = points.iter().copied().map(clamp).collect();

    trace!(vertices = points.len(), thickness, "Drawing polyline");

    if thickness <= 1 {
        if let [only] = points.as_slice() {
            put_if_inside(canvas, *only, color);
        }
        for pair in points.windows(2) {
            draw_line_segment_mut(canvas, to_f32(pair[0]), to_f32(pair[1]), color);
        }
        return;
    }

    let half = thickness as f32 / 2.0;
    for pair in points.windows(2) {
        draw_thick_segment(canvas, pair[0], pair[1], half, color);
    }

    let radius = (thickness / 2) as i32;
    for &vertex in &points {
        draw_filled_circle_mut(canvas, vertex, radius, color);
    }
}

/// Fill the quad covering segment `a`-`b` widened by `half` on each side.
fn draw_thick_segment(canvas: &mut RgbImage, a: (i32, i32), b: (i32, i32), half: f32, color: Rgb<u8>) {
    let (ax, ay) = to_f32(a);
    let (bx, by) = to_f32(b);
    let (dx, dy) = (bx - ax, by - ay);
    let length = (dx * dx + dy * dy).sqrt();
    if length < f32::EPSILON {
        // Zero-length segment; the round joint at the vertex covers it.
        return;
    }

    let (nx, ny) = (-dy / length * half, dx / length * half);
    let corner = |x: f32, y: f32| Point::new(x.round() as i32, y.round() as i32);
    let quad = [
        corner(ax + nx, ay + ny),
        corner(bx + nx, by + ny),
        corner(bx - nx, by - ny),
        corner(ax - nx, ay - ny),
    ];

    // draw_polygon_mut rejects a closed point list.
    if quad[0] == quad[3] {
        draw_line_segment_mut(canvas, (ax, ay), (bx, by), color);
        return;
    }
    draw_polygon_mut(canvas, &quad, color);
}

fn put_if_inside(canvas: &mut RgbImage, (x, y): (i32, i32), color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn to_f32((x, y): (i32, i32)) -> (f32, f32) {
    (x as f32, y as f32)
}
