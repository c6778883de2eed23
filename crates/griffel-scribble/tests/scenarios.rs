// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end behaviour of the pencil scribble effect.

use griffel_core::{Augmentation, ChannelDepth, Image, ScribbleConfig};
use griffel_scribble::PencilScribbleEffect;
use image::{GrayImage, Luma};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn single_scribble_effect() -> PencilScribbleEffect {
    PencilScribbleEffect::new(
        ScribbleConfig::default()
            .with_count_range(1, 1)
            .with_stroke_count_range(1, 1),
    )
    .unwrap()
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of pixels that differ.
fn changed_bounds(before: &Image, after: &Image) -> Option<(u32, u32, u32, u32)> {
    let width = before.width() as usize;
    let channels = before.as_raw().len() / (width * before.height() as usize);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (i, (a, b)) in before.as_raw().iter().zip(after.as_raw()).enumerate() {
        if a == b {
            continue;
        }
        let pixel = i / channels;
        let (x, y) = ((pixel % width) as u32, (pixel / width) as u32);
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}

#[test]
fn single_scribble_darkens_one_bounded_region() {
    let effect = single_scribble_effect();
    let input = Image::white(500, 500, ChannelDepth::Color);
    let mut darkened = 0;

    for seed in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let output = effect.apply(&input, None, false, &mut rng).unwrap().unwrap();

        assert_eq!(output.dimensions(), (500, 500));

        if let Some((x0, y0, x1, y1)) = changed_bounds(&input, &output) {
            darkened += 1;
            // One sprite of at most 400 pixels per side.
            assert!(x1 - x0 < 400 && y1 - y0 < 400, "seed {seed}: ({x0}, {y0})-({x1}, {y1})");
        }
    }
    assert!(darkened > 0, "no seed produced a visible scribble");
}

#[test]
fn zero_probability_never_produces_output() {
    let effect = PencilScribbleEffect::new(ScribbleConfig::default().with_probability(0.0)).unwrap();
    let input = Image::white(64, 64, ChannelDepth::Gray);
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert!(effect.apply(&input, None, false, &mut rng).unwrap().is_none());
    }
}

#[test]
fn tiny_target_clamps_the_sprite() {
    let effect = PencilScribbleEffect::default();
    let input = Image::white(20, 20, ChannelDepth::Color);
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let output = effect.apply(&input, None, false, &mut rng).unwrap().unwrap();
        assert_eq!(output.dimensions(), (20, 20));
    }
}

#[test]
fn narrow_target_clamps_to_the_shorter_side() {
    let effect = single_scribble_effect();
    let input = Image::white(600, 35, ChannelDepth::Color);
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let output = effect.run(&input, &mut rng).unwrap();
    if let Some((_, y0, _, y1)) = changed_bounds(&input, &output) {
        assert!(y1 - y0 < 35);
    }
}

#[test]
fn same_seed_gives_identical_output() {
    let effect = PencilScribbleEffect::new(ScribbleConfig::default().with_count_range(1, 3)).unwrap();
    let input = Image::white(320, 240, ChannelDepth::Color);

    let a = effect.run(&input, &mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    let b = effect.run(&input, &mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn grayscale_input_stays_grayscale() {
    let gray = GrayImage::from_fn(200, 150, |x, y| Luma([(100 + (x + y) % 150) as u8]));
    let input = Image::Gray(gray);
    let effect = PencilScribbleEffect::new(ScribbleConfig::charcoal().with_count_range(2, 2)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let output = effect.apply(&input, None, true, &mut rng).unwrap().unwrap();
    assert!(output.is_gray());
    assert_eq!(output.dimensions(), (200, 150));
    for (after, before) in output.as_raw().iter().zip(input.as_raw()) {
        assert!(after <= before);
    }
}

#[test]
fn caller_buffer_is_not_modified() {
    let effect = single_scribble_effect();
    let input = Image::white(300, 300, ChannelDepth::Color);
    let snapshot = input.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let _ = effect.apply(&input, None, true, &mut rng).unwrap();
    assert_eq!(input, snapshot);
}

#[test]
fn one_effect_can_serve_several_threads() {
    let effect = PencilScribbleEffect::new(ScribbleConfig::default().with_count_range(1, 2)).unwrap();
    let input = Image::white(260, 260, ChannelDepth::Color);

    let sequential: Vec<Image> = (0..3)
        .map(|seed| effect.run(&input, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap())
        .collect();

    let parallel: Vec<Image> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..3)
            .map(|seed| {
                let (effect, input) = (&effect, &input);
                scope.spawn(move || {
                    effect
                        .run(input, &mut ChaCha8Rng::seed_from_u64(seed))
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
