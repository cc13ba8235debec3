//! Benchmarks for staircase waveshaping.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stair_dsp::dsp::distortion::{staircase_buffer, ThresholdTable};

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    // Default twelve steps vs. a fine 64-step table (binary search depth)
    let coarse = ThresholdTable::default();
    let fine = ThresholdTable::linear(0.95, 0.014, 64).expect("valid fine table");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sine-like values)
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("staircase_12", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                staircase_buffer(black_box(&mut buffer), black_box(&coarse));
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("staircase_64", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                staircase_buffer(black_box(&mut buffer), black_box(&fine));
            })
        });
    }

    group.finish();
}
