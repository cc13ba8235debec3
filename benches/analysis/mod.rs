//! Benchmarks for harmonic analysis.

use std::hint::black_box;

use criterion::Criterion;
use stair_dsp::analysis::shaped_sine_profile;
use stair_dsp::dsp::Staircase;

pub fn bench_spectrum(c: &mut Criterion) {
    let shaper = Staircase::default();
    c.bench_function("analysis/shaped_sine_profile", |b| {
        b.iter(|| shaped_sine_profile(black_box(&shaper), black_box(9)))
    });
}
