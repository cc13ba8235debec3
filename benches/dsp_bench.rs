//! Benchmarks for the shaper and signal generators.
//!
//! Run with: cargo bench
//!
//! Benchmark groups:
//!   - dsp/distortion   Staircase lookup across table sizes
//!   - dsp/oscillator   Test-carrier and LFO waveforms
//!   - analysis/*       Harmonic profile of a shaped sine

use criterion::{criterion_group, criterion_main};

mod analysis;
mod dsp;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    dsp::bench_distortion,
    dsp::bench_oscillator,
    analysis::bench_spectrum,
);
criterion_main!(benches);
