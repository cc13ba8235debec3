//! Benchmarks for low-level DSP primitives.

mod distortion;
mod oscillator;

pub use distortion::bench_distortion;
pub use oscillator::bench_oscillator;
