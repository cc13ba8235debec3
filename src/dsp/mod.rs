//! Signal-processing primitives.
//!
//! Everything here is pure math over `f32` samples: no I/O and no shared state,
//! so any of it can be called from multiple threads on independent buffers.

/// Staircase waveshaper and its threshold table.
pub mod distortion;
/// LFO conversions and period math.
pub mod lfo;
/// Oscillator waveforms.
pub mod oscillator;
/// Evenly spaced axes and sine test signals.
pub mod signal;
/// Tremolo (LFO amplitude modulation) dataset generator.
pub mod tremolo;

pub use distortion::{staircase, staircase_buffer, Staircase, ThresholdError, ThresholdTable};
pub use oscillator::{OscillatorBlock, OscillatorWaveform};
