//! Measurements over generated or captured signals.

/// FFT harmonic levels and THD.
pub mod spectrum;
/// Ranges, zoom windows and tremolo depth.
pub mod stats;

pub use spectrum::{harmonic_profile, shaped_sine_profile, HarmonicProfile};
pub use stats::{modulation_depth, range, zoom_window, TremoloReport};
