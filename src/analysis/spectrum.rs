//! Harmonic analysis of shaped test tones.
//!
//! A waveshaper turns a pure sine into a sum of harmonics. Measuring the level
//! of each multiple of the test frequency shows what the transfer curve does
//! to the sound: an odd-symmetric curve like the staircase only produces odd
//! harmonics, and steeper steps push more energy into the high ones.

use std::f32::consts::TAU;

use rustfft::{num_complex::Complex, FftPlanner};

use crate::dsp::Staircase;

/// Levels below this are reported as the floor (dB).
pub const FLOOR_DB: f32 = -120.0;

/// Analysis frame length used by [`shaped_sine_profile`].
pub const FRAME_LEN: usize = 4096;

/// Whole sine cycles per analysis frame; also the fundamental's FFT bin.
pub const FRAME_CYCLES: usize = 16;

/// Per-harmonic levels of a periodic signal.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicProfile {
    /// Level of harmonic `k + 1` in dB relative to the fundamental.
    /// Index 0 is the fundamental itself (0 dB unless the signal is silent).
    pub levels_db: Vec<f32>,
    /// Total harmonic distortion in percent.
    pub thd_percent: f32,
}

impl HarmonicProfile {
    /// Level of harmonic `n` (1 = fundamental), if it was measured.
    pub fn level_db(&self, n: usize) -> Option<f32> {
        n.checked_sub(1).and_then(|i| self.levels_db.get(i)).copied()
    }
}

fn hann(len: usize) -> impl Iterator<Item = f32> {
    // Periodic form: exact for frames holding whole cycles
    (0..len).map(move |i| 0.5 * (1.0 - (TAU * i as f32 / len as f32).cos()))
}

fn to_db(ratio: f32) -> f32 {
    if ratio > 0.0 {
        (20.0 * ratio.log10()).max(FLOOR_DB)
    } else {
        FLOOR_DB
    }
}

/// Measure up to `harmonics` multiples of `fundamental_bin`.
///
/// Harmonics at or above Nyquist are dropped, so the profile may be shorter
/// than requested.
pub fn harmonic_profile(
    signal: &[f32],
    fundamental_bin: usize,
    harmonics: usize,
) -> HarmonicProfile {
    let len = signal.len();
    if len == 0 || fundamental_bin == 0 {
        return HarmonicProfile {
            levels_db: Vec::new(),
            thd_percent: 0.0,
        };
    }

    let mut buffer: Vec<Complex<f32>> = signal
        .iter()
        .zip(hann(len))
        .map(|(&s, w)| Complex::new(s * w, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(len);
    fft.process(&mut buffer);

    let nyquist = len / 2;
    let magnitudes: Vec<f32> = (1..=harmonics)
        .map(|k| k * fundamental_bin)
        .take_while(|&bin| bin < nyquist)
        .map(|bin| buffer[bin].norm())
        .collect();

    let fundamental = magnitudes.first().copied().unwrap_or(0.0);
    if fundamental <= 0.0 {
        return HarmonicProfile {
            levels_db: vec![FLOOR_DB; magnitudes.len()],
            thd_percent: 0.0,
        };
    }

    let overtone_power: f32 = magnitudes.iter().skip(1).map(|m| m * m).sum();
    HarmonicProfile {
        levels_db: magnitudes.iter().map(|m| to_db(m / fundamental)).collect(),
        thd_percent: overtone_power.sqrt() / fundamental * 100.0,
    }
}

/// Run a full-scale sine through `shaper` and profile the result.
pub fn shaped_sine_profile(shaper: &Staircase, harmonics: usize) -> HarmonicProfile {
    let mut frame: Vec<f32> = (0..FRAME_LEN)
        .map(|i| (TAU * FRAME_CYCLES as f32 * i as f32 / FRAME_LEN as f32).sin())
        .collect();
    shaper.process_buffer(&mut frame);
    harmonic_profile(&frame, FRAME_CYCLES, harmonics)
}
