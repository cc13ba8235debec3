//! Staircase Distortion / Waveshaping
//!
//! A waveshaper applies a transfer function to each sample:
//!   output = f(input)
//!
//! The staircase shaper quantizes the *magnitude* of a sample down to the
//! nearest threshold at or below it, keeping the sign. Small signals below the
//! last threshold pass through untouched, so the curve is linear near zero and
//! turns into flat steps as the level rises.
//!
//! # Transfer Curve
//!
//! With the default table (0.80, 0.75, ... 0.25):
//!
//! ```text
//!   out
//!   0.80 |                    ______
//!   0.75 |                 __|
//!    ... |              __|
//!   0.25 |      _______|
//!        |     /
//!        |    /   (pass-through below 0.25)
//!      0 +---/-------------------------- in
//!            0.25               0.80
//! ```
//!
//! Anything above the first (largest) threshold clamps to it, which makes the
//! shaper a hard clipper at the top of the range.
//!
//! # Character
//!
//! Each step is a discontinuity, so the output is rich in odd harmonics
//! (the curve is odd-symmetric) and sounds gritty, close to a bit-crusher
//! working on amplitude rather than time.

use thiserror::Error;

/// First (largest) threshold of the default table.
pub const DEFAULT_CEILING: f32 = 0.8;
/// Spacing between neighbouring thresholds of the default table.
pub const DEFAULT_STEP: f32 = 0.05;
/// Number of entries in the default table.
pub const DEFAULT_STEPS: usize = 12;

/// Reasons a threshold table is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold table is empty")]
    Empty,

    #[error("threshold {index} is not finite ({value})")]
    NonFinite { index: usize, value: f32 },

    #[error("threshold {index} = {value} is outside (0, 1]")]
    OutOfRange { index: usize, value: f32 },

    #[error("threshold {index} = {value} is not below its predecessor {previous}")]
    NotDecreasing {
        index: usize,
        value: f32,
        previous: f32,
    },
}

/// Ordered, strictly decreasing staircase boundaries in (0, 1].
///
/// Index 0 holds the largest value (the clamp ceiling), the last index the
/// smallest (the pass-through floor). The table is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    values: Vec<f32>,
}

impl ThresholdTable {
    /// Validate and wrap a threshold list.
    pub fn new(values: Vec<f32>) -> Result<Self, ThresholdError> {
        if values.is_empty() {
            return Err(ThresholdError::Empty);
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ThresholdError::NonFinite { index, value });
            }
            if value <= 0.0 || value > 1.0 {
                return Err(ThresholdError::OutOfRange { index, value });
            }
            if index > 0 {
                let previous = values[index - 1];
                if value >= previous {
                    return Err(ThresholdError::NotDecreasing {
                        index,
                        value,
                        previous,
                    });
                }
            }
        }

        Ok(Self { values })
    }

    /// Evenly spaced table: `ceiling - i * step` for `i` in `0..steps`.
    pub fn linear(ceiling: f32, step: f32, steps: usize) -> Result<Self, ThresholdError> {
        Self::new((0..steps).map(|i| ceiling - i as f32 * step).collect())
    }

    /// Largest threshold; magnitudes above it clamp here.
    pub fn ceiling(&self) -> f32 {
        self.values[0]
    }

    /// Smallest threshold; magnitudes below it pass through.
    pub fn floor(&self) -> f32 {
        self.values[self.values.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a validated table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Largest threshold that is `<= magnitude`, if any.
    #[inline]
    pub fn step_for(&self, magnitude: f32) -> Option<f32> {
        // Descending table: everything before the partition point is above `magnitude`.
        let index = self.values.partition_point(|&t| t > magnitude);
        self.values.get(index).copied()
    }
}

impl Default for ThresholdTable {
    /// The twelve-step table 0.80, 0.75, ... 0.25.
    fn default() -> Self {
        let values = (0..DEFAULT_STEPS)
            .map(|i| DEFAULT_CEILING - i as f32 * DEFAULT_STEP)
            .collect();
        Self { values }
    }
}

/// Staircase transfer function.
///
/// Snaps `|sample|` down to the largest threshold at or below it and restores
/// the sign. Magnitudes below the smallest threshold (and NaN) pass through.
#[inline]
pub fn staircase(sample: f32, table: &ThresholdTable) -> f32 {
    if sample.is_nan() {
        return sample;
    }

    match table.step_for(sample.abs()) {
        Some(step) if sample < 0.0 => -step,
        Some(step) => step,
        None => sample,
    }
}

/// Apply the staircase shaper to an entire buffer in place.
pub fn staircase_buffer(buffer: &mut [f32], table: &ThresholdTable) {
    for sample in buffer.iter_mut() {
        *sample = staircase(*sample, table);
    }
}

/// A staircase shaper bound to its threshold table.
#[derive(Debug, Clone, Default)]
pub struct Staircase {
    table: ThresholdTable,
}

impl Staircase {
    pub fn new(table: ThresholdTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    #[inline]
    pub fn process(&self, sample: f32) -> f32 {
        staircase(sample, &self.table)
    }

    pub fn process_buffer(&self, buffer: &mut [f32]) {
        staircase_buffer(buffer, &self.table);
    }

    /// `(input, output)` pairs over `points` evenly spaced inputs in [-1, 1].
    pub fn transfer_curve(&self, points: usize) -> Vec<(f32, f32)> {
        crate::dsp::signal::linspace(-1.0, 1.0, points)
            .into_iter()
            .map(|x| (x, self.process(x)))
            .collect()
    }
}
