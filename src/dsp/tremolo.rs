//! Tremolo dataset generator.
//!
//! Tremolo is amplitude modulation by an LFO:
//!
//! ```text
//!   gain   = 1 - depth * unipolar(lfo)
//!   output = input * gain
//! ```
//!
//! With depth 0 the signal is untouched; with depth 1 the gain swings all the
//! way to silence at each LFO peak. The generator drives a positive saw "ramp"
//! carrier, rising from [`RAMP_FLOOR`] to 1, through a triangle LFO and records
//! every stage, producing the same `sample,input,output,tri_wave` table the
//! tremolo analysis reads.
//!
//! The carrier never crosses zero, so the output envelope follows the gain and
//! the `(max - min) / (max + min)` depth estimate grows with `depth`.

use tracing::debug;

use crate::dsp::lfo::bipolar_to_unipolar;
use crate::dsp::oscillator::OscillatorBlock;
use crate::io::TremoloRow;

/// Lowest level of the ramp carrier; it rises from here to 1.0 each cycle.
pub const RAMP_FLOOR: f32 = 0.75;

/// Map a bipolar saw value onto the `[RAMP_FLOOR, 1]` carrier range.
#[inline]
fn ramp_level(saw: f32) -> f32 {
    RAMP_FLOOR + (1.0 - RAMP_FLOOR) * bipolar_to_unipolar(saw)
}

/// Tremolo gain for one LFO value.
#[inline]
pub fn tremolo_gain(lfo: f32, depth: f32) -> f32 {
    1.0 - depth * bipolar_to_unipolar(lfo)
}

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct TremoloSettings {
    sample_rate: f32,
    length: usize,
    carrier_hz: f32,
    lfo_hz: f32,
    depth: f32,
}

impl TremoloSettings {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            length: 96_000,
            carrier_hz: 220.0,
            lfo_hz: 5.0,
            depth: 0.5,
        }
    }

    pub fn sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate.max(1.0);
        self
    }

    /// Number of rows to generate.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Frequency of the ramp carrier in Hz.
    pub fn carrier_hz(mut self, carrier_hz: f32) -> Self {
        self.carrier_hz = carrier_hz;
        self
    }

    pub fn lfo_hz(mut self, lfo_hz: f32) -> Self {
        self.lfo_hz = lfo_hz;
        self
    }

    /// Modulation depth, clamped to [0.0, 1.0].
    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth.clamp(0.0, 1.0);
        self
    }
}

impl Default for TremoloSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the ramp carrier, the triangle LFO and the modulated output.
pub fn generate(settings: &TremoloSettings) -> Vec<TremoloRow> {
    let mut carrier = OscillatorBlock::sawtooth();
    let mut lfo = OscillatorBlock::triangle();

    let carrier_step = settings.carrier_hz / settings.sample_rate;
    let lfo_step = settings.lfo_hz / settings.sample_rate;

    let rows: Vec<TremoloRow> = (0..settings.length)
        .map(|i| {
            let input = ramp_level(carrier.next_sample(carrier_step));
            let tri_wave = lfo.next_sample(lfo_step);
            TremoloRow {
                sample: i as u64,
                input,
                output: input * tremolo_gain(tri_wave, settings.depth),
                tri_wave,
            }
        })
        .collect();

    debug!(
        rows = rows.len(),
        lfo_hz = settings.lfo_hz,
        depth = settings.depth,
        "generated tremolo table"
    );
    rows
}
