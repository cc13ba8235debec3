//! Phase-accumulating oscillator used for test carriers and LFOs.

/*
Waveform Types
==============

Sine:     Pure tone, fundamental only.
Triangle: Odd harmonics falling off as 1/n². Starts at -1, peaks at +1 half
          way through the cycle, so as an LFO it rises first.
Saw:      All harmonics, rises linearly from -1 to +1 then snaps back.
          Doubles as a "ramp" test carrier.
Square:   Odd harmonics falling off as 1/n. +1 for the first half cycle.

Phase
-----

The oscillator keeps a normalized phase in [0.0, 1.0). Each sample advances
it by frequency / sample_rate and wraps. All waveforms are evaluated from the
same phase, so switching waveform never causes a time jump.
*/

use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Triangle,
    Saw,
    Square,
}

impl OscillatorWaveform {
    /// Bipolar value at a normalized phase in [0, 1).
    #[inline]
    pub fn value_at(self, phase: f32) -> f32 {
        match self {
            OscillatorWaveform::Sine => (TAU * phase).sin(),
            OscillatorWaveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            OscillatorWaveform::Saw => 2.0 * phase - 1.0,
            OscillatorWaveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorWaveform::Triangle)
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorWaveform::Saw)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.waveform
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Produce one sample and advance the phase.
    #[inline]
    pub fn next_sample(&mut self, increment: f32) -> f32 {
        let value = self.waveform.value_at(self.phase);
        self.phase += increment;
        if self.phase >= 1.0 {
            self.phase -= self.phase.floor();
        }
        value
    }

    /// Fill `destination` with bipolar output in [-1.0, 1.0].
    pub fn render(&mut self, destination: &mut [f32], frequency: f32, sample_rate: f32) {
        let increment = frequency / sample_rate;
        for sample in destination.iter_mut() {
            *sample = self.next_sample(increment);
        }
    }
}
