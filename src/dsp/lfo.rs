//! Low Frequency Oscillator (LFO) helpers.

/*
Low Frequency Oscillators
=========================

An LFO is an ordinary oscillator run well below the audible range. It does not
make sound on its own; it moves a parameter of another signal. Here the only
parameter it moves is amplitude, which is what tremolo is.

Vocabulary
----------

  control-rate    Frequencies below ~20 Hz. Heard as movement, not as pitch.

  period          Time for one complete oscillation.
                  At 5 Hz: period = 1/5 = 0.2 seconds

  bipolar         Output swings -1.0 to +1.0. This is what OscillatorBlock
                  produces and what the tremolo table stores as `tri_wave`.

  unipolar        Output stays in 0.0 to 1.0. Gain curves want this:
                  a negative gain would flip the signal's polarity.
                  unipolar = (bipolar + 1.0) / 2.0


Tremolo Speeds
--------------

    0.5 - 2 Hz      Slow swell
    2 - 7 Hz        Classic amp tremolo
    7 - 15 Hz       Fast, "helicopter" chop
    > 20 Hz         Amplitude modulation proper: sidebands, not wobble

At 48 kHz a 5 Hz triangle LFO takes 9600 samples per cycle, so a 10 000
sample analysis window sees roughly one full swell.
*/

/// Convert bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Convert unipolar signal (0.0 to 1.0) to bipolar (-1.0 to +1.0).
#[inline]
pub fn unipolar_to_bipolar(unipolar: f32) -> f32 {
    (unipolar * 2.0) - 1.0
}

/// LFO period in seconds.
///
/// # Example
/// ```
/// use stair_dsp::dsp::lfo::period_from_frequency;
/// let period = period_from_frequency(5.0);
/// assert!((period - 0.2).abs() < 1e-6);
/// ```
#[inline]
pub fn period_from_frequency(frequency_hz: f32) -> f32 {
    1.0 / frequency_hz
}

/// Samples in one LFO cycle.
///
/// # Example
/// ```
/// use stair_dsp::dsp::lfo::samples_per_period;
/// assert_eq!(samples_per_period(5.0, 48000.0), 9600.0);
/// ```
#[inline]
pub fn samples_per_period(frequency_hz: f32, sample_rate: f32) -> f32 {
    sample_rate / frequency_hz
}
