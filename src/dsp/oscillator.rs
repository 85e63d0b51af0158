//! Carrier and modulating oscillators evaluated at absolute time.
//!
//! Unlike a streaming oscillator these keep no phase state: every sample is
//! `f(t)` on the shared grid, so the three displayed signals line up exactly.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Shape of the modulating signal. The carrier is always a sine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveformShape {
    #[serde(rename = "Sinusoidal", alias = "sine")]
    Sine,
    #[serde(rename = "Digital/Square", alias = "square")]
    Square,
}

/// A fixed-amplitude, fixed-frequency oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub waveform: WaveformShape,
    /// Peak amplitude in volts.
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: f64,
}

impl Oscillator {
    pub fn new(waveform: WaveformShape, amplitude: f64, frequency: f64) -> Self {
        Oscillator {
            waveform,
            amplitude,
            frequency,
        }
    }

    /// Sinusoidal carrier `Ac * sin(2π fc t)`.
    pub fn carrier(amplitude: f64, frequency: f64) -> Self {
        Self::new(WaveformShape::Sine, amplitude, frequency)
    }

    /// Value at time `t` (seconds).
    pub fn sample_at(&self, t: f64) -> f64 {
        let s = (2.0 * PI * self.frequency * t).sin();
        match self.waveform {
            WaveformShape::Sine => self.amplitude * s,
            WaveformShape::Square => self.amplitude * square_sign(s),
        }
    }

    /// Evaluate over a whole time grid.
    pub fn render(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.sample_at(t)).collect()
    }
}

/// Sign of `s` with zero (and NaN) mapped to +1, so a square wave never
/// emits a zero-amplitude sample at its transitions.
fn square_sign(s: f64) -> f64 {
    if s < 0.0 { -1.0 } else { 1.0 }
}
