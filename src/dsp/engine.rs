//! Synthesis engine — turns one parameter record into the three plotted signals.
//!
//! Pure and single-shot: no state survives between calls, and identical
//! inputs produce bit-identical output.

use serde::{Deserialize, Serialize};

use crate::params::{ResolvedParams, SynthesisParams};

use super::grid::time_grid;
use super::modulator::modulate;
use super::oscillator::Oscillator;

/// A single sample on a plotted trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveformPoint {
    /// Seconds since the start of the window.
    pub time: f64,
    /// Volts.
    pub amplitude: f64,
}

/// Output of one synthesis call. All three traces share the same time grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResult {
    pub carrier: Vec<WaveformPoint>,
    pub modulating: Vec<WaveformPoint>,
    pub modulated: Vec<WaveformPoint>,
    pub params: ResolvedParams,
}

impl SynthesisResult {
    /// Number of samples per trace.
    pub fn len(&self) -> usize {
        self.carrier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carrier.is_empty()
    }
}

/// Synthesize carrier, modulating and modulated waves.
///
/// Total over all inputs. Preconditions (`Am > 0`, `fm > 0`, bounded window)
/// are the caller's job, see [`SynthesisParams::validate`]; violating them
/// yields NaN samples or a grid clamped to `MAX_SAMPLES`, never a panic.
pub fn synthesize(params: &SynthesisParams) -> SynthesisResult {
    let resolved = params.resolved();
    let times = time_grid(params.duration_secs(), params.sample_rate_hz());

    let carrier = Oscillator::carrier(resolved.ac, resolved.fc).render(&times);
    let message =
        Oscillator::new(params.modulating_waveform, resolved.am, resolved.fm).render(&times);
    let modulated = modulate(params.modulation_type, &times, &message, &resolved);

    log::debug!(
        "synthesized {} samples: {:?} over {:?} message, fc={} Hz, fm={} Hz",
        times.len(),
        params.modulation_type,
        params.modulating_waveform,
        resolved.fc,
        resolved.fm
    );

    SynthesisResult {
        carrier: to_points(&times, &carrier),
        modulating: to_points(&times, &message),
        modulated: to_points(&times, &modulated),
        params: resolved,
    }
}

fn to_points(times: &[f64], values: &[f64]) -> Vec<WaveformPoint> {
    times
        .iter()
        .zip(values)
        .map(|(&time, &amplitude)| WaveformPoint { time, amplitude })
        .collect()
}
