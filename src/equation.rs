//! Human-readable signal equations for the "Show Equations" view.
//!
//! Built from the same [`ResolvedParams`] the engine returns, so the text
//! always describes the plotted traces.

use serde::{Deserialize, Serialize};

use crate::dsp::modulator::ModulationType;
use crate::dsp::oscillator::WaveformShape;
use crate::dsp::units::peak_to_rms;
use crate::params::ResolvedParams;

/// Format a frequency in Hz with a Hz / KHz / MHz suffix and two decimals.
pub fn format_frequency(hz: f64) -> String {
    if hz >= 1e6 {
        format!("{} MHz", fixed2(hz / 1e6))
    } else if hz >= 1e3 {
        format!("{} KHz", fixed2(hz / 1e3))
    } else {
        format!("{} Hz", fixed2(hz))
    }
}

/// Two-decimal formatting with the browser's `toFixed(2)` rules: exact ties
/// round away from zero and negative zero prints unsigned.
///
/// `{:.2}` already rounds the exact binary value correctly; it only differs
/// on exact ties, where it picks the even digit. A double is an exact tie at
/// the third decimal only when its fractional part is an odd number of
/// eighths (x.125, x.375, x.625, x.875).
fn fixed2(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let a = x.abs();
    let eighths = a * 8.0;
    if a < 1e12 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (a * 100.0).ceil() as u64;
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    } else {
        format!("{sign}{a:.2}")
    }
}

/// Equation text for the three traces plus the control-panel RMS readouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalSummary {
    pub carrier: String,
    pub modulating: String,
    pub modulated: String,
    /// Carrier RMS voltage.
    pub carrier_vrms: f64,
    /// Modulating RMS voltage.
    pub modulating_vrms: f64,
}

impl SignalSummary {
    pub fn new(scheme: ModulationType, shape: WaveformShape, p: &ResolvedParams) -> Self {
        SignalSummary {
            carrier: carrier_equation(p),
            modulating: modulating_equation(shape, p),
            modulated: modulated_equation(scheme, p),
            carrier_vrms: peak_to_rms(p.ac),
            modulating_vrms: peak_to_rms(p.am),
        }
    }
}

pub fn carrier_equation(p: &ResolvedParams) -> String {
    format!("c(t) = {} sin(2π * {} * t)", fixed2(p.ac), format_frequency(p.fc))
}

pub fn modulating_equation(shape: WaveformShape, p: &ResolvedParams) -> String {
    match shape {
        WaveformShape::Sine => {
            format!("m(t) = {} sin(2π * {} * t)", fixed2(p.am), format_frequency(p.fm))
        }
        WaveformShape::Square => format!(
            "m(t) = Square wave with Amplitude {}V and Frequency {}",
            fixed2(p.am),
            format_frequency(p.fm)
        ),
    }
}

pub fn modulated_equation(scheme: ModulationType, p: &ResolvedParams) -> String {
    let ac = fixed2(p.ac);
    let fc = format_frequency(p.fc);
    match scheme {
        ModulationType::AM => format!(
            "s(t) = {ac} [1 + {} * m(t)/{}] sin(2π * {fc} * t)",
            fixed2(p.m),
            fixed2(p.am)
        ),
        // The closed form describes a sinusoidal message; the trace itself
        // is integrated numerically.
        ModulationType::FM => format!(
            "s(t) = {ac} sin(2π * {fc} * t + {} * sin(2π * {} * t))",
            fixed2(p.beta()),
            format_frequency(p.fm)
        ),
        ModulationType::PM => {
            format!("s(t) = {ac} sin(2π * {fc} * t + {} * m(t))", fixed2(p.kp))
        }
        ModulationType::ASK => {
            format!("s(t) = A(t) * sin(2π * {fc} * t), where A(t) shifts based on m(t)")
        }
        ModulationType::FSK => format!(
            "s(t) = {ac} sin(2π * f(t) * t), where f(t) shifts between {} and {}",
            format_frequency(p.fc - p.df),
            format_frequency(p.fc + p.df)
        ),
        ModulationType::PSK => {
            format!("s(t) = {ac} sin(2π * {fc} * t + φ(t)), where φ(t) shifts based on m(t)")
        }
    }
}
