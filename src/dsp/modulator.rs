//! Modulated-wave synthesis for the six supported schemes.
//!
//! Every scheme consumes the modulating signal already rendered on the time
//! grid rather than re-evaluating it, so the plotted m(t) is exactly what
//! drives s(t). All schemes except FM are pointwise; FM integrates phase.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::params::ResolvedParams;

/// Supported modulation schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModulationType {
    AM,
    FM,
    PM,
    ASK,
    FSK,
    PSK,
}

/// Analog schemes vary continuously with m(t); digital ones key between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModulationFamily {
    Analog,
    Digital,
}

impl ModulationType {
    pub const VARIANTS: [ModulationType; 6] = [
        ModulationType::AM,
        ModulationType::FM,
        ModulationType::PM,
        ModulationType::ASK,
        ModulationType::FSK,
        ModulationType::PSK,
    ];

    pub fn family(self) -> ModulationFamily {
        match self {
            ModulationType::AM | ModulationType::FM | ModulationType::PM => {
                ModulationFamily::Analog
            }
            ModulationType::ASK | ModulationType::FSK | ModulationType::PSK => {
                ModulationFamily::Digital
            }
        }
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            ModulationType::AM => "AM (Amplitude Modulation)",
            ModulationType::FM => "FM (Frequency Modulation)",
            ModulationType::PM => "PM (Phase Modulation)",
            ModulationType::ASK => "ASK (Amplitude Shift Keying)",
            ModulationType::FSK => "FSK (Frequency Shift Keying)",
            ModulationType::PSK => "PSK (Phase Shift Keying)",
        }
    }
}

/// Render s(t) for `scheme` over `times`, driven by the rendered `message`.
///
/// `times` and `message` must have the same length.
pub fn modulate(
    scheme: ModulationType,
    times: &[f64],
    message: &[f64],
    p: &ResolvedParams,
) -> Vec<f64> {
    debug_assert_eq!(times.len(), message.len());

    let samples = times.iter().zip(message);
    match scheme {
        ModulationType::AM => samples
            .map(|(&t, &m)| {
                let envelope = p.ac * (1.0 + p.m * (m / p.am));
                envelope * carrier_phase(p.fc, t).sin()
            })
            .collect(),
        ModulationType::FM => fm_phase(times, message, p)
            .into_iter()
            .map(|phase| p.ac * phase.sin())
            .collect(),
        ModulationType::PM => samples
            .map(|(&t, &m)| p.ac * (carrier_phase(p.fc, t) + p.kp * m).sin())
            .collect(),
        ModulationType::ASK => samples
            .map(|(&t, &m)| {
                let amplitude = if m > 0.0 { p.ac } else { p.ac / 4.0 };
                amplitude * carrier_phase(p.fc, t).sin()
            })
            .collect(),
        ModulationType::FSK => samples
            .map(|(&t, &m)| p.ac * carrier_phase(fsk_frequency(m, p), t).sin())
            .collect(),
        ModulationType::PSK => samples
            .map(|(&t, &m)| {
                let offset = if m > 0.0 { 0.0 } else { PI };
                p.ac * (carrier_phase(p.fc, t) + offset).sin()
            })
            .collect(),
    }
}

/// `2π f t`
fn carrier_phase(frequency: f64, t: f64) -> f64 {
    2.0 * PI * frequency * t
}

/// FM instantaneous frequency for a given modulating sample.
pub fn instantaneous_frequency(message: f64, p: &ResolvedParams) -> f64 {
    p.fc + p.df * (message / p.am)
}

/// FSK keying: mark at `fc + df` while m(t) is positive, space at `fc - df` otherwise.
pub fn fsk_frequency(message: f64, p: &ResolvedParams) -> f64 {
    if message > 0.0 { p.fc + p.df } else { p.fc - p.df }
}

/// Accumulated FM phase at every grid point (forward Euler).
///
/// Sample 0 has phase 0. The increment landing on sample `i` uses the
/// modulating value at `i - 1`, which lags the pointwise schemes by one
/// sample. Output compatibility depends on keeping that lag.
pub fn fm_phase(times: &[f64], message: &[f64], p: &ResolvedParams) -> Vec<f64> {
    (0..times.len())
        .scan(0.0_f64, |phase, i| {
            if i > 0 {
                let inst_freq = instantaneous_frequency(message[i - 1], p);
                let dt = times[i] - times[i - 1];
                *phase += 2.0 * PI * inst_freq * dt;
            }
            Some(*phase)
        })
        .collect()
}
