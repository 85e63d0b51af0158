//! Unit scales for frequency and time inputs.
//!
//! The UI collects every frequency and duration as a `(value, unit)` pair.
//! Everything downstream of the resolver works in base SI units (Hz, s).

use std::f64::consts::SQRT_2;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit with a fixed multiplier to its base SI unit.
pub trait Unit: Copy {
    fn multiplier(self) -> f64;
}

/// Frequency scales offered by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyUnit {
    #[serde(rename = "Hz")]
    Hz,
    #[serde(rename = "KHz", alias = "kHz")]
    KHz,
    #[serde(rename = "MHz")]
    MHz,
}

/// Time scales for the plotting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "µs", alias = "us")]
    Microseconds,
}

impl Unit for FrequencyUnit {
    fn multiplier(self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
        }
    }
}

impl Unit for TimeUnit {
    fn multiplier(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 1e-3,
            TimeUnit::Microseconds => 1e-6,
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "KHz",
            FrequencyUnit::MHz => "MHz",
        };
        f.write_str(s)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "µs",
        };
        f.write_str(s)
    }
}

/// Convert a `(value, unit)` pair to base SI units.
pub fn resolve<U: Unit>(value: f64, unit: U) -> f64 {
    value * unit.multiplier()
}

/// RMS voltage of a sinusoid with the given peak amplitude.
pub fn peak_to_rms(amplitude: f64) -> f64 {
    amplitude / SQRT_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilohertz_resolves() {
        assert_eq!(resolve(5.0, FrequencyUnit::KHz), 5000.0);
    }

    #[test]
    fn milliseconds_resolve() {
        assert!((resolve(2.0, TimeUnit::Milliseconds) - 0.002).abs() < 1e-15);
    }

    #[test]
    fn base_units_are_identity() {
        for x in [0.0, 1.0, 123.456, -7.5] {
            assert_eq!(resolve(x, FrequencyUnit::Hz), x);
            assert_eq!(resolve(x, TimeUnit::Seconds), x);
        }
    }

    #[test]
    fn multipliers() {
        assert_eq!(FrequencyUnit::MHz.multiplier(), 1e6);
        assert_eq!(TimeUnit::Microseconds.multiplier(), 1e-6);
    }

    #[test]
    fn rms_of_unit_peak() {
        let rms = peak_to_rms(5.0);
        assert!((rms - 3.5355).abs() < 1e-4, "Vrms of 5 Vp should be ~3.54, got {rms}");
    }

    #[test]
    fn unit_wire_names() {
        assert_eq!(serde_json::to_string(&FrequencyUnit::KHz).unwrap(), "\"KHz\"");
        assert_eq!(serde_json::to_string(&TimeUnit::Microseconds).unwrap(), "\"µs\"");
        let us: TimeUnit = serde_json::from_str("\"us\"").unwrap();
        assert_eq!(us, TimeUnit::Microseconds);
        assert_eq!(format!("{}", TimeUnit::Milliseconds), "ms");
    }
}
