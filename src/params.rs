//! Parameter record collected from the controls, and its resolved form.
//!
//! Field names serialize in camelCase to match the front end's state.
//! Missing fields fall back to the simulator's startup values.

use serde::{Deserialize, Serialize};

use crate::dsp::grid::{MAX_SAMPLES, requested_samples};
use crate::dsp::modulator::ModulationType;
use crate::dsp::oscillator::WaveformShape;
use crate::dsp::units::{FrequencyUnit, TimeUnit, resolve};
use crate::error::SynthError;

// ── Raw parameters ──────────────────────────────────────────

/// Everything the engine needs for one synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisParams {
    /// Carrier peak amplitude Ac (V).
    pub carrier_amplitude: f64,
    pub carrier_frequency: f64,
    pub carrier_freq_unit: FrequencyUnit,

    /// Modulating peak amplitude Am (V).
    pub modulating_amplitude: f64,
    pub modulating_frequency: f64,
    pub modulating_freq_unit: FrequencyUnit,
    pub modulating_waveform: WaveformShape,

    pub modulation_type: ModulationType,
    /// AM modulation index m.
    pub am_modulation_index: f64,
    /// Frequency deviation Δf in Hz (FM and FSK).
    pub fm_frequency_deviation: f64,
    /// PM phase sensitivity kp in rad/V.
    pub pm_phase_sensitivity: f64,

    pub time_duration: f64,
    pub time_unit: TimeUnit,
    pub sampling_frequency: f64,
    pub sampling_freq_unit: FrequencyUnit,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        SynthesisParams {
            carrier_amplitude: 5.0,
            carrier_frequency: 1000.0,
            carrier_freq_unit: FrequencyUnit::Hz,
            modulating_amplitude: 2.0,
            modulating_frequency: 100.0,
            modulating_freq_unit: FrequencyUnit::Hz,
            modulating_waveform: WaveformShape::Sine,
            modulation_type: ModulationType::AM,
            am_modulation_index: 0.8,
            fm_frequency_deviation: 500.0,
            pm_phase_sensitivity: 1.5,
            time_duration: 0.02,
            time_unit: TimeUnit::Seconds,
            sampling_frequency: 50.0,
            sampling_freq_unit: FrequencyUnit::KHz,
        }
    }
}

impl SynthesisParams {
    /// Parse a camelCase JSON parameter record.
    pub fn from_json(json: &str) -> Result<Self, SynthError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Carrier frequency in Hz.
    pub fn carrier_hz(&self) -> f64 {
        resolve(self.carrier_frequency, self.carrier_freq_unit)
    }

    /// Modulating frequency in Hz.
    pub fn modulating_hz(&self) -> f64 {
        resolve(self.modulating_frequency, self.modulating_freq_unit)
    }

    /// Sampling rate in Hz.
    pub fn sample_rate_hz(&self) -> f64 {
        resolve(self.sampling_frequency, self.sampling_freq_unit)
    }

    /// Window length in seconds.
    pub fn duration_secs(&self) -> f64 {
        resolve(self.time_duration, self.time_unit)
    }

    /// Scalar parameters in base SI units.
    pub fn resolved(&self) -> ResolvedParams {
        ResolvedParams {
            fc: self.carrier_hz(),
            fm: self.modulating_hz(),
            ac: self.carrier_amplitude,
            am: self.modulating_amplitude,
            m: self.am_modulation_index,
            df: self.fm_frequency_deviation,
            kp: self.pm_phase_sensitivity,
        }
    }

    /// Check the preconditions synthesis relies on.
    ///
    /// Amplitudes and both frequencies must be strictly positive (Am and fm are
    /// divisors); the window must be positive and fit in `MAX_SAMPLES`.
    pub fn validate(&self) -> Result<(), SynthError> {
        let finite = [
            ("carrierAmplitude", self.carrier_amplitude),
            ("carrierFrequency", self.carrier_frequency),
            ("modulatingAmplitude", self.modulating_amplitude),
            ("modulatingFrequency", self.modulating_frequency),
            ("amModulationIndex", self.am_modulation_index),
            ("fmFrequencyDeviation", self.fm_frequency_deviation),
            ("pmPhaseSensitivity", self.pm_phase_sensitivity),
            ("timeDuration", self.time_duration),
            ("samplingFrequency", self.sampling_frequency),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SynthError::NotFinite { field, value });
            }
        }

        let positive = [
            ("carrierAmplitude", self.carrier_amplitude),
            ("carrierFrequency", self.carrier_frequency),
            ("modulatingAmplitude", self.modulating_amplitude),
            ("modulatingFrequency", self.modulating_frequency),
            ("timeDuration", self.time_duration),
            ("samplingFrequency", self.sampling_frequency),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(SynthError::NonPositive { field, value });
            }
        }

        let requested = requested_samples(self.duration_secs(), self.sample_rate_hz());
        if requested > MAX_SAMPLES as f64 {
            return Err(SynthError::TooManySamples {
                requested,
                limit: MAX_SAMPLES,
            });
        }
        Ok(())
    }
}

// ── Resolved parameters ─────────────────────────────────────

/// Scalars in base SI units (Hz, V), handed to display collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParams {
    /// Carrier frequency (Hz).
    pub fc: f64,
    /// Modulating frequency (Hz).
    pub fm: f64,
    #[serde(rename = "Ac")]
    pub ac: f64,
    #[serde(rename = "Am")]
    pub am: f64,
    pub m: f64,
    pub df: f64,
    pub kp: f64,
}

impl ResolvedParams {
    /// FM modulation index β = Δf / fm.
    pub fn beta(&self) -> f64 {
        self.df / self.fm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve() {
        let p = SynthesisParams::default();
        assert_eq!(p.sample_rate_hz(), 50_000.0);
        assert_eq!(p.duration_secs(), 0.02);
        let r = p.resolved();
        assert_eq!(r.fc, 1000.0);
        assert_eq!(r.fm, 100.0);
        assert_eq!(r.ac, 5.0);
        assert_eq!(r.am, 2.0);
        assert!((r.beta() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(SynthesisParams::default().validate().is_ok());
    }

    #[test]
    fn json_uses_camel_case_and_defaults() {
        let p = SynthesisParams::from_json(
            r#"{
                "carrierFrequency": 2.5,
                "carrierFreqUnit": "MHz",
                "modulatingWaveform": "Digital/Square",
                "modulationType": "FSK",
                "timeUnit": "µs"
            }"#,
        )
        .expect("parse failed");
        assert_eq!(p.carrier_hz(), 2.5e6);
        assert_eq!(p.modulating_waveform, WaveformShape::Square);
        assert_eq!(p.modulation_type, ModulationType::FSK);
        assert_eq!(p.time_unit, TimeUnit::Microseconds);
        // Unspecified fields keep their defaults
        assert_eq!(p.carrier_amplitude, 5.0);
        assert_eq!(p.sampling_freq_unit, FrequencyUnit::KHz);
    }

    #[test]
    fn json_round_trip_keeps_wire_names() {
        let json = serde_json::to_string(&SynthesisParams::default()).unwrap();
        assert!(json.contains("\"amModulationIndex\":0.8"));
        assert!(json.contains("\"modulatingWaveform\":\"Sinusoidal\""));
        let back = SynthesisParams::from_json(&json).unwrap();
        assert_eq!(back, SynthesisParams::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = SynthesisParams::from_json("{\"modulationType\": \"QAM\"}").unwrap_err();
        assert!(matches!(err, SynthError::Json(_)));
    }

    #[test]
    fn resolved_serializes_display_names() {
        let json = serde_json::to_value(SynthesisParams::default().resolved()).unwrap();
        assert_eq!(json["Ac"], 5.0);
        assert_eq!(json["Am"], 2.0);
        assert_eq!(json["fc"], 1000.0);
    }

    #[test]
    fn rejects_zero_modulating_amplitude() {
        let p = SynthesisParams {
            modulating_amplitude: 0.0,
            ..Default::default()
        };
        match p.validate() {
            Err(SynthError::NonPositive { field, .. }) => assert_eq!(field, "modulatingAmplitude"),
            other => panic!("expected NonPositive, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_modulating_frequency() {
        let p = SynthesisParams {
            modulating_frequency: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(SynthError::NonPositive { field: "modulatingFrequency", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_carrier_frequency() {
        for fc in [0.0, -1000.0] {
            let p = SynthesisParams {
                carrier_frequency: fc,
                ..Default::default()
            };
            assert!(
                matches!(
                    p.validate(),
                    Err(SynthError::NonPositive { field: "carrierFrequency", .. })
                ),
                "carrier frequency {fc} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_nan() {
        let p = SynthesisParams {
            pm_phase_sensitivity: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(SynthError::NotFinite { field: "pmPhaseSensitivity", .. })
        ));
    }

    #[test]
    fn rejects_oversized_window() {
        let p = SynthesisParams {
            time_duration: 10.0,
            sampling_frequency: 1.0,
            sampling_freq_unit: FrequencyUnit::MHz,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(SynthError::TooManySamples { .. })));
    }

    #[test]
    fn negative_deviation_is_allowed() {
        let p = SynthesisParams {
            fm_frequency_deviation: -200.0,
            am_modulation_index: 0.0,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
    }
}
