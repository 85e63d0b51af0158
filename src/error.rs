use std::fmt;

/// Errors raised at the boundary of the engine: parameter loading and
/// validation. Synthesis itself is total and never fails.
#[derive(Debug)]
pub enum SynthError {
    /// A numeric field is NaN or infinite.
    NotFinite { field: &'static str, value: f64 },
    /// A field that must be strictly positive is zero or negative.
    NonPositive { field: &'static str, value: f64 },
    /// `floor(T * Fs)` exceeds the sample cap.
    TooManySamples { requested: f64, limit: usize },
    /// Malformed JSON parameter record.
    Json(serde_json::Error),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::NotFinite { field, value } => {
                write!(f, "Parameter '{field}' must be finite, got {value}")
            }
            SynthError::NonPositive { field, value } => {
                write!(f, "Parameter '{field}' must be greater than zero, got {value}")
            }
            SynthError::TooManySamples { requested, limit } => {
                write!(f, "Time window needs {requested} samples, limit is {limit}")
            }
            SynthError::Json(e) => write!(f, "Invalid parameter JSON: {e}"),
        }
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynthError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SynthError {
    fn from(e: serde_json::Error) -> Self {
        SynthError::Json(e)
    }
}
