pub mod dsp;
pub mod equation;
pub mod error;
pub mod params;

pub use crate::dsp::engine::{SynthesisResult, WaveformPoint, synthesize};
pub use crate::error::SynthError;
pub use crate::params::{ResolvedParams, SynthesisParams};

use crate::equation::SignalSummary;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the modsim-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: the simulator's startup parameters.
#[wasm_bindgen]
pub fn default_params() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&SynthesisParams::default())
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: validate a parameter object and synthesize the three traces.
#[wasm_bindgen]
pub fn synthesize_waves(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    params.validate().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let result = synthesize(&params);
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: equation text and RMS readouts for a parameter object.
#[wasm_bindgen]
pub fn describe_signals(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    let summary = SignalSummary::new(
        params.modulation_type,
        params.modulating_waveform,
        &params.resolved(),
    );
    serde_wasm_bindgen::to_value(&summary).map_err(|e| JsValue::from_str(&format!("{e}")))
}

fn params_from_js(params: JsValue) -> Result<SynthesisParams, JsValue> {
    serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&format!("{e}")))
}

#[cfg(target_arch = "wasm32")]
static INIT_LOGGER: std::sync::Once = std::sync::Once::new();

/// WASM-exposed: route `log` output and panics to the browser console.
/// Safe to call more than once.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_logging() {
    INIT_LOGGER.call_once(|| {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
        console_error_panic_hook::set_once();
        log::info!("modsim-core {VERSION} logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // Native callers install their own `log` backend
}
