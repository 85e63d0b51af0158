//! Signal synthesis — pure Rust, deterministic, single-shot.
//!
//! The same code backs the browser front end (via WASM) and native callers.

pub mod engine;
pub mod grid;
pub mod modulator;
pub mod oscillator;
pub mod units;
