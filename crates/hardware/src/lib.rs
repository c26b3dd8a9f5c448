//! Cycle-accurate Baugh-Wooley signed multiplier model.
//!
//! This crate implements a fixed-latency, fully synchronous signed integer
//! multiplier built as a multi-stage reduction pipeline:
//! 1. **Core:** Operand normalizer, input latch, Baugh-Wooley partial products,
//!    a double-buffered adder tree, the completion tracker, and the output assembler.
//! 2. **Configuration:** Construction-time operand widths, loadable from JSON.
//! 3. **Simulation:** A driving harness, VCD waveform export, and a reference oracle.
//! 4. **Statistics:** Activity counters and a text report.
//!
//! A multiply accepted on tick `t` pulses `result_valid` on tick
//! `t + ceil(log2(min(A_WIDTH, B_WIDTH)))`; one multiply is in flight at a time.

/// Common bit helpers, constants, and error types.
pub mod common;
/// Multiplier configuration (widths, harness settings).
pub mod config;
/// Multiplier datapath and control path.
pub mod core;
/// Driving harness, waveform capture, and reference oracle.
pub mod sim;
/// Activity counters and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The multiplier model; construct with `Multiplier::new`.
pub use crate::core::Multiplier;
/// Per-tick boundary signals.
pub use crate::core::{TickInputs, TickOutputs};
/// Testbench around a multiplier.
pub use crate::sim::Harness;
