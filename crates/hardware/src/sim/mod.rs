//! Simulation harness and reference checking.
//!
//! Provides the external driver that clocks a multiplier, a waveform
//! recorder with VCD export, and the reference model results are checked
//! against.

/// Testbench that settles reset and drives multiplies.
pub mod harness;

/// Reference products and sign expectations.
pub mod oracle;

/// Per-tick waveform capture and VCD export.
pub mod waveform;

pub use harness::{Harness, Product};
pub use waveform::Waveform;
