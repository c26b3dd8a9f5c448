//! Driving harness: supplies the clock, settles reset, and issues multiplies.
//!
//! The harness owns a [`Multiplier`] and plays the role of the external
//! testbench. It performs:
//! 1. **Reset settling:** Asserts reset for the configured number of ticks.
//! 2. **Single multiplies:** Drives one start and idles until `result_valid`.
//! 3. **Free-form stimulus:** Applies arbitrary [`TickInputs`] one tick at a time.
//! 4. **Waveform capture:** Optionally records every tick for VCD export.

use std::io::Write;

use tracing::{info, warn};

use crate::common::constants::HARNESS_TIMEOUT_SLACK;
use crate::common::error::{ConfigError, HarnessError};
use crate::config::Config;
use crate::core::multiplier::Multiplier;
use crate::core::signals::{TickInputs, TickOutputs};
use crate::sim::waveform::Waveform;

/// A completed multiply as observed at the output ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    /// Port A operand as driven.
    pub operand_a: i128,
    /// Port B operand as driven.
    pub operand_b: i128,
    /// `result` on the tick `result_valid` was high.
    pub result: i128,
    /// Ticks from the accepted start to the valid pulse.
    pub latency: u64,
    /// Harness tick on which the valid pulse was observed (0-based).
    pub tick: u64,
}

/// Testbench around one multiplier.
#[derive(Debug)]
pub struct Harness {
    multiplier: Multiplier,
    reset_cycles: u32,
    waveform: Option<Waveform>,
    ticks: u64,
}

impl Harness {
    /// Builds a harness from `config` and applies the initial reset.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let multiplier = Multiplier::new(config)?;
        let waveform = config
            .general
            .trace_ticks
            .then(|| Waveform::new(*multiplier.geometry()));
        let mut harness = Self {
            multiplier,
            reset_cycles: config.general.reset_cycles,
            waveform,
            ticks: 0,
        };
        harness.reset();
        Ok(harness)
    }

    /// Asserts reset for the configured settling period.
    pub fn reset(&mut self) {
        for _ in 0..self.reset_cycles {
            let _ = self.step(TickInputs::reset());
        }
    }

    /// Applies one tick of stimulus.
    pub fn step(&mut self, inputs: TickInputs) -> TickOutputs {
        let outputs = self.multiplier.tick(inputs);
        if let Some(waveform) = self.waveform.as_mut() {
            waveform.record(inputs, outputs);
        }
        self.ticks += 1;
        outputs
    }

    /// Runs `count` idle ticks, returning the outputs of the last one.
    pub fn idle(&mut self, count: u32) -> TickOutputs {
        let mut outputs = self.multiplier.outputs();
        for _ in 0..count {
            outputs = self.step(TickInputs::idle());
        }
        outputs
    }

    /// Multiplies one operand pair and waits for the result.
    ///
    /// Fails with [`HarnessError::Busy`] if a multiply is still in flight,
    /// since the start would be ignored. Waits up to the latency plus
    /// [`HARNESS_TIMEOUT_SLACK`] ticks and fails with
    /// [`HarnessError::Timeout`] if no pulse arrives; a late pulse is
    /// returned with its observed latency.
    pub fn multiply(&mut self, operand_a: i128, operand_b: i128) -> Result<Product, HarnessError> {
        if self.multiplier.is_busy() {
            warn!(operand_a, operand_b, "multiply requested while busy");
            return Err(HarnessError::Busy);
        }

        let _ = self.step(TickInputs::start(operand_a, operand_b));
        let expected = self.multiplier.geometry().latency();
        let limit = u64::from(expected + HARNESS_TIMEOUT_SLACK);
        for latency in 1..=limit {
            let outputs = self.step(TickInputs::idle());
            if outputs.result_valid {
                let product = Product {
                    operand_a,
                    operand_b,
                    result: outputs.result,
                    latency,
                    tick: self.ticks - 1,
                };
                if latency != u64::from(expected) {
                    warn!(latency, expected, "result_valid arrived off schedule");
                }
                info!(operand_a, operand_b, result = product.result, latency, "multiply complete");
                return Ok(product);
            }
        }
        Err(HarnessError::Timeout { ticks: limit })
    }

    /// Multiplies every pair in order, one multiply in flight at a time.
    pub fn run(&mut self, pairs: &[(i128, i128)]) -> Result<Vec<Product>, HarnessError> {
        pairs.iter().map(|&(a, b)| self.multiply(a, b)).collect()
    }

    /// The multiplier under test.
    pub const fn multiplier(&self) -> &Multiplier {
        &self.multiplier
    }

    /// Ticks applied so far, including reset.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Recorded waveform, if tick tracing is enabled.
    pub const fn waveform(&self) -> Option<&Waveform> {
        self.waveform.as_ref()
    }

    /// Writes the recorded waveform as VCD.
    ///
    /// Writes nothing if tick tracing was not enabled.
    pub fn write_vcd<W: Write>(&self, out: &mut W) -> Result<(), HarnessError> {
        match &self.waveform {
            Some(waveform) => waveform.write_vcd(out)?,
            None => warn!("waveform requested but tick tracing is disabled"),
        }
        Ok(())
    }
}
