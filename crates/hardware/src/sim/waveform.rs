//! Waveform capture and VCD export.
//!
//! Records the boundary signals of every tick and writes them in Value
//! Change Dump format, so a run can be inspected in any waveform viewer.
//! Each tick occupies one time unit; only signals that changed since the
//! previous tick are emitted after the initial `$dumpvars` block.

use std::io::Write;

use crate::common::bits::truncate;
use crate::core::geometry::Geometry;
use crate::core::signals::{TickInputs, TickOutputs};

/// One recorded tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Inputs applied on the tick.
    pub inputs: TickInputs,
    /// Outputs visible after the tick.
    pub outputs: TickOutputs,
}

/// A traced signal: VCD identifier, name, and width.
struct Signal {
    id: char,
    name: &'static str,
    width: u32,
}

/// In-memory waveform of a multiplier run.
#[derive(Clone, Debug)]
pub struct Waveform {
    geometry: Geometry,
    samples: Vec<Sample>,
}

impl Waveform {
    /// Creates an empty waveform for a multiplier of the given shape.
    pub const fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            samples: Vec::new(),
        }
    }

    /// Appends one tick.
    pub fn record(&mut self, inputs: TickInputs, outputs: TickOutputs) {
        self.samples.push(Sample { inputs, outputs });
    }

    /// Recorded ticks, oldest first.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn signals(&self) -> [Signal; 6] {
        let g = &self.geometry;
        [
            Signal { id: '!', name: "reset", width: 1 },
            Signal { id: '"', name: "start", width: 1 },
            Signal { id: '#', name: "operand_a", width: g.a_width() },
            Signal { id: '$', name: "operand_b", width: g.b_width() },
            Signal { id: '%', name: "result", width: g.product_width() },
            Signal { id: '&', name: "result_valid", width: 1 },
        ]
    }

    /// Raw bit patterns of every signal for one sample, in `signals()` order.
    fn values(&self, sample: &Sample) -> [u128; 6] {
        let g = &self.geometry;
        [
            u128::from(sample.inputs.reset),
            u128::from(sample.inputs.start),
            truncate(sample.inputs.operand_a, g.a_width()),
            truncate(sample.inputs.operand_b, g.b_width()),
            truncate(sample.outputs.result, g.product_width()),
            u128::from(sample.outputs.result_valid),
        ]
    }

    /// Writes the waveform as a VCD document.
    pub fn write_vcd<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let signals = self.signals();

        writeln!(out, "$version bwmul {} $end", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "$timescale 1ns $end")?;
        writeln!(out, "$scope module multiplier $end")?;
        for s in &signals {
            writeln!(out, "$var wire {} {} {} $end", s.width, s.id, s.name)?;
        }
        writeln!(out, "$upscope $end")?;
        writeln!(out, "$enddefinitions $end")?;

        let mut previous: Option<[u128; 6]> = None;
        for (tick, sample) in self.samples.iter().enumerate() {
            let values = self.values(sample);
            writeln!(out, "#{tick}")?;
            if previous.is_none() {
                writeln!(out, "$dumpvars")?;
            }
            for (i, s) in signals.iter().enumerate() {
                if previous.is_some_and(|p| p[i] == values[i]) {
                    continue;
                }
                write_value(out, s, values[i])?;
            }
            if previous.is_none() {
                writeln!(out, "$end")?;
            }
            previous = Some(values);
        }
        writeln!(out, "#{}", self.samples.len())?;
        Ok(())
    }

    /// Renders the waveform as a VCD string.
    ///
    /// Returns an empty string if rendering fails, which an in-memory
    /// buffer never does.
    pub fn to_vcd(&self) -> String {
        let mut buf = Vec::new();
        match self.write_vcd(&mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => String::new(),
        }
    }
}

fn write_value<W: Write>(out: &mut W, signal: &Signal, value: u128) -> std::io::Result<()> {
    if signal.width == 1 {
        writeln!(out, "{}{}", value & 1, signal.id)
    } else {
        let width = signal.width as usize;
        writeln!(out, "b{value:0width$b} {}", signal.id)
    }
}
