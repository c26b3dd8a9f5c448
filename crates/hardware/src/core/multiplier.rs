//! Top-level multiplier: wires every stage into one synchronous tick.
//!
//! Each call to [`Multiplier::tick`] is one clock edge. The stages update in
//! a single logical transaction:
//! 1. **Tracker:** Decides reset / completion / accept / advance from its previous state.
//! 2. **Latch + layer 0:** Load from the normalized inputs only on an accepted start.
//! 3. **Reducer:** Every layer is recomputed from the previous tick's rows.
//! 4. **Output:** Assembled combinationally from the new register state.

use tracing::{debug, trace};

use crate::common::error::ConfigError;
use crate::config::Config;
use crate::core::adder_tree::LayerTable;
use crate::core::geometry::Geometry;
use crate::core::normalizer::{InputLatch, OperandNormalizer, OperandPair};
use crate::core::output;
use crate::core::signals::{TickInputs, TickOutputs};
use crate::core::tracker::{CompletionTracker, Phase, TrackerEvent};
use crate::stats::MultiplierStats;

/// Cycle-accurate Baugh-Wooley multiplier with an adder-tree reducer.
///
/// # Examples
///
/// ```
/// use bwmul_core::{Config, Multiplier, TickInputs};
///
/// let mut mul = Multiplier::new(&Config::with_widths(3, 6)).unwrap();
/// let _ = mul.tick(TickInputs::reset());
/// let _ = mul.tick(TickInputs::start(3, -30));
/// let _ = mul.tick(TickInputs::idle());
/// let out = mul.tick(TickInputs::idle());
/// assert!(out.result_valid);
/// assert_eq!(out.result, -90);
/// ```
#[derive(Clone, Debug)]
pub struct Multiplier {
    geometry: Geometry,
    normalizer: OperandNormalizer,
    latch: InputLatch,
    layers: LayerTable,
    tracker: CompletionTracker,
    /// Reset input of the most recent tick; gates the output to zero.
    reset_line: bool,
    stats: MultiplierStats,
}

impl Multiplier {
    /// Validates `config` and builds an idle multiplier with all state cleared.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::from_geometry(config.validate()?))
    }

    /// Builds an idle multiplier for an already validated geometry.
    pub fn from_geometry(geometry: Geometry) -> Self {
        debug!(
            a_width = geometry.a_width(),
            b_width = geometry.b_width(),
            layers = geometry.layer_count(),
            latency = geometry.latency(),
            multiplicand = %geometry.multiplicand_port(),
            "multiplier constructed"
        );
        Self {
            geometry,
            normalizer: OperandNormalizer::new(geometry),
            latch: InputLatch::new(),
            layers: LayerTable::new(geometry),
            tracker: CompletionTracker::new(geometry.latency()),
            reset_line: false,
            stats: MultiplierStats::default(),
        }
    }

    /// Advances the multiplier by one clock tick and returns the new outputs.
    pub fn tick(&mut self, inputs: TickInputs) -> TickOutputs {
        self.stats.ticks += 1;
        let event = self.tracker.step(inputs.reset, inputs.start);

        if inputs.reset {
            self.latch.clear();
            self.layers.clear();
        } else {
            let fresh = event
                .is_accepted()
                .then(|| self.normalizer.normalize(inputs.operand_a, inputs.operand_b));
            self.layers.advance(fresh);
            if let Some(pair) = fresh {
                self.latch.capture(pair);
            }
        }
        self.reset_line = inputs.reset;

        let outputs = self.outputs();
        self.record(event, outputs);
        outputs
    }

    fn record(&mut self, event: TrackerEvent, outputs: TickOutputs) {
        if self.tracker.is_busy() {
            self.stats.busy_ticks += 1;
        }
        if event.start_ignored() {
            self.stats.starts_rejected += 1;
            debug!(tick = self.stats.ticks, "start ignored: multiply in flight");
        }

        match event {
            TrackerEvent::Reset { aborted } => {
                self.stats.resets += 1;
                if aborted {
                    self.stats.aborted += 1;
                    debug!(tick = self.stats.ticks, "reset abandoned multiply in flight");
                }
            }
            TrackerEvent::Accepted => {
                self.stats.starts_accepted += 1;
                let latched = self.latch.operands();
                debug!(
                    tick = self.stats.ticks,
                    multiplicand = latched.multiplicand_value(&self.geometry),
                    multiplier = latched.multiplier_value(&self.geometry),
                    "start accepted"
                );
            }
            TrackerEvent::Completed { .. } => {
                self.stats.results += 1;
                if self.latch.operands().has_zero() {
                    self.stats.zero_results += 1;
                }
                debug!(tick = self.stats.ticks, result = outputs.result, "result valid");
            }
            TrackerEvent::Advanced { .. } | TrackerEvent::Idle => {}
        }

        trace!(
            tick = self.stats.ticks,
            phase = ?self.tracker.phase(),
            final_row = self.layers.final_row(),
            "tick"
        );
    }

    /// Outputs as visible after the most recent tick.
    pub fn outputs(&self) -> TickOutputs {
        TickOutputs {
            result: output::assemble(
                &self.geometry,
                self.reset_line,
                self.latch.operands(),
                self.layers.final_row(),
            ),
            result_valid: self.tracker.valid(),
        }
    }

    /// True while a multiply occupies the pipeline; starts are ignored.
    pub const fn is_busy(&self) -> bool {
        self.tracker.is_busy()
    }

    /// Current completion-tracker phase.
    pub const fn phase(&self) -> Phase {
        self.tracker.phase()
    }

    /// Operands held by the input latch.
    pub const fn latched(&self) -> OperandPair {
        self.latch.operands()
    }

    /// Final reduction row before the bias is applied.
    pub fn final_row(&self) -> u128 {
        self.layers.final_row()
    }

    /// The register-level layer table.
    pub const fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// Shape of this multiplier.
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Activity counters.
    pub const fn stats(&self) -> &MultiplierStats {
        &self.stats
    }
}
