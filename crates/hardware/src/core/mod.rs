//! Multiplier datapath and control.
//!
//! The stages are listed leaves first, in dependency order:
//! 1. **Geometry:** Shapes derived from the configured widths.
//! 2. **Normalizer / Latch:** Operand ordering and the input register.
//! 3. **Partial products:** Baugh-Wooley corrected layer-0 rows.
//! 4. **Adder tree:** Double-buffered pairwise reduction layers.
//! 5. **Tracker:** Busy flag, cycle counter, and the valid pulse.
//! 6. **Output:** Bias correction and zero-operand handling.

/// Double-buffered reduction layers.
pub mod adder_tree;

/// Shapes derived from the configured widths.
pub mod geometry;

/// Top-level multiplier tying every stage to the clock.
pub mod multiplier;

/// Operand normalizer and input latch.
pub mod normalizer;

/// Output assembler.
pub mod output;

/// Layer-0 partial-product rows.
pub mod partial_product;

/// Per-tick input and output signals.
pub mod signals;

/// Completion-tracking state machine.
pub mod tracker;

pub use geometry::Geometry;
pub use multiplier::Multiplier;
pub use signals::{TickInputs, TickOutputs};
pub use tracker::Phase;
