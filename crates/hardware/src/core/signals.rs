//! Per-tick boundary signals.
//!
//! The multiplier exchanges exactly four inputs and two outputs with its
//! environment on every tick. Operand values are plain signed integers; the
//! model wraps them into their configured port widths on entry.

/// Inputs sampled on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInputs {
    /// Synchronous reset; overrides every other update on this tick.
    pub reset: bool,
    /// Request to begin a multiply with the operands below.
    pub start: bool,
    /// Operand on port A (`signed(A_WIDTH)`).
    pub operand_a: i128,
    /// Operand on port B (`signed(B_WIDTH)`).
    pub operand_b: i128,
}

impl TickInputs {
    /// A tick with every control line low.
    pub const fn idle() -> Self {
        Self {
            reset: false,
            start: false,
            operand_a: 0,
            operand_b: 0,
        }
    }

    /// A tick with reset asserted.
    pub const fn reset() -> Self {
        Self {
            reset: true,
            ..Self::idle()
        }
    }

    /// A tick requesting `operand_a * operand_b`.
    pub const fn start(operand_a: i128, operand_b: i128) -> Self {
        Self {
            reset: false,
            start: true,
            operand_a,
            operand_b,
        }
    }
}

/// Outputs visible after one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutputs {
    /// Signed product of width `A_WIDTH + B_WIDTH`; meaningful only while `result_valid`.
    pub result: i128,
    /// High for exactly one tick per accepted multiply.
    pub result_valid: bool,
}
