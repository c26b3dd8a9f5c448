//! Common constants used throughout the multiplier model.
//!
//! This module defines widths and limits shared by the configuration layer,
//! the datapath, and the driving harness.

/// Widest product (`A_WIDTH + B_WIDTH`) a row can carry.
///
/// Every partial-product row is held in a native `u128`, so the combined
/// operand width is bounded by its bit count.
pub const MAX_PRODUCT_WIDTH: u32 = u128::BITS;

/// Operand width of port A used by the reference harness.
pub const DEFAULT_A_WIDTH: u32 = 3;

/// Operand width of port B used by the reference harness.
pub const DEFAULT_B_WIDTH: u32 = 6;

/// Ticks of reset the reference harness asserts before driving operands.
pub const DEFAULT_RESET_CYCLES: u32 = 1;

/// Extra ticks the harness waits past the expected latency before it
/// reports a missing `result_valid` pulse.
pub const HARNESS_TIMEOUT_SLACK: u32 = 2;

/// Largest product width the CLI sweep will enumerate exhaustively.
pub const MAX_SWEEP_PRODUCT_WIDTH: u32 = 16;
