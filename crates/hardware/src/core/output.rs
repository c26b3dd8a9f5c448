//! Output Assembler.
//!
//! Combinational output stage: adds the constant Baugh-Wooley bias to the
//! final reduced row and special-cases a zero operand (or an asserted reset)
//! to a zero product. The value is recomputed from register state every
//! tick; it is only meaningful while `result_valid` is high.

use crate::common::bits::sign_extend;
use crate::core::geometry::Geometry;
use crate::core::normalizer::OperandPair;

/// Computes `out_C` from the final layer and the latch.
///
/// # Arguments
///
/// * `geometry`  - Shape of the multiplier.
/// * `reset`     - Reset input of the current tick.
/// * `latched`   - Operands held by the input latch.
/// * `final_row` - The single row of the last reduction layer.
pub const fn assemble(geometry: &Geometry, reset: bool, latched: OperandPair, final_row: u128) -> i128 {
    if reset || latched.has_zero() {
        return 0;
    }
    let biased = final_row.wrapping_add(geometry.bias()) & geometry.product_mask();
    sign_extend(biased, geometry.product_width())
}
