//! Partial-Product Generator (layer 0).
//!
//! Produces one row per multiplier bit using the modified Baugh-Wooley
//! scheme. Rows are kept in row-local coordinates: row `i` is *not* shifted
//! left by `i` here; the adder tree applies positional weights as it pairs
//! rows.
//!
//! For a multiplicand `a` of width `L` and a multiplier `b` of width `S`:
//!
//! | Row           | Bits `0..L-1`        | Bit `L-1`               | Bit `L` |
//! |---------------|----------------------|-------------------------|---------|
//! | `i < S-1`     | `a[j] & b[i]`        | `!(a[L-1] & b[i])`      | `0`     |
//! | `i == S-1`    | `!(a[j] & b[S-1])`   | `a[L-1] & b[S-1]`       | `1`     |
//!
//! Summing the rows at their weights and adding
//! [`Geometry::bias`] yields the signed product without sign-extending any
//! row.

use crate::common::bits::{bit, force_bit};
use crate::core::geometry::Geometry;
use crate::core::normalizer::OperandPair;

/// Computes row `i` of layer 0.
///
/// # Arguments
///
/// * `geometry` - Shape of the multiplier.
/// * `pair`     - Normalized operands.
/// * `i`        - Multiplier bit index, in `0..SMALLER_WIDTH`.
pub fn row(geometry: &Geometry, pair: OperandPair, i: u32) -> u128 {
    let larger = geometry.larger_width();
    let last = geometry.smaller_width() - 1;
    let multiplier_bit = bit(pair.multiplier, i);

    let mut row = if multiplier_bit { pair.multiplicand } else { 0 };

    if i < last {
        let multiplicand_sign = bit(pair.multiplicand, larger - 1);
        row = force_bit(row, larger - 1, !(multiplicand_sign && multiplier_bit));
    } else {
        // Multiplier sign row: invert every non-sign multiplicand bit.
        for j in 0..larger - 1 {
            let product_bit = bit(pair.multiplicand, j) && multiplier_bit;
            row = force_bit(row, j, !product_bit);
        }
        row = force_bit(row, larger, true);
    }

    row & geometry.product_mask()
}

/// Fills `rows` with every layer-0 row for `pair`.
///
/// `rows` must hold exactly `SMALLER_WIDTH` entries.
pub fn generate(geometry: &Geometry, pair: OperandPair, rows: &mut [u128]) {
    debug_assert_eq!(rows.len(), geometry.smaller_width() as usize);
    for (i, slot) in (0u32..).zip(rows.iter_mut()) {
        *slot = row(geometry, pair, i);
    }
}
