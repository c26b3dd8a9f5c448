//! Reference model used to check the multiplier.
//!
//! Computes the product the hardware must produce for a pair of port
//! operands, using native wide arithmetic instead of partial products.

use crate::common::bits::{sign_bit, sign_extend, truncate};
use crate::core::geometry::Geometry;

/// Signed value an operand takes after wrapping into its port width.
pub const fn port_value(value: i128, width: u32) -> i128 {
    sign_extend(truncate(value, width), width)
}

/// Expected `result` for `operand_a * operand_b` at the given geometry.
///
/// # Examples
///
/// ```
/// use bwmul_core::config::Config;
/// use bwmul_core::sim::oracle::reference_product;
///
/// let geometry = Config::with_widths(3, 6).validate().unwrap();
/// assert_eq!(reference_product(&geometry, 3, -30), -90);
/// // 5 does not fit a signed 3-bit port and wraps to -3.
/// assert_eq!(reference_product(&geometry, 5, 2), -6);
/// ```
pub const fn reference_product(geometry: &Geometry, operand_a: i128, operand_b: i128) -> i128 {
    let a = port_value(operand_a, geometry.a_width());
    let b = port_value(operand_b, geometry.b_width());
    let width = geometry.product_width();
    sign_extend(truncate(a.wrapping_mul(b), width), width)
}

/// Expected sign bit of a nonzero product: `sign(a) XOR sign(b)`.
pub const fn expected_sign(geometry: &Geometry, operand_a: i128, operand_b: i128) -> bool {
    let a = truncate(operand_a, geometry.a_width());
    let b = truncate(operand_b, geometry.b_width());
    sign_bit(a, geometry.a_width()) ^ sign_bit(b, geometry.b_width())
}

/// Sign bit (`A_WIDTH + B_WIDTH - 1`) of a result.
pub const fn result_sign(geometry: &Geometry, result: i128) -> bool {
    sign_bit(truncate(result, geometry.product_width()), geometry.product_width())
}
