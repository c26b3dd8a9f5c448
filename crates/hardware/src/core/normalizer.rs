//! Operand Normalizer and Input Latch.
//!
//! The normalizer routes the wider input port to the multiplicand and the
//! narrower one to the multiplier. Selection is static: it depends only on
//! the configured widths, never on operand values. The latch then holds the
//! normalized pair unchanged for the whole multiply.

use crate::common::bits::{sign_extend, truncate};
use crate::common::error::Port;
use crate::core::geometry::Geometry;

/// A normalized operand pair, stored as raw fixed-width bit patterns.
///
/// `multiplicand` is `LARGER_WIDTH` bits wide and `multiplier` is
/// `SMALLER_WIDTH` bits wide; both are zero above their width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperandPair {
    /// Wider operand, `LARGER_WIDTH` bits.
    pub multiplicand: u128,
    /// Narrower operand, `SMALLER_WIDTH` bits.
    pub multiplier: u128,
}

impl OperandPair {
    /// True when either operand is zero, which forces a zero product.
    pub const fn has_zero(&self) -> bool {
        self.multiplicand == 0 || self.multiplier == 0
    }

    /// Signed value of the multiplicand.
    pub const fn multiplicand_value(&self, geometry: &Geometry) -> i128 {
        sign_extend(self.multiplicand, geometry.larger_width())
    }

    /// Signed value of the multiplier.
    pub const fn multiplier_value(&self, geometry: &Geometry) -> i128 {
        sign_extend(self.multiplier, geometry.smaller_width())
    }
}

/// Routes port operands into multiplicand/multiplier order.
#[derive(Clone, Copy, Debug)]
pub struct OperandNormalizer {
    geometry: Geometry,
}

impl OperandNormalizer {
    /// Creates a normalizer for the given geometry.
    pub const fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// Wraps each operand into its port width and orders the pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use bwmul_core::config::Config;
    /// use bwmul_core::core::normalizer::OperandNormalizer;
    ///
    /// let geometry = Config::with_widths(3, 6).validate().unwrap();
    /// let pair = OperandNormalizer::new(geometry).normalize(3, -30);
    /// assert_eq!(pair.multiplicand_value(&geometry), -30);
    /// assert_eq!(pair.multiplier_value(&geometry), 3);
    /// ```
    pub const fn normalize(&self, operand_a: i128, operand_b: i128) -> OperandPair {
        let a = truncate(operand_a, self.geometry.a_width());
        let b = truncate(operand_b, self.geometry.b_width());
        match self.geometry.multiplicand_port() {
            Port::A => OperandPair {
                multiplicand: a,
                multiplier: b,
            },
            Port::B => OperandPair {
                multiplicand: b,
                multiplier: a,
            },
        }
    }
}

/// Register holding the operands of the multiply in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputLatch {
    operands: OperandPair,
}

impl InputLatch {
    /// Creates a cleared latch.
    pub const fn new() -> Self {
        Self {
            operands: OperandPair {
                multiplicand: 0,
                multiplier: 0,
            },
        }
    }

    /// Overwrites the latch with a newly accepted pair.
    pub const fn capture(&mut self, operands: OperandPair) {
        self.operands = operands;
    }

    /// Clears the latch to zero (reset).
    pub const fn clear(&mut self) {
        self.operands = OperandPair {
            multiplicand: 0,
            multiplier: 0,
        };
    }

    /// The currently latched pair.
    pub const fn operands(&self) -> OperandPair {
        self.operands
    }
}
