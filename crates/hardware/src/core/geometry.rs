//! Datapath geometry derived from the configured operand widths.
//!
//! Every shape in the multiplier (row width, number of reduction layers,
//! rows per layer, final bias) is a pure function of `A_WIDTH` and `B_WIDTH`.
//! [`Geometry`] computes them once so the arena and the control path can be
//! sized at construction and never grow afterwards.

use crate::common::bits::mask;
use crate::common::error::Port;

/// Immutable shape of one multiplier instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    a_width: u32,
    b_width: u32,
    smaller_width: u32,
    larger_width: u32,
    layer_count: u32,
    multiplicand_port: Port,
}

impl Geometry {
    /// Derives the geometry for two validated widths.
    ///
    /// Callers go through [`Config::validate`](crate::config::Config::validate),
    /// which guarantees both widths are non-zero and their sum fits a row.
    pub(crate) const fn new(a_width: u32, b_width: u32) -> Self {
        // Ties go to B as the multiplicand.
        let multiplicand_port = if a_width > b_width { Port::A } else { Port::B };
        let (larger_width, smaller_width) = match multiplicand_port {
            Port::A => (a_width, b_width),
            Port::B => (b_width, a_width),
        };
        Self {
            a_width,
            b_width,
            smaller_width,
            larger_width,
            layer_count: ceil_log2(smaller_width),
            multiplicand_port,
        }
    }

    /// Width of operand port A.
    pub const fn a_width(&self) -> u32 {
        self.a_width
    }

    /// Width of operand port B.
    pub const fn b_width(&self) -> u32 {
        self.b_width
    }

    /// `min(A_WIDTH, B_WIDTH)`: the multiplier width and the row count of layer 0.
    pub const fn smaller_width(&self) -> u32 {
        self.smaller_width
    }

    /// `max(A_WIDTH, B_WIDTH)`: the multiplicand width.
    pub const fn larger_width(&self) -> u32 {
        self.larger_width
    }

    /// `A_WIDTH + B_WIDTH`: the width of every row and of the result.
    pub const fn product_width(&self) -> u32 {
        self.a_width + self.b_width
    }

    /// Mask covering one full-width row.
    pub const fn product_mask(&self) -> u128 {
        mask(self.product_width())
    }

    /// `ceil(log2(SMALLER_WIDTH))`: number of adder-tree layers after layer 0.
    pub const fn layer_count(&self) -> u32 {
        self.layer_count
    }

    /// Ticks from an accepted start to the `result_valid` pulse.
    ///
    /// Equal to [`layer_count`](Self::layer_count), except that a one-bit
    /// multiplier (no reduction layers) still needs one tick to register its
    /// single row.
    pub const fn latency(&self) -> u32 {
        if self.layer_count == 0 { 1 } else { self.layer_count }
    }

    /// The input port whose operand becomes the multiplicand.
    pub const fn multiplicand_port(&self) -> Port {
        self.multiplicand_port
    }

    /// Number of rows held in layer `k` (`ceil(SMALLER_WIDTH / 2^k)`).
    pub const fn rows_in_layer(&self, k: u32) -> usize {
        let span = 1u32 << k;
        self.smaller_width.div_ceil(span) as usize
    }

    /// Total rows across every layer; the size of one arena generation.
    pub const fn total_rows(&self) -> usize {
        let mut total = 0;
        let mut k = 0;
        while k <= self.layer_count {
            total += self.rows_in_layer(k);
            k += 1;
        }
        total
    }

    /// Constant added to the final row: `2^(LARGER_WIDTH-1) + 2^(SMALLER_WIDTH-1)`.
    ///
    /// Compensates for the bits forced by the Baugh-Wooley row corrections.
    pub const fn bias(&self) -> u128 {
        let bias = (1u128 << (self.larger_width - 1)).wrapping_add(1u128 << (self.smaller_width - 1));
        bias & self.product_mask()
    }
}

/// `ceil(log2(n))` for `n >= 1`.
const fn ceil_log2(n: u32) -> u32 {
    u32::BITS - (n - 1).leading_zeros()
}
