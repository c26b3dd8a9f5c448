//! Adder-Tree Reducer.
//!
//! Holds every layer of the reduction tree as registered state in a flat
//! arena sized once at construction. The arena has two generations:
//! `current` is what every layer shows on this tick, and `next` is what it
//! will show after the clock edge. [`LayerTable::advance`] fills `next`
//! entirely from `current` and then swaps them, so no layer ever observes a
//! value written on the same tick.
//!
//! Layer `k` row `p` carries the weight of original row `2^k * p`, so
//! pairing rows `2p` and `2p+1` of layer `k-1` shifts the odd row left by
//! `2^(k-1)`. An odd tail row has no sibling and is forwarded unchanged.
//!
//! # Performance
//!
//! - **Time Complexity:** O(S) row additions per tick, S = `SMALLER_WIDTH`
//! - **Space Complexity:** O(S) rows per generation (at most `2S`)

use std::ops::Range;

use crate::core::geometry::Geometry;
use crate::core::normalizer::OperandPair;
use crate::core::partial_product;

/// Double-buffered storage for every reduction layer.
#[derive(Clone, Debug)]
pub struct LayerTable {
    geometry: Geometry,
    /// `offsets[k]..offsets[k + 1]` is layer `k` within a generation.
    offsets: Vec<usize>,
    current: Vec<u128>,
    next: Vec<u128>,
}

impl LayerTable {
    /// Allocates a zeroed table shaped by `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        let layers = geometry.layer_count() as usize + 1;
        let mut offsets = Vec::with_capacity(layers + 1);
        let mut total = 0;
        offsets.push(total);
        for k in 0..=geometry.layer_count() {
            total += geometry.rows_in_layer(k);
            offsets.push(total);
        }
        debug_assert_eq!(total, geometry.total_rows());

        Self {
            geometry,
            offsets,
            current: vec![0; total],
            next: vec![0; total],
        }
    }

    fn range(&self, k: usize) -> Range<usize> {
        self.offsets[k]..self.offsets[k + 1]
    }

    /// Number of layers, including layer 0.
    pub fn layer_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Rows of layer `k` as visible on this tick.
    pub fn layer(&self, k: usize) -> &[u128] {
        &self.current[self.range(k)]
    }

    /// The single row of the final layer (the reduced product before bias).
    pub fn final_row(&self) -> u128 {
        let last = self.layer_count() - 1;
        self.current[self.offsets[last]]
    }

    /// Clears both generations to zero (reset).
    pub fn clear(&mut self) {
        self.current.fill(0);
        self.next.fill(0);
    }

    /// Advances every layer by one tick.
    ///
    /// Layer 0 is regenerated from `fresh` when a multiply is accepted on
    /// this tick and holds its previous rows otherwise. Layers `1..` are
    /// always recomputed from the previous tick's rows.
    pub fn advance(&mut self, fresh: Option<OperandPair>) {
        let layer0 = self.range(0);
        match fresh {
            Some(pair) => {
                partial_product::generate(&self.geometry, pair, &mut self.next[layer0]);
            }
            None => self.next[layer0.clone()].copy_from_slice(&self.current[layer0]),
        }

        let row_mask = self.geometry.product_mask();
        for k in 1..self.layer_count() {
            let prev = self.range(k - 1);
            let out = self.range(k);
            let shift = 1u32 << (k - 1);

            for (p, slot) in out.enumerate() {
                let lo = prev.start + 2 * p;
                let hi = lo + 1;
                self.next[slot] = if hi < prev.end {
                    self.current[lo].wrapping_add(self.current[hi] << shift) & row_mask
                } else {
                    self.current[lo]
                };
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }
}
