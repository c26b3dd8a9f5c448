//! # Operand Normalizer Tests
//!
//! Port routing into multiplicand/multiplier order and latch stability.

use bwmul_core::config::Config;
use bwmul_core::core::normalizer::{InputLatch, OperandNormalizer, OperandPair};
use bwmul_core::TickInputs;

use crate::common::fresh;

#[test]
fn test_wider_port_becomes_multiplicand() {
    let g = Config::with_widths(3, 6).validate().unwrap();
    let pair = OperandNormalizer::new(g).normalize(3, -30);
    assert_eq!(pair.multiplicand, 0b10_0010);
    assert_eq!(pair.multiplier, 0b011);

    let g = Config::with_widths(6, 3).validate().unwrap();
    let pair = OperandNormalizer::new(g).normalize(-30, 3);
    assert_eq!(pair.multiplicand, 0b10_0010);
    assert_eq!(pair.multiplier, 0b011);
}

#[test]
fn test_equal_widths_route_b_to_multiplicand() {
    let g = Config::with_widths(4, 4).validate().unwrap();
    let pair = OperandNormalizer::new(g).normalize(-2, 5);
    assert_eq!(pair.multiplicand_value(&g), 5);
    assert_eq!(pair.multiplier_value(&g), -2);
}

#[test]
fn test_out_of_range_operands_wrap_into_port_width() {
    let g = Config::with_widths(3, 6).validate().unwrap();
    let pair = OperandNormalizer::new(g).normalize(5, 40);
    assert_eq!(pair.multiplier_value(&g), -3);
    assert_eq!(pair.multiplicand_value(&g), -24);
}

#[test]
fn test_latch_capture_and_clear() {
    let mut latch = InputLatch::new();
    assert_eq!(latch.operands(), OperandPair::default());
    let pair = OperandPair {
        multiplicand: 7,
        multiplier: 2,
    };
    latch.capture(pair);
    assert_eq!(latch.operands(), pair);
    latch.clear();
    assert!(latch.operands().has_zero());
}

#[test]
fn test_latch_holds_while_busy() {
    let mut mul = fresh(4, 8);
    let _ = mul.tick(TickInputs::start(3, 11));
    let latched = mul.latched();
    let _ = mul.tick(TickInputs::start(-1, -1));
    assert_eq!(mul.latched(), latched);
    let _ = mul.tick(TickInputs {
        operand_a: 5,
        operand_b: 6,
        ..TickInputs::idle()
    });
    assert_eq!(mul.latched(), latched);
}

#[test]
fn test_latch_is_usable_in_const_context() {
    const LATCHED: OperandPair = {
        let mut latch = InputLatch::new();
        latch.capture(OperandPair {
            multiplicand: 9,
            multiplier: 4,
        });
        latch.operands()
    };
    const CLEARED: OperandPair = {
        let mut latch = InputLatch::new();
        latch.capture(LATCHED);
        latch.clear();
        latch.operands()
    };
    assert_eq!(LATCHED.multiplicand, 9);
    assert_eq!(LATCHED.multiplier, 4);
    assert_eq!(CLEARED, OperandPair::default());
}
