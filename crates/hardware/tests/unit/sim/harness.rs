//! # Harness Tests
//!
//! Reset settling, single and batched multiplies, and busy handling.

use bwmul_core::common::HarnessError;
use bwmul_core::config::Config;
use bwmul_core::core::Phase;
use bwmul_core::{Harness, TickInputs};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::init_tracing;

fn harness(a_width: u32, b_width: u32) -> Harness {
    init_tracing();
    Harness::new(&Config::with_widths(a_width, b_width)).unwrap()
}

#[test]
fn test_new_applies_reset_cycles() {
    let mut config = Config::with_widths(3, 6);
    config.general.reset_cycles = 4;
    let h = Harness::new(&config).unwrap();
    assert_eq!(h.ticks(), 4);
    assert_eq!(h.multiplier().stats().resets, 4);
}

#[test]
fn test_zero_reset_cycles() {
    let mut config = Config::default();
    config.general.reset_cycles = 0;
    let mut h = Harness::new(&config).unwrap();
    assert_eq!(h.ticks(), 0);
    assert_eq!(h.multiply(3, -30).unwrap().result, -90);
}

#[test]
fn test_multiply_reference_pair() {
    let mut h = harness(3, 6);
    let product = h.multiply(3, -30).unwrap();
    assert_eq!(product.result, -90);
    assert_eq!(product.latency, 2);
    // reset (tick 0), start (tick 1), valid on tick 3
    assert_eq!(product.tick, 3);
}

#[test]
fn test_run_batch() {
    let mut h = harness(8, 8);
    let pairs = [(5, 7), (-128, 127), (0, -3), (-1, -128)];
    let products = h.run(&pairs).unwrap();
    let results: Vec<i128> = products.iter().map(|p| p.result).collect();
    assert_eq!(results, vec![35, -16256, 0, 128]);
    assert!(products.iter().all(|p| p.latency == 3));
}

#[test]
fn test_multiply_while_busy_fails() {
    let mut h = harness(8, 8);
    let _ = h.step(TickInputs::start(2, 3));
    assert!(matches!(h.multiply(4, 5), Err(HarnessError::Busy)));
}

#[test]
fn test_reset_abandoned_multiply_times_out_in_step_mode() {
    let mut h = harness(4, 4);
    let _ = h.step(TickInputs::start(2, 3));
    let out = h.step(TickInputs::reset());
    assert!(!out.result_valid);
    assert_eq!(h.multiplier().phase(), Phase::Idle);
    let out = h.idle(10);
    assert!(!out.result_valid);
    assert_eq!(h.multiplier().stats().aborted, 1);
}

#[test]
fn test_idle_zero_returns_current_outputs() {
    let mut h = harness(3, 6);
    let _ = h.multiply(3, 3).unwrap();
    let held = h.idle(0);
    assert_eq!(held.result, 9);
    assert!(held.result_valid);
    let out = h.idle(1);
    assert_eq!(out.result, 9);
    assert!(!out.result_valid);
}

#[test]
fn test_waveform_disabled_by_default() {
    let h = harness(3, 6);
    assert!(h.waveform().is_none());
    let mut sink = Vec::new();
    h.write_vcd(&mut sink).unwrap();
    assert!(sink.is_empty());
}

#[rstest]
#[case(1, 1)]
#[case(3, 6)]
#[case(8, 8)]
#[case(5, 64)]
fn test_multiply_returns_on_the_pulse_without_idling_through_slack(
    #[case] a_width: u32,
    #[case] b_width: u32,
) {
    let mut h = harness(a_width, b_width);
    let latency = u64::from(h.multiplier().geometry().latency());
    let before = h.ticks();
    let product = h.multiply(-1, -1).unwrap();
    assert_eq!(product.latency, latency);
    assert_eq!(h.ticks(), before + 1 + latency);
    assert!(!h.multiplier().is_busy());
}
