//! # Waveform Tests
//!
//! VCD header, initial dump, and change-only value records.

use bwmul_core::config::Config;
use bwmul_core::sim::Waveform;
use bwmul_core::{Harness, TickInputs, TickOutputs};

fn traced_harness() -> Harness {
    let mut config = Config::with_widths(3, 6);
    config.general.trace_ticks = true;
    Harness::new(&config).unwrap()
}

#[test]
fn test_records_every_tick() {
    let mut h = traced_harness();
    let _ = h.multiply(3, -30).unwrap();
    let waveform = h.waveform().unwrap();
    // reset + start + two idle ticks
    assert_eq!(waveform.len(), 4);
    let last = waveform.samples()[3];
    assert!(last.outputs.result_valid);
    assert_eq!(last.outputs.result, -90);
}

#[test]
fn test_vcd_header_declares_signals() {
    let mut h = traced_harness();
    let _ = h.multiply(1, 1).unwrap();
    let vcd = h.waveform().unwrap().to_vcd();
    assert!(vcd.contains("$timescale 1ns $end"));
    assert!(vcd.contains("$var wire 1 ! reset $end"));
    assert!(vcd.contains("$var wire 3 # operand_a $end"));
    assert!(vcd.contains("$var wire 6 $ operand_b $end"));
    assert!(vcd.contains("$var wire 9 % result $end"));
    assert!(vcd.contains("$var wire 1 & result_valid $end"));
    assert!(vcd.contains("$enddefinitions $end"));
}

#[test]
fn test_vcd_values_and_changes() {
    let mut h = traced_harness();
    let _ = h.multiply(3, -30).unwrap();
    let vcd = h.waveform().unwrap().to_vcd();
    let body: Vec<&str> = vcd
        .lines()
        .skip_while(|l| *l != "$enddefinitions $end")
        .skip(1)
        .collect();

    assert_eq!(body[0], "#0");
    assert_eq!(body[1], "$dumpvars");
    assert!(body.contains(&"b011 #"));
    assert!(body.contains(&"b100010 $"));
    // -90 in 9 bits
    assert!(body.contains(&"b110100110 %"));
    assert!(body.contains(&"1&"));
    assert_eq!(*body.last().unwrap(), "#4");
}

#[test]
fn test_unchanged_signals_are_not_repeated() {
    let g = Config::with_widths(2, 2).validate().unwrap();
    let mut w = Waveform::new(g);
    for _ in 0..3 {
        w.record(TickInputs::idle(), TickOutputs::default());
    }
    let vcd = w.to_vcd();
    assert_eq!(vcd.matches("0!").count(), 1);
    assert!(vcd.contains("#1\n#2\n#3\n"));
}

#[test]
fn test_write_to_file() {
    let mut h = traced_harness();
    let _ = h.multiply(2, 2).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mul.vcd");
    let mut file = std::fs::File::create(&path).unwrap();
    h.write_vcd(&mut file).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("$version bwmul"));
}

#[test]
fn test_to_vcd_matches_streamed_output() {
    let mut h = traced_harness();
    let _ = h.multiply(-4, 31).unwrap();
    let waveform = h.waveform().unwrap();
    let mut streamed = Vec::new();
    waveform.write_vcd(&mut streamed).unwrap();
    assert!(!streamed.is_empty());
    assert_eq!(waveform.to_vcd().into_bytes(), streamed);
}
