//! # Geometry Tests
//!
//! Derived widths, layer counts, row counts, and bias for a table of
//! operand widths.

use bwmul_core::common::Port;
use bwmul_core::config::Config;
use bwmul_core::core::Geometry;
use rstest::rstest;

fn geometry(a: u32, b: u32) -> Geometry {
    Config::with_widths(a, b).validate().unwrap()
}

#[rstest]
#[case(3, 6, 3, 6, 2, 2)]
#[case(6, 3, 3, 6, 2, 2)]
#[case(1, 1, 1, 1, 0, 1)]
#[case(1, 9, 1, 9, 0, 1)]
#[case(2, 2, 2, 2, 1, 1)]
#[case(4, 4, 4, 4, 2, 2)]
#[case(5, 8, 5, 8, 3, 3)]
#[case(8, 8, 8, 8, 3, 3)]
#[case(16, 16, 16, 16, 4, 4)]
#[case(64, 64, 64, 64, 6, 6)]
fn test_derived_widths(
    #[case] a: u32,
    #[case] b: u32,
    #[case] smaller: u32,
    #[case] larger: u32,
    #[case] layers: u32,
    #[case] latency: u32,
) {
    let g = geometry(a, b);
    assert_eq!(g.smaller_width(), smaller);
    assert_eq!(g.larger_width(), larger);
    assert_eq!(g.product_width(), a + b);
    assert_eq!(g.layer_count(), layers);
    assert_eq!(g.latency(), latency);
}

#[test]
fn test_multiplicand_port_follows_wider_input() {
    assert_eq!(geometry(3, 6).multiplicand_port(), Port::B);
    assert_eq!(geometry(6, 3).multiplicand_port(), Port::A);
    assert_eq!(geometry(5, 5).multiplicand_port(), Port::B);
}

#[test]
fn test_rows_halve_each_layer_and_end_at_one() {
    for s in 1..=33 {
        let g = geometry(s, 40);
        assert_eq!(g.rows_in_layer(0), s as usize);
        for k in 1..=g.layer_count() {
            assert_eq!(g.rows_in_layer(k), g.rows_in_layer(k - 1).div_ceil(2));
        }
        assert_eq!(g.rows_in_layer(g.layer_count()), 1, "smaller width {s}");
    }
}

#[test]
fn test_bias_constant() {
    // 2^(6-1) + 2^(3-1)
    assert_eq!(geometry(3, 6).bias(), 32 + 4);
    // equal widths: 2^3 + 2^3
    assert_eq!(geometry(4, 4).bias(), 16);
    assert_eq!(geometry(1, 1).bias(), 2);
}

#[test]
fn test_product_mask_full_width() {
    assert_eq!(geometry(64, 64).product_mask(), u128::MAX);
    assert_eq!(geometry(3, 6).product_mask(), 0x1FF);
}
