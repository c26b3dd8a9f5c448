//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and width validation.

use bwmul_core::common::{ConfigError, MAX_PRODUCT_WIDTH, Port};
use bwmul_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.widths.a_width, 3);
    assert_eq!(config.widths.b_width, 6);
    assert!(!config.general.trace_ticks);
    assert_eq!(config.general.reset_cycles, 1);
}

#[test]
fn test_with_widths_keeps_general_defaults() {
    let config = Config::with_widths(8, 12);
    assert_eq!(config.widths, WidthConfig { a_width: 8, b_width: 12 });
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn test_from_json_full() {
    let config = Config::from_json(
        r#"{
            "widths": { "a_width": 16, "b_width": 4 },
            "general": { "trace_ticks": true, "reset_cycles": 3 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.widths, WidthConfig { a_width: 16, b_width: 4 });
    assert!(config.general.trace_ticks);
    assert_eq!(config.general.reset_cycles, 3);
}

#[test]
fn test_from_json_missing_fields_use_defaults() {
    let config = Config::from_json(r#"{ "widths": { "b_width": 10 } }"#).unwrap();
    assert_eq!(config.widths.a_width, 3);
    assert_eq!(config.widths.b_width, 10);
    assert_eq!(config.general, GeneralConfig::default());

    let empty = Config::from_json("{}").unwrap();
    assert_eq!(empty, Config::default());
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let err = Config::from_json(r#"{ "widths": { "a_width": "wide" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_json_round_trip() {
    let config = Config::with_widths(5, 7);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), config);
}

#[test]
fn test_validate_rejects_zero_widths() {
    assert!(matches!(
        Config::with_widths(0, 4).validate(),
        Err(ConfigError::ZeroWidth { port: Port::A })
    ));
    assert!(matches!(
        Config::with_widths(4, 0).validate(),
        Err(ConfigError::ZeroWidth { port: Port::B })
    ));
}

#[test]
fn test_validate_rejects_products_wider_than_a_row() {
    let err = Config::with_widths(64, 65).validate().unwrap_err();
    match err {
        ConfigError::ProductTooWide { a_width, b_width, max } => {
            assert_eq!((a_width, b_width, max), (64, 65, MAX_PRODUCT_WIDTH));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validate_accepts_boundaries() {
    assert!(Config::with_widths(1, 1).validate().is_ok());
    assert!(Config::with_widths(64, 64).validate().is_ok());
    assert!(Config::with_widths(1, 127).validate().is_ok());
}

#[test]
fn test_validate_does_not_overflow_on_huge_widths() {
    assert!(Config::with_widths(u32::MAX, u32::MAX).validate().is_err());
}
