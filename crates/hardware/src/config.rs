//! Configuration system for the multiplier model.
//!
//! This module defines the configuration structures used to parameterize a
//! multiplier instance. It provides:
//! 1. **Defaults:** The operand widths and reset settling used by the reference harness.
//! 2. **Structures:** Width and general (harness) configuration.
//! 3. **Validation:** Conversion into an immutable [`Geometry`].
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with
//! `Config::default()` / `Config::with_widths` for the CLI and tests.

use serde::{Deserialize, Serialize};

use crate::common::constants::MAX_PRODUCT_WIDTH;
use crate::common::error::{ConfigError, Port};
use crate::core::geometry::Geometry;

/// Default configuration constants for the model.
mod defaults {
    use crate::common::constants;

    /// Width of operand port A in bits.
    pub const A_WIDTH: u32 = constants::DEFAULT_A_WIDTH;

    /// Width of operand port B in bits.
    pub const B_WIDTH: u32 = constants::DEFAULT_B_WIDTH;

    /// Ticks of reset asserted by the harness before any operands are driven.
    pub const RESET_CYCLES: u32 = constants::DEFAULT_RESET_CYCLES;
}

/// Root configuration structure.
///
/// Widths are fixed for the lifetime of a multiplier; nothing in this
/// structure may change after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Operand port widths.
    #[serde(default)]
    pub widths: WidthConfig,
    /// Harness-level settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Builds a configuration with the given port widths and default harness settings.
    pub fn with_widths(a_width: u32, b_width: u32) -> Self {
        Self {
            widths: WidthConfig { a_width, b_width },
            general: GeneralConfig::default(),
        }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults. The result is not validated; call
    /// [`Config::validate`] (or construct a multiplier) to check the widths.
    ///
    /// # Examples
    ///
    /// ```
    /// use bwmul_core::config::Config;
    ///
    /// let config = Config::from_json(r#"{ "widths": { "a_width": 8, "b_width": 8 } }"#).unwrap();
    /// assert_eq!(config.widths.a_width, 8);
    /// assert_eq!(config.general.reset_cycles, 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the widths and derives the datapath geometry.
    pub fn validate(&self) -> Result<Geometry, ConfigError> {
        let WidthConfig { a_width, b_width } = self.widths;
        if a_width == 0 {
            return Err(ConfigError::ZeroWidth { port: Port::A });
        }
        if b_width == 0 {
            return Err(ConfigError::ZeroWidth { port: Port::B });
        }
        if a_width.saturating_add(b_width) > MAX_PRODUCT_WIDTH {
            return Err(ConfigError::ProductTooWide {
                a_width,
                b_width,
                max: MAX_PRODUCT_WIDTH,
            });
        }
        Ok(Geometry::new(a_width, b_width))
    }
}

/// Operand port widths (`A_WIDTH`, `B_WIDTH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WidthConfig {
    /// Width of operand port A in bits.
    #[serde(default = "WidthConfig::default_a_width")]
    pub a_width: u32,

    /// Width of operand port B in bits.
    #[serde(default = "WidthConfig::default_b_width")]
    pub b_width: u32,
}

impl WidthConfig {
    /// Returns the default width of port A.
    const fn default_a_width() -> u32 {
        defaults::A_WIDTH
    }

    /// Returns the default width of port B.
    const fn default_b_width() -> u32 {
        defaults::B_WIDTH
    }
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            a_width: defaults::A_WIDTH,
            b_width: defaults::B_WIDTH,
        }
    }
}

/// General harness settings.
///
/// These settings do not affect the arithmetic; they control how the
/// driving harness exercises the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Record every tick into a waveform that can be dumped as VCD.
    #[serde(default)]
    pub trace_ticks: bool,

    /// Ticks of reset the harness asserts before driving operands.
    #[serde(default = "GeneralConfig::default_reset_cycles")]
    pub reset_cycles: u32,
}

impl GeneralConfig {
    /// Returns the default reset settling period.
    const fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_ticks: false,
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}
