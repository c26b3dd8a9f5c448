//! Error definitions.
//!
//! The arithmetic path of the multiplier is total: every tick is defined for
//! every input. Errors only arise at the edges of the model:
//! 1. **Configuration:** Widths that cannot be represented, or malformed JSON.
//! 2. **Harness:** A driven multiply that never completes, or waveform I/O failures.

use thiserror::Error;

/// Identifies one of the two operand input ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Port {
    /// Operand port A (`operand_A`).
    A,
    /// Operand port B (`operand_B`).
    B,
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Errors raised while building a multiplier from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An operand port was configured with zero bits.
    #[error("operand port {port} width must be at least 1 bit")]
    ZeroWidth {
        /// The offending port.
        port: Port,
    },

    /// The combined product width does not fit a row.
    #[error("product width {a_width} + {b_width} exceeds the {max}-bit row limit")]
    ProductTooWide {
        /// Configured width of port A.
        a_width: u32,
        /// Configured width of port B.
        b_width: u32,
        /// Maximum supported product width.
        max: u32,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the driving harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// `result_valid` did not pulse within the latency plus a few ticks of slack.
    ///
    /// The harness only starts from idle and never asserts reset inside
    /// `multiply`, so this fires only if the model's completion timing breaks.
    #[error("no result_valid pulse after {ticks} ticks")]
    Timeout {
        /// Ticks waited after the start was issued.
        ticks: u64,
    },

    /// The multiplier was busy, so the start was not accepted.
    #[error("start rejected: a multiply is already in flight")]
    Busy,

    /// Writing waveform output failed.
    #[error("waveform output failed: {0}")]
    Io(#[from] std::io::Error),
}
