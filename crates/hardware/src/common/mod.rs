//! Common utilities and types used throughout the multiplier model.
//!
//! This module provides building blocks shared by every pipeline stage:
//! 1. **Bit Helpers:** Masking, truncation, and sign extension of fixed-width patterns.
//! 2. **Constants:** Width limits and reference-harness defaults.
//! 3. **Error Handling:** Configuration and harness error types.

/// Fixed-width two's-complement bit helpers.
pub mod bits;

/// Common constants used throughout the model.
pub mod constants;

/// Error types and operand port identifiers.
pub mod error;

pub use constants::MAX_PRODUCT_WIDTH;
pub use error::{ConfigError, HarnessError, Port};
