//! Fixed-width two's-complement bit helpers.
//!
//! Rows and operands are stored as raw `u128` bit patterns of a known width.
//! These helpers convert between signed values and those patterns and perform
//! the masked single-bit updates used by the Baugh-Wooley corrections.
//!
//! All widths must lie in `1..=128`.

/// Returns an all-ones mask covering the low `width` bits.
///
/// # Examples
///
/// ```
/// use bwmul_core::common::bits::mask;
///
/// assert_eq!(mask(3), 0b111);
/// assert_eq!(mask(128), u128::MAX);
/// ```
#[inline]
pub const fn mask(width: u32) -> u128 {
    if width >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// Wraps a signed value into `width` bits and returns the raw pattern.
///
/// Values outside the signed range of `width` wrap exactly as a hardware
/// port of that width would.
#[inline]
pub const fn truncate(value: i128, width: u32) -> u128 {
    (value as u128) & mask(width)
}

/// Interprets the low `width` bits of `bits` as a signed value.
///
/// # Examples
///
/// ```
/// use bwmul_core::common::bits::sign_extend;
///
/// assert_eq!(sign_extend(0b101, 3), -3);
/// assert_eq!(sign_extend(0b011, 3), 3);
/// ```
#[inline]
pub const fn sign_extend(bits: u128, width: u32) -> i128 {
    if width >= u128::BITS {
        return bits as i128;
    }
    let shift = u128::BITS - width;
    ((bits << shift) as i128) >> shift
}

/// Reads bit `index` of `bits`.
#[inline]
pub const fn bit(bits: u128, index: u32) -> bool {
    index < u128::BITS && (bits >> index) & 1 == 1
}

/// Returns `bits` with bit `index` forced to `value`.
///
/// Indices at or beyond the row width are silently dropped, matching a
/// hardware assignment to a bit that does not exist.
#[inline]
pub const fn force_bit(bits: u128, index: u32, value: bool) -> u128 {
    if index >= u128::BITS {
        return bits;
    }
    let m = 1u128 << index;
    if value { bits | m } else { bits & !m }
}

/// Returns the sign (most significant) bit of a `width`-bit pattern.
#[inline]
pub const fn sign_bit(bits: u128, width: u32) -> bool {
    bit(bits, width - 1)
}

/// Smallest and largest signed values representable in `width` bits.
#[inline]
pub const fn signed_range(width: u32) -> (i128, i128) {
    let min = sign_extend(1u128 << (width - 1), width);
    let max = sign_extend(mask(width - 1), width);
    (min, max)
}
