//! Validating wrappers around the raw packing functions.
//!
//! Every `try_*` function checks width, value range and buffer length up
//! front and then delegates to the unchecked function of the same name, so
//! a passing check means the raw call cannot panic.
//!
//! ```
//! use bit_packer::{BitPackError, checked};
//!
//! let mut packed = [0u8; 2];
//! checked::try_set(&mut packed, 1, 9, 5)?;
//! assert_eq!(checked::try_get(&packed, 1, 5)?, 9);
//!
//! assert_eq!(
//!     checked::try_set(&mut packed, 1, 32, 5),
//!     Err(BitPackError::ValueOverflow { value: 32, bits: 5 })
//! );
//! # Ok::<(), BitPackError>(())
//! ```

use log::debug;

use crate::width::{checked_packed_size, is_valid_width, low_bits};
use crate::{BitPackError, bit_ops, bulk};

type Result<T> = core::result::Result<T, BitPackError>;

/// Rejects widths outside `1..=31`.
#[inline]
pub fn validate_bits_per_value(bits_per_value: u32) -> Result<()> {
    if is_valid_width(bits_per_value) {
        Ok(())
    } else {
        debug!("rejected bits_per_value {bits_per_value}");
        Err(BitPackError::InvalidBitWidth(bits_per_value))
    }
}

#[inline]
fn validate_value(value: u32, bits_per_value: u32) -> Result<()> {
    if value <= low_bits(bits_per_value) {
        Ok(())
    } else {
        debug!("value {value} wider than {bits_per_value} bits");
        Err(BitPackError::ValueOverflow {
            value,
            bits: bits_per_value,
        })
    }
}

/// A requirement that overflows `usize` is reported as `usize::MAX` bytes.
fn validate_bytes(available: usize, byte_start: usize, elements: usize, bits_per_value: u32) -> Result<()> {
    let required = checked_packed_size(elements, bits_per_value)
        .and_then(|size| byte_start.checked_add(size))
        .unwrap_or(usize::MAX);
    if available >= required {
        Ok(())
    } else {
        debug!("packed buffer of {available} bytes, {required} required");
        Err(BitPackError::InsufficientBytes {
            required,
            available,
        })
    }
}

fn validate_range(start: usize, len: usize, available: usize) -> Result<()> {
    match start.checked_add(len) {
        Some(end) if end <= available => Ok(()),
        _ => {
            debug!("value range {start}+{len} outside {available} values");
            Err(BitPackError::RangeOutOfBounds {
                start,
                len,
                available,
            })
        }
    }
}

/// Checked [`crate::get`].
pub fn try_get(packed: &[u8], index: usize, bits_per_value: u32) -> Result<u32> {
    validate_bits_per_value(bits_per_value)?;
    validate_bytes(packed.len(), 0, index.saturating_add(1), bits_per_value)?;
    Ok(bit_ops::get(packed, index, bits_per_value))
}

/// Checked [`crate::set`]. Values wider than `bits_per_value` are rejected
/// instead of truncated.
pub fn try_set(packed: &mut [u8], index: usize, value: u32, bits_per_value: u32) -> Result<()> {
    validate_bits_per_value(bits_per_value)?;
    validate_value(value, bits_per_value)?;
    validate_bytes(packed.len(), 0, index.saturating_add(1), bits_per_value)?;
    bit_ops::set(packed, index, value, bits_per_value);
    Ok(())
}

/// Checked [`crate::pack`]. Every value in the range must fit in
/// `bits_per_value` bits; nothing is written if one does not.
pub fn try_pack(
    values: &[u32],
    value_start: usize,
    length: usize,
    packed: &mut [u8],
    byte_start: usize,
    bits_per_value: u32,
) -> Result<()> {
    validate_bits_per_value(bits_per_value)?;
    validate_range(value_start, length, values.len())?;
    validate_bytes(packed.len(), byte_start, length, bits_per_value)?;
    for &value in &values[value_start..value_start + length] {
        validate_value(value, bits_per_value)?;
    }
    bulk::pack(values, value_start, length, packed, byte_start, bits_per_value);
    Ok(())
}

/// Checked [`crate::unpack`]. The destination slots must still be zeroed by
/// the caller.
pub fn try_unpack(
    values: &mut [u32],
    value_start: usize,
    length: usize,
    packed: &[u8],
    byte_start: usize,
    bits_per_value: u32,
) -> Result<()> {
    validate_bits_per_value(bits_per_value)?;
    validate_range(value_start, length, values.len())?;
    validate_bytes(packed.len(), byte_start, length, bits_per_value)?;
    bulk::unpack(values, value_start, length, packed, byte_start, bits_per_value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_limits() {
        assert_eq!(validate_bits_per_value(0), Err(BitPackError::InvalidBitWidth(0)));
        assert_eq!(validate_bits_per_value(32), Err(BitPackError::InvalidBitWidth(32)));
        assert!(validate_bits_per_value(1).is_ok());
        assert!(validate_bits_per_value(31).is_ok());
    }

    #[test]
    fn get_reports_short_buffer() {
        let packed = [0u8; 2];
        // element 2 at 7 bits ends at bit 21, so three bytes are needed
        assert_eq!(
            try_get(&packed, 2, 7),
            Err(BitPackError::InsufficientBytes {
                required: 3,
                available: 2
            })
        );
        assert_eq!(try_get(&packed, 1, 7), Ok(0));
    }

    #[test]
    fn set_rejects_overflow_without_writing() -> Result<()> {
        let mut packed = [0u8; 4];
        try_set(&mut packed, 0, 100, 7)?;
        assert!(matches!(
            try_set(&mut packed, 0, 128, 7),
            Err(BitPackError::ValueOverflow { value: 128, bits: 7 })
        ));
        assert_eq!(try_get(&packed, 0, 7)?, 100);
        Ok(())
    }

    #[test]
    fn pack_validates_before_writing() {
        let values = [1u32, 2, 300, 4];
        let mut packed = [0u8; 4];
        assert_eq!(
            try_pack(&values, 0, 4, &mut packed, 0, 8),
            Err(BitPackError::ValueOverflow { value: 300, bits: 8 })
        );
        assert_eq!(packed, [0; 4]);

        assert_eq!(
            try_pack(&values, 2, 3, &mut packed, 0, 9),
            Err(BitPackError::RangeOutOfBounds {
                start: 2,
                len: 3,
                available: 4
            })
        );
        assert_eq!(
            try_pack(&values, 0, 4, &mut packed, 1, 9),
            Err(BitPackError::InsufficientBytes {
                required: 6,
                available: 4
            })
        );
    }

    #[test]
    fn huge_offsets_are_rejected_not_overflowed() {
        let packed = [0xABu8; 4];
        for index in [usize::MAX, usize::MAX / 4, usize::MAX / 31 + 1] {
            for bits in [1, 5, 8, 31] {
                assert!(
                    matches!(
                        try_get(&packed, index, bits),
                        Err(BitPackError::InsufficientBytes { available: 4, .. })
                    ),
                    "index={index} bits={bits}"
                );
            }
        }

        let mut packed = [0u8; 4];
        assert_eq!(
            try_set(&mut packed, usize::MAX, 1, 5),
            Err(BitPackError::InsufficientBytes {
                required: usize::MAX,
                available: 4
            })
        );
        assert_eq!(
            try_pack(&[1], 0, 1, &mut packed, usize::MAX, 5),
            Err(BitPackError::InsufficientBytes {
                required: usize::MAX,
                available: 4
            })
        );
        let mut out = [0u32; 1];
        assert!(matches!(
            try_unpack(&mut out, 0, 1, &packed, usize::MAX - 1, 31),
            Err(BitPackError::InsufficientBytes { .. })
        ));
        assert_eq!(packed, [0; 4]);
    }

    #[test]
    fn unpack_round_trip_through_checked_calls() -> Result<()> {
        let values = [5u32, 0, 31, 17, 9];
        let mut packed = [0u8; 5];
        try_pack(&values, 0, values.len(), &mut packed, 1, 5)?;
        let mut out = [0u32; 5];
        let out_len = out.len();
        try_unpack(&mut out, 0, out_len, &packed, 1, 5)?;
        assert_eq!(out, values);

        assert!(matches!(
            try_unpack(&mut out, usize::MAX, 2, &packed, 0, 5),
            Err(BitPackError::RangeOutOfBounds { .. })
        ));
        Ok(())
    }
}
