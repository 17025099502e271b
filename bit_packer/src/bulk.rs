//! Sequential pack/unpack.
//!
//! Both directions walk the buffer with a single running `shift`: the number
//! of bits still unused in the current byte. No per-element address is
//! computed, so the layout agreement with [`crate::get`]/[`crate::set`] is
//! something the tests have to hold these functions to.

use crate::width::{is_valid_width, low_bits};

/// Packs `values[value_start..value_start + length]` into `packed`, starting
/// at byte `byte_start`.
///
/// Bits are OR-ed into the destination, so the target bytes must be zeroed
/// beforehand. Bits of a value above `bits_per_value` are dropped.
///
/// # Panics
///
/// Panics if the value range is out of bounds or `packed` is shorter than
/// `byte_start + calculate_packed_size(length, bits_per_value)`.
///
/// ```
/// let mut packed = [0u8; 2];
/// bit_packer::pack(&[0b10110, 0b01101], 0, 2, &mut packed, 0, 5);
/// assert_eq!(packed, [0b1011_0011, 0b0100_0000]);
/// ```
pub fn pack(
    values: &[u32],
    value_start: usize,
    length: usize,
    packed: &mut [u8],
    byte_start: usize,
    bits_per_value: u32,
) {
    debug_assert!(is_valid_width(bits_per_value));
    let mask = low_bits(bits_per_value);
    let bits = bits_per_value as i32;
    let mut byte = byte_start;
    let mut shift = 8i32;

    for &value in &values[value_start..value_start + length] {
        let value = value & mask;
        shift -= bits;
        // Spill the high-order bits into every byte the value overruns.
        while shift < 0 {
            packed[byte] |= (value >> -shift) as u8;
            byte += 1;
            shift += 8;
        }
        if shift == 0 {
            packed[byte] |= value as u8;
            byte += 1;
            shift = 8;
        } else {
            packed[byte] |= (value << shift) as u8;
        }
    }
}

/// Unpacks `length` elements from `packed`, starting at byte `byte_start`,
/// into `values[value_start..]`.
///
/// Each element is OR-ed into its destination slot, so the slots must be
/// zero beforehand or the results accumulate.
///
/// # Panics
///
/// Panics under the same conditions as [`pack`].
///
/// ```
/// let packed = [0b1011_0011, 0b0100_0000];
/// let mut values = [0u32; 2];
/// bit_packer::unpack(&mut values, 0, 2, &packed, 0, 5);
/// assert_eq!(values, [0b10110, 0b01101]);
/// ```
pub fn unpack(
    values: &mut [u32],
    value_start: usize,
    length: usize,
    packed: &[u8],
    byte_start: usize,
    bits_per_value: u32,
) {
    debug_assert!(is_valid_width(bits_per_value));
    let mask = low_bits(bits_per_value);
    let bits = bits_per_value as i32;
    let mut byte = byte_start;
    let mut shift = 8i32;

    for slot in &mut values[value_start..value_start + length] {
        let mut free = shift as u32;
        shift -= bits;
        while shift < 0 {
            *slot |= (u32::from(packed[byte]) & low_bits(free)) << -shift;
            byte += 1;
            free = 8;
            shift += 8;
        }
        *slot |= (u32::from(packed[byte]) >> shift) & mask;
        if shift == 0 {
            byte += 1;
            shift = 8;
        }
    }
}
