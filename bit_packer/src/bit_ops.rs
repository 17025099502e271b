//! Random access to single elements.
//!
//! Each call recomputes the element's [`BitAddress`] and touches only the
//! bytes that element spans: the tail of the first byte, any whole bytes in
//! between, and the head of a final partial byte.

use crate::addr::BitAddress;
use crate::width::{is_valid_width, low_bits};

/// Reads the element at `index`.
///
/// `bits_per_value` must be in `1..=31` and `packed` must hold at least
/// `calculate_packed_size(index + 1, bits_per_value)` bytes.
///
/// # Panics
///
/// Panics if the element extends past the end of `packed`.
///
/// ```
/// // 5-bit elements 0b10110, 0b01101 packed MSB-first
/// let packed = [0b1011_0011, 0b0100_0000];
/// assert_eq!(bit_packer::get(&packed, 0, 5), 0b10110);
/// assert_eq!(bit_packer::get(&packed, 1, 5), 0b01101);
/// ```
pub fn get(packed: &[u8], index: usize, bits_per_value: u32) -> u32 {
    debug_assert!(is_valid_width(bits_per_value));
    let BitAddress { mut byte, free } = BitAddress::of(index, bits_per_value);

    let head = u32::from(packed[byte]) & low_bits(free);
    if bits_per_value <= free {
        return head >> (free - bits_per_value);
    }

    let mut remaining = bits_per_value - free;
    let mut value = head << remaining;
    byte += 1;
    while remaining >= 8 {
        remaining -= 8;
        value |= u32::from(packed[byte]) << remaining;
        byte += 1;
    }
    if remaining > 0 {
        value |= u32::from(packed[byte]) >> (8 - remaining);
    }
    value
}

/// Overwrites the element at `index` with `value`.
///
/// Only the bits belonging to `index` change; neighbours sharing a byte keep
/// their contents. Bits of `value` above `bits_per_value` are dropped.
///
/// # Panics
///
/// Panics if the element extends past the end of `packed`.
///
/// ```
/// let mut packed = [0xFFu8; 2];
/// bit_packer::set(&mut packed, 1, 0, 5);
/// assert_eq!(packed, [0b1111_1000, 0b0011_1111]);
/// ```
pub fn set(packed: &mut [u8], index: usize, value: u32, bits_per_value: u32) {
    debug_assert!(is_valid_width(bits_per_value));
    let BitAddress { mut byte, free } = BitAddress::of(index, bits_per_value);
    let value = value & low_bits(bits_per_value);

    if bits_per_value <= free {
        // Element ends inside this byte (or exactly on its boundary); the
        // `tail` low bits belong to whatever follows.
        let tail = free - bits_per_value;
        let mask = (low_bits(bits_per_value) << tail) as u8;
        packed[byte] = (packed[byte] & !mask) | (value << tail) as u8;
        return;
    }

    let mut remaining = bits_per_value - free;
    let head_mask = low_bits(free) as u8;
    packed[byte] = (packed[byte] & !head_mask) | (value >> remaining) as u8;
    byte += 1;
    while remaining >= 8 {
        remaining -= 8;
        packed[byte] = (value >> remaining) as u8;
        byte += 1;
    }
    if remaining > 0 {
        let keep = 8 - remaining;
        packed[byte] = (packed[byte] & low_bits(keep) as u8) | (value << keep) as u8;
    }
}
