//! Bit widths and buffer sizing.

/// Widest element this crate packs. The top bit of a `u32` stays unused.
pub const MAX_BITS_PER_VALUE: u32 = 31;

/// Mask selecting the low `bits` bits. `bits` must be below 32.
#[inline(always)]
pub(crate) const fn low_bits(bits: u32) -> u32 {
    (1u32 << bits) - 1
}

#[inline(always)]
pub(crate) fn is_valid_width(bits: u32) -> bool {
    (1..=MAX_BITS_PER_VALUE).contains(&bits)
}

/// Returns the number of bytes needed to hold `size` elements of
/// `bits_per_value` bits, i.e. `ceil(size * bits_per_value / 8)`.
///
/// ```
/// use bit_packer::calculate_packed_size;
///
/// assert_eq!(calculate_packed_size(0, 7), 0);
/// assert_eq!(calculate_packed_size(3, 5), 2);
/// assert_eq!(calculate_packed_size(8, 3), 3);
/// ```
#[inline]
pub fn calculate_packed_size(size: usize, bits_per_value: u32) -> usize {
    (size * bits_per_value as usize).div_ceil(8)
}

/// [`calculate_packed_size`] that reports `None` instead of overflowing.
#[inline]
pub(crate) fn checked_packed_size(size: usize, bits_per_value: u32) -> Option<usize> {
    size.checked_mul(bits_per_value as usize)
        .map(|bits| bits.div_ceil(8))
}

/// Returns the smallest uniform width able to store every value in `values`.
///
/// This is the bit length of the OR of all values, so it is only meaningful
/// as a width for the whole slice. Returns `0` for an empty or all-zero slice.
///
/// ```
/// use bit_packer::get_bits_per_value;
///
/// assert_eq!(get_bits_per_value(&[0, 0, 0]), 0);
/// assert_eq!(get_bits_per_value(&[1]), 1);
/// assert_eq!(get_bits_per_value(&[17, 19, 21000]), 15);
/// ```
pub fn get_bits_per_value(values: &[u32]) -> u32 {
    let combined = values.iter().fold(0u32, |acc, &v| acc | v);
    u32::BITS - combined.leading_zeros()
}
