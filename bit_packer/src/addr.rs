/// Location of the first bit of an element inside a packed buffer.
///
/// Bits are laid out MSB-first, so `free` counts the low-order bits of
/// `byte` that are still available to the element (`1..=8`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitAddress {
    /// Index of the byte holding the element's most significant bit.
    pub byte: usize,
    /// Bits of `byte` from that bit down to bit 0.
    pub free: u32,
}

impl BitAddress {
    #[inline]
    pub fn of(index: usize, bits_per_value: u32) -> Self {
        let bit_pos = index * bits_per_value as usize;
        Self {
            byte: bit_pos / 8,
            free: 8 - (bit_pos % 8) as u32,
        }
    }
}
