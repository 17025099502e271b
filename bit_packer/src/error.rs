#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitPackError {
    #[cfg_attr(
        feature = "std",
        error("bits per value must be in the range 1..=31, got {0}")
    )]
    InvalidBitWidth(u32),

    #[cfg_attr(feature = "std", error("value {value} does not fit in {bits} bits"))]
    ValueOverflow { value: u32, bits: u32 },

    #[cfg_attr(feature = "std", error("index {index} is out of bounds for length {len}"))]
    IndexOutOfBounds { index: usize, len: usize },

    #[cfg_attr(
        feature = "std",
        error("packed buffer holds {available} bytes, {required} required")
    )]
    InsufficientBytes { required: usize, available: usize },

    #[cfg_attr(
        feature = "std",
        error("value range {start}..{start}+{len} exceeds {available} values")
    )]
    RangeOutOfBounds {
        start: usize,
        len: usize,
        available: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitPackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitPackError::InvalidBitWidth(bits) => {
                write!(f, "bits per value must be in the range 1..=31, got {}", bits)
            }
            BitPackError::ValueOverflow { value, bits } => {
                write!(f, "value {} does not fit in {} bits", value, bits)
            }
            BitPackError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is out of bounds for length {}", index, len)
            }
            BitPackError::InsufficientBytes {
                required,
                available,
            } => write!(
                f,
                "packed buffer holds {} bytes, {} required",
                available, required
            ),
            BitPackError::RangeOutOfBounds {
                start,
                len,
                available,
            } => write!(
                f,
                "value range {}..{}+{} exceeds {} values",
                start, start, len, available
            ),
        }
    }
}
