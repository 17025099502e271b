//! Owned, growable packed array.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use bit_packer::PackedArray;
//!
//! let mut array = PackedArray::new(7).expect("valid width");
//! array.push(100).unwrap();
//! array.push(50).unwrap();
//!
//! assert_eq!(array.get(0), Some(100));
//! assert_eq!(array.len(), 2);
//! ```
//!
//! ## Persistence
//!
//! The packed bytes carry no header; the caller keeps the width and length.
//!
//! ```rust
//! use bit_packer::PackedArray;
//!
//! let array = PackedArray::from_values(&[512, 3, 700]).unwrap();
//! let (bits, len) = (array.bits_per_value(), array.len());
//! let bytes = array.into_bytes();
//!
//! let restored = PackedArray::from_bytes(bits, len, bytes).unwrap();
//! assert_eq!(restored.to_vec(), vec![512, 3, 700]);
//! ```

use log::trace;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::checked::validate_bits_per_value;
use crate::width::low_bits;
use crate::{BitPackError, MAX_BITS_PER_VALUE, bit_ops, bulk, calculate_packed_size, get_bits_per_value};

type Result<T> = core::result::Result<T, BitPackError>;

fn ensure_fits(values: &[u32], bits_per_value: u32) -> Result<()> {
    match values.iter().find(|&&v| v > low_bits(bits_per_value)) {
        Some(&value) => Err(BitPackError::ValueOverflow {
            value,
            bits: bits_per_value,
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct PackedArray {
    bytes: Vec<u8>,
    len: usize,
    bits_per_value: u32,
}

/// Arrays are equal when they hold the same elements at the same width.
/// Padding after the last element and spare trailing bytes are ignored.
impl PartialEq for PackedArray {
    fn eq(&self, other: &Self) -> bool {
        if self.bits_per_value != other.bits_per_value || self.len != other.len {
            return false;
        }
        match (self.as_bytes().split_last(), other.as_bytes().split_last()) {
            (Some((last, body)), Some((other_last, other_body))) => {
                let mask = !(low_bits(self.padding_bits()) as u8);
                body == other_body && last & mask == other_last & mask
            }
            _ => true,
        }
    }
}

impl Eq for PackedArray {}

impl PackedArray {
    /// Creates an empty array of `bits_per_value`-bit elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_packer::{BitPackError, PackedArray};
    ///
    /// let array = PackedArray::new(8).expect("valid width");
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(PackedArray::new(32), Err(BitPackError::InvalidBitWidth(32)));
    /// ```
    pub fn new(bits_per_value: u32) -> Result<Self> {
        validate_bits_per_value(bits_per_value)?;
        Ok(Self {
            bytes: Vec::new(),
            len: 0,
            bits_per_value,
        })
    }

    pub fn with_capacity(bits_per_value: u32, capacity: usize) -> Result<Self> {
        validate_bits_per_value(bits_per_value)?;
        Ok(Self {
            bytes: Vec::with_capacity(calculate_packed_size(capacity, bits_per_value)),
            len: 0,
            bits_per_value,
        })
    }

    /// Packs `values` at the narrowest width that holds all of them.
    ///
    /// An all-zero input is stored at one bit per value. Fails if a value
    /// needs the 32nd bit.
    pub fn from_values(values: &[u32]) -> Result<Self> {
        let bits_per_value = get_bits_per_value(values).clamp(1, MAX_BITS_PER_VALUE);
        ensure_fits(values, bits_per_value)?;
        let mut bytes = vec![0u8; calculate_packed_size(values.len(), bits_per_value)];
        bulk::pack(values, 0, values.len(), &mut bytes, 0, bits_per_value);
        Ok(Self {
            bytes,
            len: values.len(),
            bits_per_value,
        })
    }

    /// Adopts an already packed buffer holding `len` elements.
    ///
    /// Extra trailing bytes are kept and count towards [`capacity`](Self::capacity).
    pub fn from_bytes(bits_per_value: u32, len: usize, bytes: Vec<u8>) -> Result<Self> {
        validate_bits_per_value(bits_per_value)?;
        let required = calculate_packed_size(len, bits_per_value);
        if bytes.len() < required {
            return Err(BitPackError::InsufficientBytes {
                required,
                available: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            len,
            bits_per_value,
        })
    }

    pub fn bits_per_value(&self) -> u32 {
        self.bits_per_value
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current buffer can hold without growing.
    pub fn capacity(&self) -> usize {
        (self.bytes.capacity() * 8) / self.bits_per_value as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..calculate_packed_size(self.len, self.bits_per_value)]
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.truncate(calculate_packed_size(self.len, self.bits_per_value));
        self.bytes
    }

    /// Unused low bits of the last byte of [`as_bytes`](Self::as_bytes).
    fn padding_bits(&self) -> u32 {
        let used = self.len * self.bits_per_value as usize;
        (calculate_packed_size(self.len, self.bits_per_value) * 8 - used) as u32
    }

    fn check_value(&self, value: u32) -> Result<()> {
        if value > low_bits(self.bits_per_value) {
            return Err(BitPackError::ValueOverflow {
                value,
                bits: self.bits_per_value,
            });
        }
        Ok(())
    }

    /// Appends a value that must fit in `bits_per_value` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_packer::PackedArray;
    ///
    /// let mut array = PackedArray::new(4).expect("valid width");
    /// array.push(15).unwrap();
    /// assert!(array.push(16).is_err());
    /// assert_eq!(array.get(0), Some(15));
    /// ```
    pub fn push(&mut self, value: u32) -> Result<()> {
        self.check_value(value)?;
        let required = calculate_packed_size(self.len + 1, self.bits_per_value);
        if self.bytes.len() < required {
            trace!("growing packed buffer {} -> {} bytes", self.bytes.len(), required);
            self.bytes.resize(required, 0);
        }
        bit_ops::set(&mut self.bytes, self.len, value, self.bits_per_value);
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        if index >= self.len {
            return None;
        }
        Some(bit_ops::get(&self.bytes, index, self.bits_per_value))
    }

    pub fn set(&mut self, index: usize, value: u32) -> Result<()> {
        if index >= self.len {
            return Err(BitPackError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.check_value(value)?;
        bit_ops::set(&mut self.bytes, index, value, self.bits_per_value);
        Ok(())
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.len = 0;
        self.bytes.clear();
    }

    /// Decodes every element with a single bulk pass.
    pub fn to_vec(&self) -> Vec<u32> {
        let mut values = vec![0u32; self.len];
        bulk::unpack(&mut values, 0, self.len, &self.bytes, 0, self.bits_per_value);
        values
    }

    /// Re-encodes the contents at a different width.
    ///
    /// Fails without modifying `self` if some element does not fit.
    pub fn repack(&mut self, bits_per_value: u32) -> Result<()> {
        validate_bits_per_value(bits_per_value)?;
        if bits_per_value == self.bits_per_value {
            return Ok(());
        }
        let values = self.to_vec();
        ensure_fits(&values, bits_per_value)?;
        trace!(
            "repacking {} values from {} to {} bits",
            self.len, self.bits_per_value, bits_per_value
        );
        let mut bytes = vec![0u8; calculate_packed_size(self.len, bits_per_value)];
        bulk::pack(&values, 0, self.len, &mut bytes, 0, bits_per_value);
        self.bytes = bytes;
        self.bits_per_value = bits_per_value;
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            index: 0,
        }
    }
}

pub struct Iter<'a> {
    array: &'a PackedArray,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        let val = self.array.get(self.index)?;
        self.index += 1;
        Some(val)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PackedArray {
    type Item = u32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
