//! # bit_packer
//!
//! A `no_std` compatible library for packing fixed-width unsigned integers
//! densely into bytes.
//!
//! Element `i` of a buffer packed at `b` bits per value occupies bits
//! `i * b .. (i + 1) * b` of the stream, most significant bit first within
//! each byte, with no padding between elements.
//!
//! Two independent code paths read and write that layout:
//!
//! - [`get`] / [`set`] address a single element directly;
//! - [`pack`] / [`unpack`] stream a run of elements with a running bit cursor.
//!
//! ```rust
//! use bit_packer::{calculate_packed_size, get, get_bits_per_value, pack, set, unpack};
//!
//! let values: [u32; 10] = [15, 17, 19, 16, 18, 19, 21000, 17, 1700, 15];
//! let bits = get_bits_per_value(&values);
//! assert_eq!(bits, 15);
//!
//! let mut packed = vec![0u8; calculate_packed_size(values.len(), bits)];
//! pack(&values, 0, values.len(), &mut packed, 0, bits);
//! assert_eq!(get(&packed, 6, bits), 21000);
//!
//! set(&mut packed, 1, 10, bits);
//! let mut out = [0u32; 10];
//! let out_len = out.len();
//! unpack(&mut out, 0, out_len, &packed, 0, bits);
//! assert_eq!(out[..3], [15, 10, 19]);
//! ```
//!
//! ## Preconditions
//!
//! The raw functions trust their caller: `bits_per_value` must lie in
//! `1..=31`, destinations for [`pack`] and [`unpack`] must be zeroed, and
//! buffers must be long enough (a short buffer panics on slice indexing).
//! The [`checked`] module validates all of this and returns
//! [`BitPackError`] instead.
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use bit_packer::PackedArray;
//!
//! // Vec<u32>: 1000 elements × 4 bytes = 4000 bytes
//! let standard: Vec<u32> = (0..1000).map(|i| i % 1024).collect();
//!
//! // 10 bits per value: 1000 elements × 10 bits = 1250 bytes
//! let packed = PackedArray::from_values(&standard).unwrap();
//! assert_eq!(packed.bits_per_value(), 10);
//! assert_eq!(packed.as_bytes().len(), 1250);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "container", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub use error::BitPackError;

pub mod addr;
mod bit_ops;
mod bulk;
pub mod checked;
mod width;

pub use addr::BitAddress;
pub use bit_ops::{get, set};
pub use bulk::{pack, unpack};
pub use width::{MAX_BITS_PER_VALUE, calculate_packed_size, get_bits_per_value};

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "container")]
pub use container::PackedArray;
