//! # bit_storage
//!
//! A `no_std` compatible fixed-capacity bit container with bit-field access.
//!
//! ```rust
//! use bit_storage::BitStorage;
//!
//! // 128 bits over two words, word 0 holds bits 0..64
//! let mut bits = BitStorage::new(128, vec![0x123456789ABCDEF0, 0x0FEDCBA987654321])
//!     .expect("Failed to create storage");
//!
//! let nibbles = bits.get_field(4, 8).unwrap();
//! assert_eq!(nibbles.get_field_as_u64(0, 8).unwrap(), 0xEF);
//!
//! bits.set_field_from_u64(16, 8, 0xAA).unwrap();
//! assert_eq!(bits.get_field_as_u64(16, 8).unwrap(), 0xAA);
//! ```
//!
//! ## Hex rendering
//!
//! Words print as fixed 16-digit lowercase groups, highest word first:
//!
//! ```rust
//! use bit_storage::BitStorage;
//!
//! let bits = BitStorage::new(70, vec![0xFF, 0x1]).unwrap();
//! assert_eq!(bits.to_hex_string(), "000000000000000100000000000000ff");
//! assert_eq!(format!("{:x}", bits), bits.to_hex_string());
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitStorageError;

mod bit_ops;

pub mod storage;
pub use storage::{BitStorage, MAX_INT_FIELD_BITS};
