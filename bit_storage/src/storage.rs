//! Fixed-capacity bit storage backed by 64-bit words.
//!
//! # Examples
//!
//! ## Field access
//!
//! ```rust
//! use bit_storage::BitStorage;
//!
//! let mut bits = BitStorage::new(128, vec![0x123456789ABCDEF0, 0x0FEDCBA987654321])
//!     .expect("two words hold 128 bits");
//!
//! bits.set_field_from_u64(16, 8, 0xAA).unwrap();
//! assert_eq!(bits.get_field_as_u64(16, 8).unwrap(), 0xAA);
//! ```
//!
//! ## Hex rendering
//!
//! ```rust
//! use bit_storage::BitStorage;
//!
//! let bits = BitStorage::new(128, vec![0x123456789ABCDEF0, 0x0FEDCBA987654321]).unwrap();
//! assert_eq!(bits.to_hex_string(), "0fedcba987654321123456789abcdef0");
//! ```
//!
use crate::BitStorageError;
use crate::bit_ops::{self, WORD_BITS};
use tracing::{debug, trace};

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec, vec::Vec};

type Result<T> = core::result::Result<T, BitStorageError>;

/// Widest field that fits the integer accessors.
pub const MAX_INT_FIELD_BITS: usize = u64::BITS as usize;

/// A packed run of `len()` bits stored least-significant word first.
///
/// The word count is fixed at construction. Bits past `len()` in the last word
/// are padding: field operations never touch them, but the hex view prints
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStorage {
    words: Vec<u64>,
    bit_len: usize,
}

impl BitStorage {
    /// Creates a storage of `bit_len` bits over the given words.
    ///
    /// # Errors
    ///
    /// Returns [`BitStorageError::InsufficientCapacity`] when the words hold
    /// fewer than `bit_len` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_storage::{BitStorage, BitStorageError};
    ///
    /// let bits = BitStorage::new(64, vec![u64::MAX]).unwrap();
    /// assert_eq!(bits.len(), 64);
    ///
    /// let err = BitStorage::new(65, vec![0]).unwrap_err();
    /// assert!(matches!(err, BitStorageError::InsufficientCapacity { bit_len: 65, capacity: 64 }));
    /// ```
    pub fn new(bit_len: usize, words: impl Into<Vec<u64>>) -> Result<Self> {
        let words = words.into();
        let capacity = words.len().saturating_mul(WORD_BITS);
        if bit_len > capacity {
            debug!(bit_len, capacity, "rejecting bit storage: not enough backing words");
            return Err(BitStorageError::InsufficientCapacity { bit_len, capacity });
        }
        Ok(Self { words, bit_len })
    }

    /// Copies the words out of a slice.
    pub fn from_slice(bit_len: usize, words: &[u64]) -> Result<Self> {
        Self::new(bit_len, words.to_vec())
    }

    /// All-zero storage with exactly as many words as `bit_len` needs.
    pub fn zeroed(bit_len: usize) -> Self {
        Self {
            words: vec![0u64; bit_ops::words_for(bit_len)],
            bit_len,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Total backing bits, padding included.
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// The backing words as native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    pub fn into_words(self) -> Vec<u64> {
        self.words
    }

    pub(crate) fn get_bit(&self, index: usize) -> Result<bool> {
        if index >= self.bit_len {
            return Err(BitStorageError::IndexOutOfBounds(index, self.bit_len));
        }
        Ok(bit_ops::get_bit(&self.words, index))
    }

    pub(crate) fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        if index >= self.bit_len {
            return Err(BitStorageError::IndexOutOfBounds(index, self.bit_len));
        }
        bit_ops::set_bit(&mut self.words, index, value);
        Ok(())
    }

    /// Validates `[offset, offset + length)` before anything is read or written.
    fn check_field(&self, offset: usize, length: usize) -> Result<()> {
        match offset.checked_add(length) {
            Some(end) if end <= self.bit_len => Ok(()),
            _ => {
                trace!(offset, length, bit_len = self.bit_len, "field out of range");
                Err(BitStorageError::FieldOutOfRange {
                    offset,
                    length,
                    bit_len: self.bit_len,
                })
            }
        }
    }

    /// Copies every bit of `source` into this storage starting at `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_storage::BitStorage;
    ///
    /// let mut dst = BitStorage::zeroed(16);
    /// let src = BitStorage::new(4, vec![0b1011]).unwrap();
    /// dst.set_field(8, &src).unwrap();
    /// assert_eq!(dst.get_field_as_u64(0, 16).unwrap(), 0b1011 << 8);
    /// ```
    pub fn set_field(&mut self, offset: usize, source: &BitStorage) -> Result<()> {
        self.check_field(offset, source.len())?;
        for i in 0..source.len() {
            self.set_bit(offset + i, source.get_bit(i)?)?;
        }
        Ok(())
    }

    /// Writes the low `length` bits of `value` at `offset`.
    ///
    /// `length` may exceed 64; the bits past the width of `value` are written
    /// as zero.
    pub fn set_field_from_u64(&mut self, offset: usize, length: usize, value: u64) -> Result<()> {
        self.check_field(offset, length)?;
        for i in 0..length {
            let bit = i < MAX_INT_FIELD_BITS && (value >> i) & 1 == 1;
            self.set_bit(offset + i, bit)?;
        }
        Ok(())
    }

    /// Extracts `[offset, offset + length)` into a new, independently owned storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_storage::BitStorage;
    ///
    /// let bits = BitStorage::new(64, vec![0xABCD]).unwrap();
    /// let field = bits.get_field(4, 8).unwrap();
    /// assert_eq!(field.len(), 8);
    /// assert_eq!(field.to_hex_string(), "00000000000000bc");
    /// ```
    pub fn get_field(&self, offset: usize, length: usize) -> Result<BitStorage> {
        self.check_field(offset, length)?;
        trace!(offset, length, "extracting field");

        let mut words = vec![0u64; bit_ops::words_for(length)];
        for i in 0..length {
            if self.get_bit(offset + i)? {
                words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
            }
        }
        Ok(BitStorage {
            words,
            bit_len: length,
        })
    }

    /// Reads `[offset, offset + length)` as an integer, bit 0 first.
    ///
    /// # Errors
    ///
    /// [`BitStorageError::FieldTooWide`] when `length > 64`,
    /// [`BitStorageError::FieldOutOfRange`] when the field runs past `len()`.
    pub fn get_field_as_u64(&self, offset: usize, length: usize) -> Result<u64> {
        if length > MAX_INT_FIELD_BITS {
            trace!(length, "field too wide for u64");
            return Err(BitStorageError::FieldTooWide {
                length,
                max: MAX_INT_FIELD_BITS,
            });
        }
        self.check_field(offset, length)?;

        let mut value = 0u64;
        for i in 0..length {
            value |= (self.get_bit(offset + i)? as u64) << i;
        }
        Ok(value)
    }

    /// Every word as 16 lowercase hex digits, highest word first.
    pub fn to_hex_string(&self) -> String {
        format!("{:x}", self)
    }
}

impl core::fmt::LowerHex for BitStorage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{word:016x}")?;
        }
        Ok(())
    }
}

impl core::fmt::Display for BitStorage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(self, f)
    }
}
