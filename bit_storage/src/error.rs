#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitStorageError {
    #[cfg_attr(
        feature = "std",
        error("Bit length {bit_len} exceeds backing capacity of {capacity} bits")
    )]
    InsufficientCapacity { bit_len: usize, capacity: usize },

    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Field at offset {offset} with length {length} exceeds bit length {bit_len}")
    )]
    FieldOutOfRange {
        offset: usize,
        length: usize,
        bit_len: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("Field length {length} exceeds the maximum of {max} bits")
    )]
    FieldTooWide { length: usize, max: usize },
}

impl BitStorageError {
    /// True for every out-of-bounds failure, whether it names a single index
    /// or a whole field.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            BitStorageError::IndexOutOfBounds(..)
                | BitStorageError::FieldOutOfRange { .. }
                | BitStorageError::FieldTooWide { .. }
        )
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitStorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitStorageError::InsufficientCapacity { bit_len, capacity } => write!(
                f,
                "Bit length {} exceeds backing capacity of {} bits",
                bit_len, capacity
            ),
            BitStorageError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            BitStorageError::FieldOutOfRange {
                offset,
                length,
                bit_len,
            } => write!(
                f,
                "Field at offset {} with length {} exceeds bit length {}",
                offset, length, bit_len
            ),
            BitStorageError::FieldTooWide { length, max } => write!(
                f,
                "Field length {} exceeds the maximum of {} bits",
                length, max
            ),
        }
    }
}
