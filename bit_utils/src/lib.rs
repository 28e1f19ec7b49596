//! # bit_utils
//!
//! Small stateless helpers that live next to `bit_storage` but do not use it.
//!
//! ```rust
//! use bit_utils::{is_power_of_two, random_sample};
//!
//! assert!(is_power_of_two(64u32));
//! assert!(!is_power_of_two(-8i64));
//!
//! let picked = random_sample(&[1, 2, 3, 4, 5], 3).unwrap();
//! assert_eq!(picked.len(), 3);
//! ```

pub mod error;
pub use error::SampleError;

mod power_of_two;
pub use power_of_two::is_power_of_two;

pub mod sample;
pub use sample::{random_sample, random_sample_with};
