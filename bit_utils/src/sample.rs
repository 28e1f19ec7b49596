//! Uniform sampling without replacement.
//!
//! The picked elements keep their relative order from the input, so
//! `random_sample(items, items.len())` returns the input unchanged.

use crate::SampleError;
use rand::Rng;
use tracing::debug;

type Result<T> = core::result::Result<T, SampleError>;

/// Picks `n` elements of `items` using the thread-local RNG.
///
/// # Errors
///
/// [`SampleError::InvalidArgument`] when `n > items.len()`.
pub fn random_sample<T: Clone>(items: &[T], n: usize) -> Result<Vec<T>> {
    random_sample_with(items, n, &mut rand::rng())
}

/// Picks `n` elements of `items` using the given RNG.
///
/// # Examples
///
/// ```
/// use bit_utils::random_sample_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = random_sample_with(&[10, 20, 30, 40], 2, &mut rng).unwrap();
/// assert_eq!(picked.len(), 2);
/// assert!(picked[0] < picked[1]);
/// ```
pub fn random_sample_with<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    n: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if n > items.len() {
        debug!(requested = n, available = items.len(), "rejecting sample request");
        return Err(SampleError::InvalidArgument {
            requested: n,
            available: items.len(),
        });
    }

    let mut picked = rand::seq::index::sample(rng, items.len(), n).into_vec();
    picked.sort_unstable();
    Ok(picked.into_iter().map(|i| items[i].clone()).collect())
}
