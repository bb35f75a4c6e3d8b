//! Batch diffing of independent sequence pairs.
//!
//! Each pair is diffed on its own; pairs share nothing. With the `parallel`
//! feature the pairs are spread over the rayon thread pool, otherwise they
//! run in order on the calling thread. Output order always matches input
//! order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::id::Identify;

use super::diff::{diff_with_config, DiffConfig, DiffResult};

/// Diff every `(old, new)` pair with the default configuration.
///
/// # Example
///
/// ```
/// use tola_seqdiff::diff_batch;
///
/// let pairs = [(vec![1, 2], vec![2, 1]), (vec![], vec![7])];
/// let results = diff_batch(&pairs);
///
/// assert_eq!(results[0].moved.len(), 1);
/// assert_eq!(results[1].inserted.len(), 1);
/// ```
#[cfg(not(feature = "parallel"))]
pub fn diff_batch<'a, T, S>(pairs: &'a [(S, S)]) -> Vec<DiffResult<'a, T>>
where
    T: Identify,
    S: AsRef<[T]>,
{
    diff_batch_with_config(pairs, DiffConfig::default())
}

/// Diff every `(old, new)` pair with a custom configuration.
#[cfg(not(feature = "parallel"))]
pub fn diff_batch_with_config<'a, T, S>(pairs: &'a [(S, S)], config: DiffConfig) -> Vec<DiffResult<'a, T>>
where
    T: Identify,
    S: AsRef<[T]>,
{
    pairs
        .iter()
        .map(|(old, new)| diff_with_config(old.as_ref(), new.as_ref(), config))
        .collect()
}

/// Diff every `(old, new)` pair with the default configuration, in parallel.
///
/// # Example
///
/// ```
/// use tola_seqdiff::diff_batch;
///
/// let pairs = [(vec![1, 2], vec![2, 1]), (vec![], vec![7])];
/// let results = diff_batch(&pairs);
///
/// assert_eq!(results[0].moved.len(), 1);
/// assert_eq!(results[1].inserted.len(), 1);
/// ```
#[cfg(feature = "parallel")]
pub fn diff_batch<'a, T, S>(pairs: &'a [(S, S)]) -> Vec<DiffResult<'a, T>>
where
    T: Identify + Sync,
    S: AsRef<[T]> + Sync,
{
    diff_batch_with_config(pairs, DiffConfig::default())
}

/// Diff every `(old, new)` pair with a custom configuration, in parallel.
#[cfg(feature = "parallel")]
pub fn diff_batch_with_config<'a, T, S>(pairs: &'a [(S, S)], config: DiffConfig) -> Vec<DiffResult<'a, T>>
where
    T: Identify + Sync,
    S: AsRef<[T]> + Sync,
{
    pairs
        .par_iter()
        .map(|(old, new)| diff_with_config(old.as_ref(), new.as_ref(), config))
        .collect()
}
