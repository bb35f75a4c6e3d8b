//! Sparse index-tagged insertion
//!
//! Splices `(item, index)` pairs into a base sequence. Indices are positions
//! in the *final* sequence, so insertions are applied in ascending index
//! order: each earlier insertion then shifts the remaining targets exactly
//! as the final layout expects.
//!
//! ```text
//! base:       [10, 20, 30]
//! insertions: (9, 0) (12, 2) (21, 4) (35, 6)
//! result:     [9, 10, 12, 20, 21, 30, 35]
//! ```
//!
//! Used by move detection to simulate the effect of insertions, and usable on
//! its own to apply insert patches.

use smallvec::SmallVec;

use crate::error::{SeqDiffError, SeqDiffResult};

/// Insert each item at its index, in ascending index order.
///
/// Insertions may be given in any order; ties keep their given order. Fails
/// with [`SeqDiffError::IndexOutOfRange`] when an index is greater than the
/// length of the sequence at the time of its insertion.
///
/// # Example
///
/// ```
/// use tola_seqdiff::merge;
///
/// let merged = merge(&["10", "20", "30"], [("15", 1)]).unwrap();
/// assert_eq!(merged, ["10", "15", "20", "30"]);
/// ```
pub fn merge<T, I>(base: &[T], insertions: I) -> SeqDiffResult<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = (T, usize)>,
{
    merge_owned(base.to_vec(), insertions)
}

/// [`merge`] taking ownership of the base sequence (no clone).
pub fn merge_owned<T, I>(mut base: Vec<T>, insertions: I) -> SeqDiffResult<Vec<T>>
where
    I: IntoIterator<Item = (T, usize)>,
{
    let mut pending: SmallVec<[(T, usize); 8]> = insertions.into_iter().collect();
    if pending.is_empty() {
        return Ok(base);
    }

    // Stable: equal indices keep caller order
    pending.sort_by_key(|(_, index)| *index);

    base.reserve(pending.len());
    for (item, index) in pending {
        if index > base.len() {
            return Err(SeqDiffError::IndexOutOfRange { index, len: base.len() });
        }
        base.insert(index, item);
    }

    Ok(base)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_end() {
        let merged = merge(&["1", "2", "3"], [("4", 3)]).unwrap();
        assert_eq!(merged, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_insert_at_beginning() {
        let merged = merge(&["1", "2", "3"], [("0", 0)]).unwrap();
        assert_eq!(merged, ["0", "1", "2", "3"]);
    }

    #[test]
    fn test_insert_in_middle() {
        let merged = merge(&["10", "20", "30"], [("15", 1)]).unwrap();
        assert_eq!(merged, ["10", "15", "20", "30"]);
    }

    #[test]
    fn test_insert_multiple() {
        let merged = merge(&["10", "20", "30"], [("9", 0), ("12", 2), ("21", 4), ("35", 6)]).unwrap();
        assert_eq!(merged, ["9", "10", "12", "20", "21", "30", "35"]);
    }

    #[test]
    fn test_insert_multiple_unsorted() {
        let sorted = merge(&["10", "20", "30"], [("9", 0), ("12", 2), ("21", 4), ("35", 6)]).unwrap();
        let shuffled = merge(&["10", "20", "30"], [("21", 4), ("35", 6), ("9", 0), ("12", 2)]).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_insert_nothing() {
        let base = ["10", "20", "30"];
        let merged = merge(&base, std::iter::empty()).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn test_into_empty_base() {
        let merged = merge_owned(Vec::new(), [(2, 1), (1, 0), (3, 2)]).unwrap();
        assert_eq!(merged, [1, 2, 3]);
    }

    #[test]
    fn test_index_out_of_range() {
        let err = merge(&["10", "20", "30"], [("40", 10)]).unwrap_err();
        assert_eq!(err, SeqDiffError::IndexOutOfRange { index: 10, len: 3 });
    }

    #[test]
    fn test_out_of_range_after_growth() {
        // Second insertion is checked against the grown length (4), not the base (3)
        assert!(merge(&[1, 2, 3], [(0, 0), (9, 4)]).is_ok());
        let err = merge(&[1, 2, 3], [(0, 0), (9, 5)]).unwrap_err();
        assert_eq!(err, SeqDiffError::IndexOutOfRange { index: 5, len: 4 });
    }
}
