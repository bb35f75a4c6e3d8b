//! Sequence Diff
//!
//! Computes how an old sequence of identity-keyed items became a new one.
//! This is a **pure algorithm module**: no I/O, no rendering, no shared state.
//!
//! # Output
//!
//! ```text
//! diff(old, new) -> DiffResult
//!     inserted  (item, new index)               only in new
//!     deleted   (item, old index)               only in old
//!     updated   (item, old index, new index)    in both, kept in place
//!     moved     (item, old index, new index)    in both, reordered
//! ```
//!
//! Items are borrowed from the inputs: `inserted`, `updated` and `moved`
//! borrow from `new`, `deleted` borrows from `old`.
//!
//! # Algorithm
//!
//! 1. Partition identities into inserted / deleted / common
//! 2. Index the inserted and deleted sets against their sequences
//! 3. Detect moves among common items (see `moves`)
//! 4. Updated = common - moved
//!
//! # Fallback
//!
//! Invalid input (duplicate identities, length over the configured limit) or
//! a broken internal invariant never surfaces as an error. The diff degrades
//! to a full replace instead (everything deleted, everything inserted) and
//! records the reason in [`DiffResult::fallback`]. A full replace is always
//! structurally valid, just not minimal.
//!
//! # Complexity
//!
//! - Partition and indexing: O(n + m) with identity → index maps
//! - Move replay: O(k * (n + m)) for k replayed moves

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::{SeqDiffError, SeqDiffResult, Side};
use crate::id::Identify;

use super::moves::detect_moves;
use super::partition::{index_identities, IdentityIndex, Partition};
use super::types::{DiffStats, Edit, Indexed, Retained};

/// Default item limit: unbounded.
const DEFAULT_MAX_ITEMS: usize = usize::MAX;

// =============================================================================
// Public Types
// =============================================================================

/// Configuration for diff limits.
///
/// Use this to cap the work spent on a single diff:
/// - Lower the limit when a full replace is cheaper than a precise diff
///   for very long lists (e.g. re-rendering a whole table)
/// - Keep the default (unbounded) when every diff must be minimal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Maximum length of either sequence before fallback to full replace.
    /// Default: unbounded
    pub max_items: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self { max_items: DEFAULT_MAX_ITEMS }
    }
}

impl DiffConfig {
    /// Create config with a custom item limit.
    pub fn new(max_items: usize) -> Self {
        Self { max_items }
    }

    /// Create config without limits (same as `Default`).
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create config for large lists (high limit).
    pub fn large() -> Self {
        Self { max_items: 100_000 }
    }

    /// Create config for small lists (low limit, faster fallback).
    pub fn small() -> Self {
        Self { max_items: 1_000 }
    }
}

/// Result of an identity-based sequence diff.
///
/// Every list is ordered: `inserted` and `updated` by new index, `deleted`
/// by old index, `moved` in replay order (ascending new index).
#[must_use]
pub struct DiffResult<'a, T: ?Sized> {
    /// Items only in the new sequence, at their new index
    pub inserted: Vec<Indexed<&'a T>>,
    /// Items only in the old sequence, at their old index
    pub deleted: Vec<Indexed<&'a T>>,
    /// Items in both sequences that were not moved
    pub updated: Vec<Retained<&'a T>>,
    /// Items in both sequences whose position changed
    pub moved: Vec<Retained<&'a T>>,
    /// Why the diff degraded to a full replace, if it did
    pub fallback: Option<SeqDiffError>,
}

impl<'a, T: ?Sized> DiffResult<'a, T> {
    /// Full replace: every old item deleted, every new item inserted.
    ///
    /// This is what the diff returns for invalid input; `reason` is kept in
    /// [`fallback`](Self::fallback).
    pub fn full_replace(
        old: impl IntoIterator<Item = &'a T>,
        new: impl IntoIterator<Item = &'a T>,
        reason: SeqDiffError,
    ) -> Self {
        Self {
            fallback: Some(reason),
            ..Self::replace_all(old, new)
        }
    }

    fn replace_all(
        old: impl IntoIterator<Item = &'a T>,
        new: impl IntoIterator<Item = &'a T>,
    ) -> Self {
        Self {
            inserted: enumerate(new),
            deleted: enumerate(old),
            updated: Vec::new(),
            moved: Vec::new(),
            fallback: None,
        }
    }

    /// Check if the diff degraded to a full replace
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Check if any structural changes were detected
    pub fn has_changes(&self) -> bool {
        !self.inserted.is_empty()
            || !self.deleted.is_empty()
            || !self.moved.is_empty()
            || self.is_fallback()
    }

    /// Per-category counts
    pub fn stats(&self) -> DiffStats {
        DiffStats {
            inserted: self.inserted.len(),
            deleted: self.deleted.len(),
            updated: self.updated.len(),
            moved: self.moved.len(),
        }
    }

    /// Index-only edit script, sorted by position.
    ///
    /// New-side edits (keep, insert, move) are keyed by new index, deletions
    /// by old index.
    pub fn edits(&self) -> Vec<Edit> {
        let mut edits = Vec::with_capacity(
            self.inserted.len() + self.deleted.len() + self.updated.len() + self.moved.len(),
        );

        edits.extend(self.updated.iter().map(|kept| Edit::Keep {
            old_idx: kept.old_index,
            new_idx: kept.new_index,
        }));
        edits.extend(self.inserted.iter().map(|entry| Edit::Insert { new_idx: entry.index }));
        edits.extend(self.deleted.iter().map(|entry| Edit::Delete { old_idx: entry.index }));
        edits.extend(self.moved.iter().map(|moved| Edit::Move {
            old_idx: moved.old_index,
            new_idx: moved.new_index,
        }));

        edits.sort_by_key(Edit::sort_key);
        edits
    }
}

impl<T: ?Sized> Default for DiffResult<'_, T> {
    fn default() -> Self {
        Self {
            inserted: Vec::new(),
            deleted: Vec::new(),
            updated: Vec::new(),
            moved: Vec::new(),
            fallback: None,
        }
    }
}

impl<T: ?Sized> Clone for DiffResult<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inserted: self.inserted.clone(),
            deleted: self.deleted.clone(),
            updated: self.updated.clone(),
            moved: self.moved.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for DiffResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffResult")
            .field("inserted", &self.inserted)
            .field("deleted", &self.deleted)
            .field("updated", &self.updated)
            .field("moved", &self.moved)
            .field("fallback", &self.fallback)
            .finish()
    }
}

fn enumerate<'a, T: ?Sized>(items: impl IntoIterator<Item = &'a T>) -> Vec<Indexed<&'a T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Indexed::new(item, index))
        .collect()
}

// =============================================================================
// Public API
// =============================================================================

/// Diff two sequences in their given order.
///
/// # Example
///
/// ```
/// use tola_seqdiff::diff;
///
/// let result = diff(&[1, 3, 5], &[3, 1, 2, 5]);
///
/// assert_eq!(result.inserted[0].index, 2);
/// assert_eq!((*result.moved[0].item, result.moved[0].old_index), (3, 1));
/// assert_eq!(result.updated.len(), 2);
/// ```
pub fn diff<'a, T: Identify>(old: &'a [T], new: &'a [T]) -> DiffResult<'a, T> {
    diff_with_config(old, new, DiffConfig::default())
}

/// Diff two sequences with custom configuration.
///
/// # Example
///
/// ```
/// use tola_seqdiff::{diff_with_config, DiffConfig};
///
/// let result = diff_with_config(&[1, 2, 3], &[3, 2, 1], DiffConfig::new(2));
/// assert!(result.is_fallback());
/// ```
pub fn diff_with_config<'a, T: Identify>(
    old: &'a [T],
    new: &'a [T],
    config: DiffConfig,
) -> DiffResult<'a, T> {
    let old: Vec<&T> = old.iter().collect();
    let new: Vec<&T> = new.iter().collect();
    diff_refs(&old, &new, config)
}

/// Diff two sequences after sorting both by `compare`.
///
/// For callers whose collections carry no meaningful order: both sides are
/// put into one canonical order first. Reported indices refer to the sorted
/// sequences. Sorting is stable.
pub fn diff_by<'a, T, F>(old: &'a [T], new: &'a [T], compare: F) -> DiffResult<'a, T>
where
    T: Identify,
    F: FnMut(&T, &T) -> Ordering,
{
    diff_by_with_config(old, new, compare, DiffConfig::default())
}

/// [`diff_by`] with a custom configuration.
///
/// The size limit is checked before sorting.
///
/// # Example
///
/// ```
/// use tola_seqdiff::{diff_by_with_config, DiffConfig};
///
/// let result = diff_by_with_config(&[3, 1], &[1, 2, 3], |a, b| a.cmp(b), DiffConfig::new(2));
/// assert!(result.is_fallback());
/// ```
pub fn diff_by_with_config<'a, T, F>(
    old: &'a [T],
    new: &'a [T],
    mut compare: F,
    config: DiffConfig,
) -> DiffResult<'a, T>
where
    T: Identify,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut old: Vec<&T> = old.iter().collect();
    let mut new: Vec<&T> = new.iter().collect();
    if old.len().max(new.len()) <= config.max_items {
        old.sort_by(|a, b| compare(*a, *b));
        new.sort_by(|a, b| compare(*a, *b));
    }
    diff_refs(&old, &new, config)
}

/// Diff two sequences after sorting both by a key.
///
/// # Example
///
/// ```
/// use tola_seqdiff::{diff_by_key, Keyed};
///
/// let old = [Keyed::new("b", 2), Keyed::new("a", 1)];
/// let new = [Keyed::new("a", 1), Keyed::new("c", 3), Keyed::new("b", 2)];
///
/// let result = diff_by_key(&old, &new, |k| k.value);
/// assert_eq!(result.inserted[0].item.key, "c");
/// assert!(result.moved.is_empty());
/// ```
pub fn diff_by_key<'a, T, K, F>(old: &'a [T], new: &'a [T], mut key: F) -> DiffResult<'a, T>
where
    T: Identify,
    K: Ord,
    F: FnMut(&T) -> K,
{
    diff_by(old, new, |a, b| key(a).cmp(&key(b)))
}

/// Diff two sequences of borrowed items.
///
/// The entry point for items that are already borrowed or unsized
/// (e.g. `&[&str]`). Returned items borrow from the original items.
pub fn diff_refs<'a, T>(old: &[&'a T], new: &[&'a T], config: DiffConfig) -> DiffResult<'a, T>
where
    T: Identify + ?Sized,
{
    match try_diff(old, new, config) {
        Ok(result) => {
            tracing::trace!(
                inserted = result.inserted.len(),
                deleted = result.deleted.len(),
                updated = result.updated.len(),
                moved = result.moved.len(),
                "sequence diff complete"
            );
            result
        }
        Err(reason) => {
            tracing::debug!(
                %reason,
                old_len = old.len(),
                new_len = new.len(),
                "sequence diff fell back to full replace"
            );
            DiffResult::full_replace(old.iter().copied(), new.iter().copied(), reason)
        }
    }
}

// =============================================================================
// Internal
// =============================================================================

fn try_diff<'a, T>(old: &[&'a T], new: &[&'a T], config: DiffConfig) -> SeqDiffResult<DiffResult<'a, T>>
where
    T: Identify + ?Sized,
{
    let longest = old.len().max(new.len());
    if longest > config.max_items {
        return Err(SeqDiffError::TooLarge { len: longest, max: config.max_items });
    }

    // Duplicate identities in new make the mapping ambiguous: rejected first
    let new_positions = IdentityIndex::build(new, Side::New)?;

    if old.is_empty() || new.is_empty() {
        return Ok(DiffResult::replace_all(old.iter().copied(), new.iter().copied()));
    }

    let old_positions = IdentityIndex::build(old, Side::Old)?;
    let partition = Partition::split(&old_positions, &new_positions);

    let inserted = index_identities(partition.inserted.iter().copied(), new, &new_positions)?;
    let deleted = index_identities(partition.deleted.iter().copied(), old, &old_positions)?;
    let moved = detect_moves(old, new, &new_positions, &inserted, &deleted)?;

    let moved_ids: FxHashSet<&T::Id> = moved.iter().map(|entry| T::identity(entry.item)).collect();
    let kept = partition.common.iter().copied().filter(|id| !moved_ids.contains(id));
    let updated = index_identities(kept, new, &new_positions)?
        .into_iter()
        .map(|entry| {
            let old_index = old_positions.require(T::identity(entry.item))?;
            Ok(Retained::new(entry.item, old_index, entry.index))
        })
        .collect::<SeqDiffResult<Vec<_>>>()?;

    Ok(DiffResult { inserted, deleted, updated, moved, fallback: None })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Keyed;

    type M = Keyed<&'static str, i32>;

    /// Item with identity `id` and content `x`
    fn m(id: &'static str, x: i32) -> M {
        Keyed::new(id, x)
    }

    fn ms(xs: &[i32]) -> Vec<M> {
        const NAMES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        xs.iter().map(|&x| m(NAMES[x as usize], x)).collect()
    }

    fn pos<T: Copy>(entries: &[Indexed<&T>]) -> Vec<(T, usize)> {
        entries.iter().map(|e| (*e.item, e.index)).collect()
    }

    fn kept<T: Copy>(entries: &[Retained<&T>]) -> Vec<(T, usize)> {
        entries.iter().map(|e| (*e.item, e.new_index)).collect()
    }

    fn moves<T: Copy>(entries: &[Retained<&T>]) -> Vec<(T, usize, usize)> {
        entries.iter().map(|e| (*e.item, e.old_index, e.new_index)).collect()
    }

    fn by_x(a: &M, b: &M) -> Ordering {
        a.value.cmp(&b.value)
    }

    #[test]
    fn test_empty_sequences() {
        let result = diff::<i32>(&[], &[]);
        assert!(!result.has_changes());
        assert!(result.stats().is_empty());
        assert_eq!(result.stats().updated, 0);
    }

    #[test]
    fn test_insert_all() {
        let result = diff(&[], &[1, 2, 4, 6, 8]);
        assert_eq!(pos(&result.inserted), [(1, 0), (2, 1), (4, 2), (6, 3), (8, 4)]);
        assert!(result.deleted.is_empty());
        assert!(result.updated.is_empty());
        assert!(result.moved.is_empty());
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_no_changes() {
        let result = diff(&[1, 2, 4, 6, 8], &[1, 2, 4, 6, 8]);
        assert_eq!(kept(&result.updated), [(1, 0), (2, 1), (4, 2), (6, 3), (8, 4)]);
        assert!(result.updated.iter().all(|e| !e.is_shifted()));
        assert!(!result.has_changes());
    }

    #[test]
    fn test_delete_all() {
        let result = diff(&[1, 2, 4, 6, 8], &[]);
        assert_eq!(pos(&result.deleted), [(1, 0), (2, 1), (4, 2), (6, 3), (8, 4)]);
        assert!(result.inserted.is_empty());
        assert!(result.updated.is_empty());
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_single_insert() {
        let result = diff(&[1, 2, 4, 6, 8], &[1, 2, 4, 5, 6, 8]);
        assert_eq!(pos(&result.inserted), [(5, 3)]);
        assert_eq!(kept(&result.updated), [(1, 0), (2, 1), (4, 2), (6, 4), (8, 5)]);
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_single_delete() {
        let result = diff(&[1, 2, 4, 5, 6, 8], &[1, 4, 5, 6, 8]);
        assert_eq!(pos(&result.deleted), [(2, 1)]);
        assert_eq!(kept(&result.updated), [(1, 0), (4, 1), (5, 2), (6, 3), (8, 4)]);
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_delete_leading() {
        let result = diff(&[1, 4, 5, 6, 8], &[5, 6, 8]);
        assert_eq!(pos(&result.deleted), [(1, 0), (4, 1)]);
        assert_eq!(kept(&result.updated), [(5, 0), (6, 1), (8, 2)]);
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_insert_interleaved() {
        let result = diff(&[5, 6, 8], &[5, 6, 7, 8, 9]);
        assert_eq!(pos(&result.inserted), [(7, 2), (9, 4)]);
        assert_eq!(kept(&result.updated), [(5, 0), (6, 1), (8, 3)]);
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_move_to_front() {
        let result = diff(&[5, 6, 7, 8, 9], &[8, 5, 6, 7, 9]);
        assert_eq!(moves(&result.moved), [(8, 3, 0)]);
        assert_eq!(kept(&result.updated), [(5, 1), (6, 2), (7, 3), (9, 4)]);
        assert!(result.inserted.is_empty());
        assert!(result.deleted.is_empty());
    }

    #[test]
    fn test_move_and_insert() {
        let result = diff(&[1, 3, 5], &[3, 1, 2, 5]);
        assert_eq!(pos(&result.inserted), [(2, 2)]);
        assert_eq!(moves(&result.moved), [(3, 1, 0)]);
        assert_eq!(kept(&result.updated), [(1, 1), (5, 3)]);
        assert!(result.deleted.is_empty());
    }

    #[test]
    fn test_delete_and_insert_without_move() {
        let result = diff(&[1, 3, 5], &[3, 2, 5]);
        assert_eq!(pos(&result.inserted), [(2, 1)]);
        assert_eq!(pos(&result.deleted), [(1, 0)]);
        assert_eq!(kept(&result.updated), [(3, 0), (5, 2)]);
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_delete_and_move() {
        let result = diff(&[1, 3, 5], &[5, 3]);
        assert_eq!(pos(&result.deleted), [(1, 0)]);
        assert_eq!(moves(&result.moved), [(5, 2, 0)]);
        assert_eq!(kept(&result.updated), [(3, 1)]);

        let result = diff(&[1, 3, 5], &[3, 1]);
        assert_eq!(pos(&result.deleted), [(5, 2)]);
        assert_eq!(moves(&result.moved), [(3, 1, 0)]);
        assert_eq!(kept(&result.updated), [(1, 1)]);

        let result = diff(&[1, 3, 5], &[5, 1]);
        assert_eq!(pos(&result.deleted), [(3, 1)]);
        assert_eq!(moves(&result.moved), [(5, 2, 0)]);
        assert_eq!(kept(&result.updated), [(1, 1)]);
    }

    #[test]
    fn test_updated_items_carry_new_content() {
        let old = [m("8", 8), m("5", 5)];
        let new = [m("5", 5), m("8", 0)];

        let result = diff(&old, &new);

        // Lowest target replays first: 5 moves to the front, 8 stays
        assert_eq!(moves(&result.moved), [(m("5", 5), 1, 0)]);
        assert_eq!(kept(&result.updated), [(m("8", 0), 1)]);
        assert!(std::ptr::eq(result.updated[0].item, &new[1]));
        assert_ne!(*result.updated[0].item, old[0], "content changed, identity kept");
    }

    #[test]
    fn test_duplicate_in_new_falls_back() {
        let old = ms(&[1, 2, 3, 4, 5]);
        let new = vec![m("1", 0), m("1", 1), m("2", 2), m("3", 3), m("4", 4), m("5", 5)];

        let result = diff(&old, &new);

        assert_eq!(
            result.fallback,
            Some(SeqDiffError::DuplicateIdentity { side: Side::New, index: 1 })
        );
        assert_eq!(result.inserted.len(), 6);
        assert_eq!(pos(&result.deleted), old.iter().copied().zip(0..).collect::<Vec<_>>());
        assert!(result.updated.is_empty());
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_duplicate_in_new_checked_before_empty_old() {
        let result = diff(&[], &[7, 7]);
        assert!(result.is_fallback());
        assert_eq!(pos(&result.inserted), [(7, 0), (7, 1)]);
    }

    #[test]
    fn test_duplicate_in_old_falls_back() {
        let result = diff(&[1, 2, 1], &[2, 1]);
        assert_eq!(
            result.fallback,
            Some(SeqDiffError::DuplicateIdentity { side: Side::Old, index: 2 })
        );
        assert_eq!(pos(&result.deleted), [(1, 0), (2, 1), (1, 2)]);
        assert_eq!(pos(&result.inserted), [(2, 0), (1, 1)]);
    }

    #[test]
    fn test_duplicate_in_old_with_empty_new() {
        let result = diff(&[1, 1], &[]);
        assert!(!result.is_fallback());
        assert_eq!(pos(&result.deleted), [(1, 0), (1, 1)]);
    }

    #[test]
    fn test_fallback_is_logged_not_raised() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let result = diff(&[1], &[2, 2]);
        assert!(result.is_fallback());
        assert!(result.fallback.as_ref().is_some_and(SeqDiffError::is_invalid_input));
    }

    #[test]
    fn test_max_items_falls_back() {
        let result = diff_with_config(&[1, 2, 3], &[3, 2, 1, 4], DiffConfig::new(3));
        assert_eq!(result.fallback, Some(SeqDiffError::TooLarge { len: 4, max: 3 }));
        assert_eq!(result.stats(), DiffStats { inserted: 4, deleted: 3, updated: 0, moved: 0 });

        let result = diff_with_config(&[1, 2, 3], &[3, 2, 1, 4], DiffConfig::small());
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_config_presets() {
        assert_eq!(DiffConfig::default(), DiffConfig::unbounded());
        assert!(DiffConfig::small().max_items < DiffConfig::large().max_items);
    }

    #[test]
    fn test_diff_by_sorts_both_sides() {
        // 8 moved to first position by its sort key
        let old = ms(&[9, 5, 8, 6, 7]);
        let new = vec![m("8", 0), m("5", 5), m("6", 6), m("7", 7), m("9", 9)];

        let result = diff_by(&old, &new, by_x);

        assert!(result.inserted.is_empty());
        assert!(result.deleted.is_empty());
        assert_eq!(moves(&result.moved), [(m("8", 0), 3, 0)]);
        assert_eq!(
            kept(&result.updated),
            [(m("5", 5), 1), (m("6", 6), 2), (m("7", 7), 3), (m("9", 9), 4)]
        );
    }

    #[test]
    fn test_diff_by_move_second() {
        let old = vec![m("8", 0), m("5", 5), m("6", 6), m("7", 7), m("9", 9)];
        let new = vec![m("8", 0), m("7", 1), m("5", 5), m("6", 6), m("9", 9)];

        let result = diff_by(&old, &new, by_x);

        assert_eq!(moves(&result.moved), [(m("7", 1), 3, 1)]);
        assert_eq!(
            kept(&result.updated),
            [(m("8", 0), 0), (m("5", 5), 2), (m("6", 6), 3), (m("9", 9), 4)]
        );
    }

    #[test]
    fn test_diff_by_inserts_without_move() {
        let old = ms(&[1, 5]);
        let new = vec![m("3", 3), m("1", 1), m("2", 2), m("5", 5)];

        let result = diff_by(&old, &new, by_x);

        assert_eq!(pos(&result.inserted), [(m("2", 2), 1), (m("3", 3), 2)]);
        assert_eq!(kept(&result.updated), [(m("1", 1), 0), (m("5", 5), 3)]);
        assert!(result.moved.is_empty());
    }

    #[test]
    fn test_diff_by_with_config_limits_size() {
        let old = ms(&[9, 5, 8]);
        let new = ms(&[8, 5, 9, 6]);

        let limited = diff_by_with_config(&old, &new, by_x, DiffConfig::new(3));
        assert!(matches!(limited.fallback, Some(SeqDiffError::TooLarge { len: 4, max: 3 })));
        assert_eq!(limited.inserted.len(), 4);
        assert_eq!(limited.deleted.len(), 3);

        let unlimited = diff_by_with_config(&old, &new, by_x, DiffConfig::new(4));
        assert!(!unlimited.is_fallback());
        assert_eq!(unlimited.edits(), diff_by(&old, &new, by_x).edits());
    }

    #[test]
    fn test_diff_by_key_matches_diff_by() {
        let old = ms(&[1, 3, 5]);
        let new = vec![m("3", 0), m("1", 1), m("2", 2), m("5", 5)];

        let by_key = diff_by_key(&old, &new, |k| k.value);
        let by_cmp = diff_by(&old, &new, by_x);

        assert_eq!(by_key.edits(), by_cmp.edits());
        assert_eq!(moves(&by_key.moved), [(m("3", 0), 1, 0)]);
    }

    #[test]
    fn test_diff_refs_unsized_items() {
        let old: Vec<&str> = vec!["a", "b", "c"];
        let new: Vec<&str> = vec!["c", "a", "d"];

        let result = diff_refs::<str>(&old, &new, DiffConfig::default());

        assert_eq!(result.deleted[0].item, "b");
        assert_eq!(result.inserted[0].item, "d");
        assert_eq!(result.stats(), DiffStats { inserted: 1, deleted: 1, updated: 1, moved: 1 });
    }

    #[test]
    fn test_edits_sorted() {
        let result = diff(&[1, 3, 5], &[3, 1, 2, 5]);
        assert_eq!(
            result.edits(),
            [
                Edit::Move { old_idx: 1, new_idx: 0 },
                Edit::Keep { old_idx: 0, new_idx: 1 },
                Edit::Insert { new_idx: 2 },
                Edit::Keep { old_idx: 2, new_idx: 3 },
            ]
        );
    }

    #[test]
    fn test_full_replace_edits() {
        let old = [1, 2];
        let new = [3];
        let result = DiffResult::full_replace(&old, &new, SeqDiffError::IdentityNotFound { side: Side::New });

        assert!(result.has_changes());
        assert_eq!(
            result.edits(),
            [
                Edit::Insert { new_idx: 0 },
                Edit::Delete { old_idx: 0 },
                Edit::Delete { old_idx: 1 },
            ]
        );
    }

    #[test]
    fn test_result_clone_and_debug() {
        let result = diff(&[1, 2], &[2, 1]);
        let cloned = result.clone();
        assert_eq!(cloned.edits(), result.edits());
        assert!(format!("{:?}", cloned).starts_with("DiffResult"));
    }

    #[test]
    fn test_result_is_send_sync() {
        static_assertions::assert_impl_all!(DiffResult<'static, i32>: Send, Sync, Clone, Default);
        static_assertions::assert_impl_all!(DiffResult<'static, str>: Send, Sync);
    }
}
