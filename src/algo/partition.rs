//! Identity partitioning and index lookup
//!
//! Splits two sequences into three disjoint identity sets and maps those sets
//! back to positions:
//!
//! ```text
//! old: [1, 3, 5]        old ids: {1, 3, 5}
//! new: [3, 1, 2, 5]     new ids: {1, 2, 3, 5}
//!
//! inserted = new - old = {2}
//! deleted  = old - new = {}
//! common   = new & old = {1, 3, 5}
//! ```
//!
//! Positions come from an identity → index map built once per sequence, so
//! every lookup is O(1) instead of a linear scan.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{SeqDiffError, SeqDiffResult, Side};
use crate::id::Identify;

use super::types::Indexed;

// =============================================================================
// IdentityIndex
// =============================================================================

/// Identity → position map for one sequence.
pub(crate) struct IdentityIndex<'a, Id: ?Sized> {
    positions: FxHashMap<&'a Id, usize>,
    side: Side,
}

impl<'a, Id: ?Sized + std::hash::Hash + Eq> IdentityIndex<'a, Id> {
    /// Build the map, rejecting duplicate identities.
    pub fn build<T>(items: &[&'a T], side: Side) -> SeqDiffResult<Self>
    where
        T: Identify<Id = Id> + ?Sized,
    {
        let mut positions = FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
        for (index, &item) in items.iter().enumerate() {
            if positions.insert(T::identity(item), index).is_some() {
                return Err(SeqDiffError::DuplicateIdentity { side, index });
            }
        }
        Ok(Self { positions, side })
    }

    #[inline]
    pub fn position(&self, id: &Id) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Position of `id`, or `IdentityNotFound` for this side.
    #[inline]
    pub fn require(&self, id: &Id) -> SeqDiffResult<usize> {
        self.position(id)
            .ok_or(SeqDiffError::IdentityNotFound { side: self.side })
    }

    #[inline]
    pub fn contains(&self, id: &Id) -> bool {
        self.positions.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a Id> + '_ {
        self.positions.keys().copied()
    }
}

// =============================================================================
// Partitioner
// =============================================================================

/// Disjoint identity sets of an old/new sequence pair.
pub(crate) struct Partition<'a, Id: ?Sized> {
    /// In new only
    pub inserted: FxHashSet<&'a Id>,
    /// In old only
    pub deleted: FxHashSet<&'a Id>,
    /// In both
    pub common: FxHashSet<&'a Id>,
}

impl<'a, Id: ?Sized + std::hash::Hash + Eq> Partition<'a, Id> {
    pub fn split(old: &IdentityIndex<'a, Id>, new: &IdentityIndex<'a, Id>) -> Self {
        let mut inserted = FxHashSet::default();
        let mut common = FxHashSet::default();
        for id in new.ids() {
            if old.contains(id) {
                common.insert(id);
            } else {
                inserted.insert(id);
            }
        }

        let deleted = old.ids().filter(|id| !new.contains(id)).collect();

        Self { inserted, deleted, common }
    }
}

// =============================================================================
// Indexer
// =============================================================================

/// Map identities back to `(item, index)` pairs in `reference`, sorted by index.
///
/// Fails with `IdentityNotFound` when an identity has no position in the
/// reference sequence.
pub(crate) fn index_identities<'a, 'i, T>(
    ids: impl IntoIterator<Item = &'i T::Id>,
    reference: &[&'a T],
    positions: &IdentityIndex<'_, T::Id>,
) -> SeqDiffResult<Vec<Indexed<&'a T>>>
where
    T: Identify + ?Sized,
    T::Id: 'i,
{
    let mut indexed = ids
        .into_iter()
        .map(|id| {
            let index = positions.require(id)?;
            Ok(Indexed::new(reference[index], index))
        })
        .collect::<SeqDiffResult<Vec<_>>>()?;

    indexed.sort_unstable_by_key(|entry| entry.index);
    Ok(indexed)
}

// =============================================================================
// Tests
// =============================================================================
