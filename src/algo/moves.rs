//! Move detection
//!
//! Insertions and deletions shift the index of every item after them without
//! that item being "moved". To separate index drift from real reordering,
//! the detector rebuilds the new sequence step by step:
//!
//! 1. Drop deleted items from the old sequence (survivors keep their order)
//! 2. Project each survivor onto its position in the new sequence
//! 3. Splice the inserted items in at their new indices
//! 4. Collect survivors whose old and new index differ, sorted by new index
//! 5. Replay those candidates one at a time (remove, reinsert at target)
//!    until the simulation equals the new sequence
//!
//! Only the candidates replayed before convergence are reported as moves.
//!
//! ```text
//! old: [1, 3, 5]   new: [3, 1, 2, 5]
//!
//! survivors           [1, 3, 5]
//! + insert 2 @ 2      [1, 3, 2, 5]
//! candidates          3 (1 → 0), 1 (0 → 1), 5 (2 → 3)
//! replay 3 → 0        [3, 1, 2, 5]   converged
//!
//! moved: 3 (1 → 0)
//! ```
//!
//! # Simulation Representation
//!
//! The simulated sequence stores each element's index in the new sequence,
//! so it equals the new sequence exactly when `sim[i] == i` for every slot.
//! A running count of misplaced slots is maintained; each move re-counts
//! only the window between its source and target.

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::error::{SeqDiffError, SeqDiffResult};
use crate::id::Identify;

use super::merge::merge_owned;
use super::partition::IdentityIndex;
use super::types::{Indexed, Retained};

/// Compute the moves needed to finish turning `old` into `new` once
/// `inserted` and `deleted` have been applied.
///
/// Returned moves are in replay order (ascending new index) and carry
/// indices from the original sequences.
pub(crate) fn detect_moves<'a, T>(
    old: &[&'a T],
    new: &[&'a T],
    new_positions: &IdentityIndex<'_, T::Id>,
    inserted: &[Indexed<&'a T>],
    deleted: &[Indexed<&'a T>],
) -> SeqDiffResult<Vec<Retained<&'a T>>>
where
    T: Identify + ?Sized,
{
    let deleted_at: FxHashSet<usize> = deleted.iter().map(|entry| entry.index).collect();

    // (old_index, new_index) per survivor, in old order
    let mut survivors = Vec::with_capacity(old.len().saturating_sub(deleted.len()));
    for (old_index, &item) in old.iter().enumerate() {
        if deleted_at.contains(&old_index) {
            continue;
        }
        let new_index = new_positions
            .position(T::identity(item))
            .ok_or(SeqDiffError::ProjectionIndexMissing { old_index })?;
        survivors.push((old_index, new_index));
    }

    let projected = survivors.iter().map(|&(_, new_index)| new_index).collect();
    let simulated = merge_owned(projected, inserted.iter().map(|entry| (entry.index, entry.index)))?;
    let mut replay = Replay::new(simulated, new.len());

    let mut candidates: SmallVec<[(usize, usize); 8]> = survivors
        .into_iter()
        .filter(|(old_index, new_index)| old_index != new_index)
        .collect();
    candidates.sort_by_key(|&(_, new_index)| new_index);

    let mut moved = Vec::new();
    for (replayed, &(old_index, new_index)) in candidates.iter().enumerate() {
        if replay.converged() {
            tracing::trace!(skipped = candidates.len() - replayed, "move replay converged early");
            break;
        }
        replay.apply(new_index);
        moved.push(Retained::new(new[new_index], old_index, new_index));
    }

    Ok(moved)
}

// =============================================================================
// Replay scratch sequence
// =============================================================================

/// Simulated sequence of new-sequence positions, scoped to one detection.
struct Replay {
    sim: Vec<usize>,
    misplaced: usize,
    target_len: usize,
}

impl Replay {
    fn new(sim: Vec<usize>, target_len: usize) -> Self {
        let misplaced = sim.iter().enumerate().filter(|&(slot, &pos)| slot != pos).count();
        Self { sim, misplaced, target_len }
    }

    #[inline]
    fn converged(&self) -> bool {
        self.misplaced == 0 && self.sim.len() == self.target_len
    }

    /// Move the element destined for `target` into slot `target`.
    ///
    /// No-op when the element is absent or `target` is past the end.
    fn apply(&mut self, target: usize) {
        if target >= self.sim.len() {
            return;
        }
        let Some(from) = self.sim.iter().position(|&pos| pos == target) else {
            return;
        };
        if from == target {
            return;
        }

        let window = from.min(target)..=from.max(target);
        self.misplaced -= self.count_misplaced(window.clone());
        let pos = self.sim.remove(from);
        self.sim.insert(target, pos);
        self.misplaced += self.count_misplaced(window);
    }

    fn count_misplaced(&self, window: RangeInclusive<usize>) -> usize {
        window.filter(|&slot| self.sim[slot] != slot).count()
    }
}

// =============================================================================
// Tests
// =============================================================================
