//! Result record types shared by the diff stages.

/// An item tagged with its position in one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexed<T> {
    pub item: T,
    pub index: usize,
}

impl<T> Indexed<T> {
    #[inline]
    pub const fn new(item: T, index: usize) -> Self {
        Self { item, index }
    }

    /// Transform the item, keeping the index
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Indexed<U> {
        Indexed { item: f(self.item), index: self.index }
    }
}

/// An item present in both sequences, with its position in each.
///
/// Used for both updated and moved items. For updated items `new_index` is
/// the reported position; `old_index` is kept so edit scripts can pair the
/// two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Retained<T> {
    pub item: T,
    pub old_index: usize,
    pub new_index: usize,
}

impl<T> Retained<T> {
    #[inline]
    pub const fn new(item: T, old_index: usize, new_index: usize) -> Self {
        Self { item, old_index, new_index }
    }

    /// Whether the index changed between the two sequences.
    ///
    /// An updated item can still have shifted indices (insertions or
    /// deletions before it); that is not a move.
    #[inline]
    pub fn is_shifted(&self) -> bool {
        self.old_index != self.new_index
    }

    /// Transform the item, keeping both indices
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Retained<U> {
        Retained {
            item: f(self.item),
            old_index: self.old_index,
            new_index: self.new_index,
        }
    }
}

/// Index-only edit operation, as produced by [`DiffResult::edits`].
///
/// [`DiffResult::edits`]: super::DiffResult::edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Item kept (updated) at old_idx, corresponds to new_idx
    Keep { old_idx: usize, new_idx: usize },
    /// Insert new item at new_idx
    Insert { new_idx: usize },
    /// Delete item at old_idx
    Delete { old_idx: usize },
    /// Move item from old_idx to new_idx
    Move { old_idx: usize, new_idx: usize },
}

impl Edit {
    pub fn is_keep(&self) -> bool {
        matches!(self, Edit::Keep { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Edit::Move { .. })
    }

    /// Sort key: new-side edits by new index, deletions by old index after them
    pub(crate) fn sort_key(&self) -> (usize, u8) {
        match self {
            Edit::Keep { new_idx, .. } => (*new_idx, 0),
            Edit::Insert { new_idx } => (*new_idx, 1),
            Edit::Delete { old_idx } => (*old_idx, 2),
            Edit::Move { new_idx, .. } => (*new_idx, 3),
        }
    }
}

/// Per-category counts of a diff.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub inserted: usize,
    pub deleted: usize,
    pub updated: usize,
    pub moved: usize,
}

impl DiffStats {
    /// Total number of structural edits (not counting updates)
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted + self.moved
    }

    /// Check if there are no structural changes
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}
