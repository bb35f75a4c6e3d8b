//! tola-seqdiff - Identity-keyed Sequence Diff with Move Detection
//!
//! ## Core Concepts
//!
//! **Identity vs. Equality**: items are matched across sequences by an
//! identity key ([`Identify`]), not by `PartialEq`. An item whose key
//! survives but whose content changed is *updated*, never deleted and
//! re-inserted.
//!
//! **Drift vs. Move**: inserting or deleting an item shifts the indices of
//! everything after it. Those shifts are not moves. An item is reported as
//! *moved* only when it must be relocated to turn the old sequence (after
//! deletions and insertions) into the new one.
//!
//! ## Modules
//! - `id`: `Identify` trait, `Keyed` helper
//! - `algo`: diff, move detection, merge, batch diffing
//! - `error`: error types and the fallback reasons
//!
//! ## Usage
//!
//! ```
//! use tola_seqdiff::{diff, Keyed};
//!
//! let old = [Keyed::new(5, "e"), Keyed::new(6, "f"), Keyed::new(8, "h")];
//! let new = [Keyed::new(8, "H"), Keyed::new(5, "e"), Keyed::new(6, "f"), Keyed::new(9, "i")];
//!
//! let result = diff(&old, &new);
//!
//! assert_eq!(result.inserted[0].index, 3);
//! assert_eq!((result.moved[0].old_index, result.moved[0].new_index), (2, 0));
//! assert_eq!(result.moved[0].item.value, "H");
//! assert_eq!(result.updated.len(), 2);
//! assert!(!result.is_fallback());
//! ```

// =============================================================================
// Core modules
// =============================================================================

mod macros;

/// Item identity: `Identify`, `Keyed`
pub mod id;

/// Algorithms: diff, move detection, merge
pub mod algo;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Identity
pub use id::{Identify, Keyed};

// Algorithms
pub use algo::{
    diff, diff_batch, diff_batch_with_config, diff_by, diff_by_key, diff_by_with_config, diff_refs,
    diff_with_config, merge, merge_owned, DiffConfig, DiffResult, DiffStats, Edit, Indexed,
    Retained,
};

// Error types
pub use error::{SeqDiffError, SeqDiffResult, Side};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        title: &'static str,
    }

    impl Identify for Row {
        type Id = u32;

        fn identity(&self) -> &u32 {
            &self.id
        }
    }

    fn row(id: u32, title: &'static str) -> Row {
        Row { id, title }
    }

    #[test]
    fn test_custom_identify_type() {
        let old = vec![row(1, "a"), row(2, "b"), row(3, "c")];
        let new = vec![row(3, "c"), row(1, "A"), row(4, "d")];

        let result = diff(&old, &new);

        assert_eq!(result.stats(), DiffStats { inserted: 1, deleted: 1, updated: 1, moved: 1 });
        assert_eq!(result.moved[0].item, &row(3, "c"));

        // Content changes are the caller's concern: identity matched, equality did not
        let kept = &result.updated[0];
        assert_eq!(kept.item.title, "A");
        assert_ne!(kept.item, &old[kept.old_index]);
    }

    #[test]
    fn test_user_macro_identity() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Column {
            Name,
            Size,
            Date,
        }

        crate::impl_identify_by_value!(Column);

        let result = diff(&[Column::Name, Column::Size], &[Column::Size, Column::Date, Column::Name]);

        assert_eq!(result.inserted.len(), 1);
        assert_eq!(*result.inserted[0].item, Column::Date);
        assert!(result.deleted.is_empty());
    }

    #[test]
    fn test_merge_reexport_applies_insert_patch() {
        let old = ["a", "c"];
        let new = ["a", "b", "c", "d"];
        let result = diff(&old, &new);

        let patched = merge(&old, result.inserted.iter().map(|e| (*e.item, e.index))).unwrap();
        assert_eq!(patched, new);
    }
}
