//! Error types for tola-seqdiff.
//!
//! Every variant describes a broken input or a broken internal invariant.
//! The diff entry points never return these directly: they are recorded as
//! the reason of a full-replace fallback (see [`DiffResult::fallback`]).
//! Only [`merge`] surfaces them to the caller.
//!
//! [`DiffResult::fallback`]: crate::algo::DiffResult::fallback
//! [`merge`]: crate::algo::merge

use std::fmt;

use thiserror::Error;

/// Which input sequence an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The old (previous) sequence
    Old,
    /// The new (target) sequence
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => f.write_str("old"),
            Self::New => f.write_str("new"),
        }
    }
}

/// Errors that can occur while diffing or merging sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqDiffError {
    /// The same identity appears twice in one sequence
    #[error("duplicate identity in {side} sequence at index {index}")]
    DuplicateIdentity {
        /// Sequence containing the duplicate
        side: Side,
        /// Index of the second occurrence
        index: usize,
    },

    /// An identity from a partition has no position in its reference sequence
    #[error("identity not found in {side} sequence")]
    IdentityNotFound {
        /// Sequence that was searched
        side: Side,
    },

    /// A surviving old item has no position in the new sequence
    #[error("survivor at old index {old_index} has no position in the new sequence")]
    ProjectionIndexMissing {
        /// Index of the survivor in the old sequence
        old_index: usize,
    },

    /// Merge target index beyond the current sequence length
    #[error("merge index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested insertion index
        index: usize,
        /// Sequence length at the time of insertion
        len: usize,
    },

    /// Input longer than the configured limit
    #[error("sequence length {len} exceeds limit {max}")]
    TooLarge {
        /// Length of the longer input
        len: usize,
        /// Configured `max_items`
        max: usize,
    },
}

/// Result type alias for sequence diff operations.
pub type SeqDiffResult<T> = Result<T, SeqDiffError>;

impl SeqDiffError {
    /// Whether this error comes from malformed input rather than a broken
    /// internal invariant.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::DuplicateIdentity { .. } | Self::TooLarge { .. })
    }
}
