//! Prelude for common imports.
//!
//! ```
//! use tola_seqdiff::prelude::*;
//!
//! let result = diff(&[1, 2], &[2, 1]);
//! assert_eq!(result.stats().moved, 1);
//! ```

// Identity
pub use crate::id::{Identify, Keyed};

// Algorithms
pub use crate::algo::{
    diff, diff_batch, diff_by, diff_by_key, diff_by_with_config, diff_refs, diff_with_config, merge,
    DiffConfig, DiffResult, DiffStats, Edit, Indexed, Retained,
};

// Error
pub use crate::error::{SeqDiffError, SeqDiffResult, Side};
