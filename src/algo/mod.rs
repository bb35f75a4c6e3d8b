//! Algorithm implementations for sequence diffing.
//!
//! - `partition`: identity sets and identity → index lookup
//! - `moves`: move detection by simulate-and-replay
//! - `merge`: sparse index-tagged insertion
//! - `diff`: public diff API, fallback policy, result types
//! - `batch`: many independent diffs (parallel with the `parallel` feature)

mod batch;
mod diff;
mod merge;
mod moves;
mod partition;
mod types;

pub use batch::{diff_batch, diff_batch_with_config};
pub use diff::{
    diff, diff_by, diff_by_key, diff_by_with_config, diff_refs, diff_with_config, DiffConfig,
    DiffResult,
};
pub use merge::{merge, merge_owned};
pub use types::{DiffStats, Edit, Indexed, Retained};
