//! Item identity for sequence diffing
//!
//! A diff needs to know when an item in the old sequence is "the same" item
//! as one in the new sequence, even if its content changed. That notion is
//! kept separate from `PartialEq`:
//!
//! - **Identity** ([`Identify::identity`]): the stable key used to match old
//!   and new occurrences (a row id, a primary key, a slug).
//! - **Full equality** (`PartialEq`): content comparison. The diff never
//!   uses it; callers can use it to decide whether an updated item really
//!   needs re-rendering.
//!
//! Example: `Keyed { key: 8, value: "eight" }` and
//! `Keyed { key: 8, value: "EIGHT" }` share an identity but are not equal.
//! In a diff, the pair is reported as updated (or moved), never as a
//! delete + insert.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

use crate::macros::impl_identify_deref;

// =============================================================================
// Identify
// =============================================================================

/// Items that expose an identity key.
///
/// Two items with equal identities denote the same logical entity.
/// Within one sequence identities are expected to be unique.
///
/// # Example
///
/// ```
/// use tola_seqdiff::Identify;
///
/// struct Row {
///     id: u64,
///     title: String,
/// }
///
/// impl Identify for Row {
///     type Id = u64;
///
///     fn identity(&self) -> &u64 {
///         &self.id
///     }
/// }
///
/// let a = Row { id: 1, title: "draft".into() };
/// let b = Row { id: 1, title: "final".into() };
/// assert!(a.same_identity(&b));
/// ```
pub trait Identify {
    /// Identity key type
    type Id: ?Sized + Hash + Eq;

    /// Borrow this item's identity key
    fn identity(&self) -> &Self::Id;

    /// Check whether two items denote the same logical entity
    #[inline]
    fn same_identity(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

crate::impl_identify_by_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, str,
);

impl Identify for String {
    type Id = str;

    #[inline]
    fn identity(&self) -> &str {
        self.as_str()
    }
}

impl<T: Identify + ?Sized> Identify for &T {
    type Id = T::Id;

    #[inline]
    fn identity(&self) -> &Self::Id {
        (**self).identity()
    }
}

impl_identify_deref!(Box, Rc, Arc);

// =============================================================================
// Keyed
// =============================================================================

/// A value tagged with an explicit identity key.
///
/// Identity is `key`; equality (`PartialEq`) compares key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Keyed<K, V> {
    /// Identity key
    pub key: K,
    /// Content
    pub value: V,
}

impl<K, V> Keyed<K, V> {
    /// Create a keyed value
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Split into `(key, value)`
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Hash + Eq, V> Identify for Keyed<K, V> {
    type Id = K;

    #[inline]
    fn identity(&self) -> &K {
        &self.key
    }
}

impl<K, V> From<(K, V)> for Keyed<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

// =============================================================================
// Tests
// =============================================================================
