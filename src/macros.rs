//! Identity implementation macros
//!
//! These macros eliminate repetitive `Identify` impls for value-like types
//! and pointer wrappers.

// =============================================================================
// Identify impl generation macros
// =============================================================================

/// Implement [`Identify`](crate::Identify) for types whose identity is the
/// whole value.
///
/// Useful for plain keys (integers, enums, ids) where there is no separate
/// content to update.
///
/// # Example
/// ```
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// enum Column { Name, Size }
///
/// tola_seqdiff::impl_identify_by_value!(Column);
///
/// use tola_seqdiff::Identify;
/// assert!(Column::Name.same_identity(&Column::Name));
/// ```
#[macro_export]
macro_rules! impl_identify_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Identify for $ty {
                type Id = $ty;

                #[inline]
                fn identity(&self) -> &Self::Id {
                    self
                }
            }
        )*
    };
}

/// Implement [`Identify`](crate::Identify) for single-parameter pointer
/// wrappers by delegating to the pointee.
///
/// # Example
/// ```ignore
/// impl_identify_deref!(Box, Rc, Arc);
/// // Expands to: impl<T: Identify + ?Sized> Identify for Box<T> { ... }
/// ```
macro_rules! impl_identify_deref {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: $crate::Identify + ?Sized> $crate::Identify for $wrapper<T> {
                type Id = T::Id;

                #[inline]
                fn identity(&self) -> &Self::Id {
                    (**self).identity()
                }
            }
        )*
    };
}

pub(crate) use impl_identify_deref;
