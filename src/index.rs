//! Sentinel-based index trait for null-free node links.
//!
//! List nodes link to their neighbors by arena index. Storing `Option<Idx>`
//! in every node wastes space and forces unwrapping at every hop, so links
//! use a reserved sentinel value instead: `Idx::NONE` (the type's `MAX`)
//! means "no neighbor".

/// A copyable index type with a sentinel "none" value.
///
/// The sentinel takes the place of a null link. A valid arena index is never
/// equal to `NONE`; the arena refuses to grow past it.
///
/// # Example
///
/// ```
/// use slotlist::Index;
///
/// let idx: u32 = 7;
/// assert!(idx.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing "no index".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a `usize`, for slot addressing.
    fn as_usize(self) -> usize;

    /// Creates an index from a slot position.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u16, u32, u64, usize);
