//! List handles.
//!
//! A handle is a 1-based position into the pool's node storage. Position `0`
//! is the sentinel: it stands for the empty list, the end of a list and the
//! end of the free chain all at once, and is never a storage position.

use core::fmt;
use core::hash::Hash;

/// Unsigned integer types usable as the raw representation of a [`Handle`].
///
/// The pool can hold at most `Self::MAX` nodes since position `0` is
/// reserved for the sentinel.
pub trait Index: Copy + Eq + Ord + Hash + fmt::Debug {
    /// The reserved "no node" value.
    const SENTINEL: Self;

    /// Converts a 1-based storage position, failing when it does not fit.
    fn from_position(position: usize) -> Option<Self>;

    /// Converts back to a 1-based storage position.
    ///
    /// Values wider than `usize` saturate, which keeps them out of range.
    fn to_position(self) -> usize;
}

macro_rules! impl_index {
    ($($ty:ty),* $(,)?) => {$(
        impl Index for $ty {
            const SENTINEL: Self = 0;

            #[inline]
            fn from_position(position: usize) -> Option<Self> {
                <$ty>::try_from(position).ok()
            }

            #[inline]
            fn to_position(self) -> usize {
                usize::try_from(self).unwrap_or(usize::MAX)
            }
        }
    )*};
}

impl_index!(u8, u16, u32, u64, usize);

/// Handle naming a list (its head node) or a single node inside a pool.
///
/// Handles are plain values: copying one does not keep its node alive. Once
/// the node is freed the handle dangles, and the pool cannot tell a dangling
/// handle from a live one as long as it is in range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle<I: Index = usize>(I);

impl<I: Index> Handle<I> {
    /// The empty list.
    pub const SENTINEL: Self = Self(I::SENTINEL);

    /// Wraps a raw index. The result is validated by every pool operation
    /// that dereferences it.
    #[inline]
    pub const fn from_raw(raw: I) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn into_raw(self) -> I {
        self.0
    }

    /// Returns `true` for the sentinel.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self.0 == I::SENTINEL
    }

    #[inline]
    pub(crate) fn position(self) -> usize {
        self.0.to_position()
    }

    #[inline]
    pub(crate) fn from_position(position: usize) -> Option<Self> {
        I::from_position(position).map(Self)
    }
}

impl<I: Index> Default for Handle<I> {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl<I: Index> fmt::Debug for Handle<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("Handle(sentinel)")
        } else {
            write!(f, "Handle({:?})", self.0)
        }
    }
}
