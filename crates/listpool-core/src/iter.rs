//! Forward cursors over a single list.
//!
//! Cursors are created only by [`ListPool`] and trust the handle they start
//! from. Advancing past the tail lands on the sentinel, which is a fixed
//! point: advancing again does nothing, so any exhausted cursor equals
//! [`ListPool::end`].
//!
//! A cursor borrows the pool, so it cannot outlive a call that might grow
//! node storage.

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;

use crate::handle::{Handle, Index};
use crate::pool::ListPool;

/// Read-only cursor. Also an [`Iterator`] over the remaining values.
pub struct Cursor<'a, V, I: Index = usize> {
    pool: &'a ListPool<V, I>,
    current: Handle<I>,
}

impl<'a, V, I: Index> Cursor<'a, V, I> {
    pub(crate) fn new(pool: &'a ListPool<V, I>, current: Handle<I>) -> Self {
        Self { pool, current }
    }

    /// Handle of the node under the cursor.
    #[inline]
    pub fn handle(&self) -> Handle<I> {
        self.current
    }

    /// Returns `true` once the cursor sits on the sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_sentinel()
    }

    /// Value of the node under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of its list.
    #[inline]
    pub fn value(&self) -> &'a V {
        assert!(!self.is_end(), "dereferenced a cursor at the end of its list");
        &self.pool.slab().node(self.current).value
    }

    /// Move to the next node; no-op at the end.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_end() {
            self.current = self.pool.slab().node(self.current).next;
        }
    }
}

impl<V, I: Index> Clone for Cursor<'_, V, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, I: Index> Copy for Cursor<'_, V, I> {}

impl<V, I: Index> PartialEq for Cursor<'_, V, I> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.pool, other.pool) && self.current == other.current
    }
}

impl<V, I: Index> Eq for Cursor<'_, V, I> {}

impl<V, I: Index> fmt::Debug for Cursor<'_, V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("current", &self.current).finish_non_exhaustive()
    }
}

impl<'a, V, I: Index> Iterator for Cursor<'a, V, I> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let value = self.value();
        self.advance();
        Some(value)
    }
}

impl<V, I: Index> FusedIterator for Cursor<'_, V, I> {}

/// Cursor that can modify values in place.
///
/// Values are reached one at a time through [`value_mut`](Self::value_mut),
/// so this is not an [`Iterator`].
pub struct CursorMut<'a, V, I: Index = usize> {
    pool: &'a mut ListPool<V, I>,
    current: Handle<I>,
}

impl<'a, V, I: Index> CursorMut<'a, V, I> {
    pub(crate) fn new(pool: &'a mut ListPool<V, I>, current: Handle<I>) -> Self {
        Self { pool, current }
    }

    /// Handle of the node under the cursor.
    #[inline]
    pub fn handle(&self) -> Handle<I> {
        self.current
    }

    /// Returns `true` once the cursor sits on the sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_sentinel()
    }

    /// Value of the node under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of its list.
    #[inline]
    pub fn value(&self) -> &V {
        assert!(!self.is_end(), "dereferenced a cursor at the end of its list");
        &self.pool.slab().node(self.current).value
    }

    /// Mutable value of the node under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of its list.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        assert!(!self.is_end(), "dereferenced a cursor at the end of its list");
        &mut self.pool.slab_mut().node_mut(self.current).value
    }

    /// Move to the next node; no-op at the end.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_end() {
            self.current = self.pool.slab().node(self.current).next;
        }
    }
}

impl<V, I: Index> fmt::Debug for CursorMut<'_, V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("current", &self.current).finish_non_exhaustive()
    }
}
