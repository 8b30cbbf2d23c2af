//! The list pool.
//!
//! Many independent singly-linked lists share one node slab. A list is
//! identified by the handle of its head node; every mutating operation takes
//! that handle and returns the list's (possibly new) head.
//!
//! Validation happens before any mutation, so a failed call leaves the pool
//! untouched. Two rules apply:
//!
//! 1. a handle is in range if it is the sentinel or addresses an existing
//!    slot, live or reclaimed ([`PoolError::OutOfRange`]);
//! 2. dereferencing a node requires a non-sentinel handle
//!    ([`PoolError::EmptyList`]), checked before rule 1.
//!
//! Liveness is not tracked per slot: passing a handle whose node was already
//! freed is a caller error the pool cannot detect while the handle stays in
//! range.

use core::fmt;

use tracing::{debug, trace};

use crate::config::PoolConfig;
use crate::error::{PoolError, PoolResult};
use crate::handle::{Handle, Index};
use crate::iter::{Cursor, CursorMut};
use crate::slab::NodeSlab;

/// Pooled storage for singly-linked lists of `V`, addressed by
/// [`Handle<I>`].
///
/// ```
/// use listpool_core::ListPool;
///
/// let mut pool: ListPool<i32> = ListPool::new();
/// let list = pool.new_list();
/// let list = pool.push_front(10, list)?;
/// let list = pool.push_front(20, list)?;
/// assert_eq!(pool.push_back(30, list)?, list);
/// assert_eq!(pool.iter(list).copied().collect::<Vec<_>>(), [20, 10, 30]);
///
/// let rest = pool.free(list)?;
/// assert_eq!(pool.iter(rest).copied().collect::<Vec<_>>(), [10, 30]);
/// let gone = pool.free_list(rest)?;
/// assert!(pool.is_empty(gone));
/// # Ok::<(), listpool_core::PoolError>(())
/// ```
#[derive(Clone)]
pub struct ListPool<V, I: Index = usize> {
    slab: NodeSlab<V, I>,
}

impl<V, I: Index> Default for ListPool<V, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, I: Index> fmt::Debug for ListPool<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPool")
            .field("size", &self.slab.len())
            .field("capacity", &self.slab.capacity())
            .field("free_head", &self.slab.free_head())
            .finish_non_exhaustive()
    }
}

impl<V, I: Index> ListPool<V, I> {
    /// Create an empty pool. Nothing is allocated until the first push.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slab: NodeSlab::new(),
        }
    }

    /// Create a pool with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> PoolResult<Self> {
        Self::with_config(PoolConfig::new().with_initial_capacity(nodes))
    }

    /// Create a pool from `config`.
    pub fn with_config(config: PoolConfig) -> PoolResult<Self> {
        let mut pool = Self::new();
        if config.initial_capacity > 0 {
            pool.slab.reserve(config.initial_capacity)?;
            debug!(capacity = pool.capacity(), "created list pool");
        }
        Ok(pool)
    }

    /// The empty list.
    #[inline]
    #[must_use]
    pub const fn new_list(&self) -> Handle<I> {
        Handle::SENTINEL
    }

    /// Returns `true` if `head` denotes the empty list.
    #[inline]
    pub fn is_empty(&self, head: Handle<I>) -> bool {
        head.is_sentinel()
    }

    /// Ensure capacity for at least `nodes` nodes in total.
    pub fn reserve(&mut self, nodes: usize) -> PoolResult<()> {
        self.slab.reserve(nodes)?;
        debug!(requested = nodes, capacity = self.capacity(), "reserved node storage");
        Ok(())
    }

    /// Nodes the storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slab.capacity()
    }

    /// Slots ever allocated, both live and reclaimed.
    #[inline]
    pub fn size(&self) -> usize {
        self.slab.len()
    }

    /// Value stored in the node at `handle`.
    pub fn value(&self, handle: Handle<I>) -> PoolResult<&V> {
        self.check_node(handle)?;
        Ok(&self.slab.node(handle).value)
    }

    /// Mutable access to the value stored at `handle`.
    pub fn value_mut(&mut self, handle: Handle<I>) -> PoolResult<&mut V> {
        self.check_node(handle)?;
        Ok(&mut self.slab.node_mut(handle).value)
    }

    /// Successor of the node at `handle`; the sentinel for a list's tail.
    pub fn next(&self, handle: Handle<I>) -> PoolResult<Handle<I>> {
        self.check_node(handle)?;
        Ok(self.slab.node(handle).next)
    }

    /// Mutable access to the forward link of the node at `handle`.
    ///
    /// Relinking is the caller's responsibility: a link must keep every list
    /// acyclic and never point into another list or the free chain.
    pub fn next_mut(&mut self, handle: Handle<I>) -> PoolResult<&mut Handle<I>> {
        self.check_node(handle)?;
        Ok(&mut self.slab.node_mut(handle).next)
    }

    /// Prepend `value` to the list at `head` and return the new head.
    pub fn push_front(&mut self, value: V, head: Handle<I>) -> PoolResult<Handle<I>> {
        self.check_range(head)?;
        self.slab.allocate(value, head)
    }

    /// Append `value` to the list at `head`.
    ///
    /// Returns `head` unchanged, except when the list was empty: then the
    /// handle of the single new node is returned and must replace `head`.
    /// Runs in time linear in the length of the list.
    pub fn push_back(&mut self, value: V, head: Handle<I>) -> PoolResult<Handle<I>> {
        if head.is_sentinel() {
            return self.push_front(value, head);
        }
        self.check_range(head)?;
        let tail = self.tail(head)?;
        let node = self.slab.allocate(value, Handle::SENTINEL)?;
        self.slab.node_mut(tail).next = node;
        Ok(head)
    }

    /// Detach the first node of the list at `head` and return the rest.
    ///
    /// `head` dangles afterwards. Freeing the empty list is a no-op.
    pub fn free(&mut self, head: Handle<I>) -> PoolResult<Handle<I>> {
        if head.is_sentinel() {
            return Ok(head);
        }
        self.check_range(head)?;
        let next = self.slab.node(head).next;
        self.slab.release(head);
        Ok(next)
    }

    /// Reclaim every node of the list at `head` and return the empty list.
    ///
    /// The whole list is spliced onto the free chain at once; `head` and every
    /// handle into the list dangle afterwards.
    pub fn free_list(&mut self, head: Handle<I>) -> PoolResult<Handle<I>> {
        if head.is_sentinel() {
            return Ok(head);
        }
        self.check_range(head)?;
        let tail = self.tail(head)?;
        self.slab.release_chain(head, tail);
        trace!(?head, ?tail, "reclaimed list");
        Ok(self.new_list())
    }

    /// Read-only cursor positioned at `head`.
    ///
    /// The cursor trusts `head`; validate externally supplied handles with
    /// [`value`](Self::value) first.
    #[inline]
    pub fn cursor(&self, head: Handle<I>) -> Cursor<'_, V, I> {
        Cursor::new(self, head)
    }

    /// Iterator over the values of the list at `head`, front to back.
    #[inline]
    pub fn iter(&self, head: Handle<I>) -> Cursor<'_, V, I> {
        self.cursor(head)
    }

    /// Cursor at the sentinel. Every cursor over this pool that has walked
    /// off the end of its list compares equal to it.
    #[inline]
    pub fn end(&self) -> Cursor<'_, V, I> {
        Cursor::new(self, Handle::SENTINEL)
    }

    /// Cursor positioned at `head` that can modify values in place.
    #[inline]
    pub fn cursor_mut(&mut self, head: Handle<I>) -> CursorMut<'_, V, I> {
        CursorMut::new(self, head)
    }

    /// Node resolution for cursors, which skip validation.
    #[inline]
    pub(crate) fn slab(&self) -> &NodeSlab<V, I> {
        &self.slab
    }

    #[inline]
    pub(crate) fn slab_mut(&mut self) -> &mut NodeSlab<V, I> {
        &mut self.slab
    }

    /// Position of the last node of the list at `head`.
    ///
    /// `head` must be non-sentinel and in range. Links are range-checked on
    /// the way, so a corrupted link is reported instead of indexed.
    fn tail(&self, head: Handle<I>) -> PoolResult<Handle<I>> {
        let mut current = head;
        loop {
            let next = self.slab.node(current).next;
            if next.is_sentinel() {
                return Ok(current);
            }
            self.check_range(next)?;
            current = next;
        }
    }

    fn check_range(&self, handle: Handle<I>) -> PoolResult<()> {
        if self.slab.in_range(handle) {
            return Ok(());
        }
        trace!(?handle, size = self.size(), "handle out of range");
        Err(PoolError::OutOfRange {
            index: handle.position(),
            size: self.size(),
        })
    }

    fn check_node(&self, handle: Handle<I>) -> PoolResult<()> {
        if handle.is_sentinel() {
            return Err(PoolError::EmptyList);
        }
        self.check_range(handle)
    }
}
