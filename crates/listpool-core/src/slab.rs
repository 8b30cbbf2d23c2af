//! Node storage and the free-list recycler.
//!
//! Nodes live in one append-only `Vec`. A node is either part of some user
//! list or part of the free chain, and `next` links it into whichever one it
//! belongs to:
//!
//! ```text
//! position:   1        2        3        4
//!          [a | 3]  [x | 4]  [b | 0]  [y | 0]
//! list  1 -> 3 -> end          free_head = 2 -> 4 -> end
//! ```
//!
//! Handles are 1-based, so handle `h` lives in slot `h - 1` and the sentinel
//! never addresses a slot.

use tracing::trace;

use crate::error::{PoolError, PoolResult};
use crate::handle::{Handle, Index};

/// A single slot of storage.
#[derive(Debug, Clone)]
pub(crate) struct Node<V, I: Index> {
    pub(crate) value: V,
    /// Next node of the owning user list, or next reclaimed slot.
    pub(crate) next: Handle<I>,
}

/// Growable node storage with an intrusive free chain.
#[derive(Debug, Clone)]
pub(crate) struct NodeSlab<V, I: Index> {
    nodes: Vec<Node<V, I>>,
    /// Head of the reclaimed-slot chain.
    free_head: Handle<I>,
}

impl<V, I: Index> NodeSlab<V, I> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_head: Handle::SENTINEL,
        }
    }

    /// Slots ever allocated, live or reclaimed.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    pub(crate) fn free_head(&self) -> Handle<I> {
        self.free_head
    }

    /// Ensure room for `total` nodes without reallocating.
    pub(crate) fn reserve(&mut self, total: usize) -> PoolResult<()> {
        let additional = total.saturating_sub(self.nodes.len());
        self.nodes.try_reserve(additional)?;
        Ok(())
    }

    /// `true` if `handle` is the sentinel or addresses an existing slot.
    #[inline]
    pub(crate) fn in_range(&self, handle: Handle<I>) -> bool {
        handle.position() <= self.nodes.len()
    }

    /// Resolve a handle already known to be non-sentinel and in range.
    #[inline]
    pub(crate) fn node(&self, handle: Handle<I>) -> &Node<V, I> {
        &self.nodes[handle.position() - 1]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle<I>) -> &mut Node<V, I> {
        &mut self.nodes[handle.position() - 1]
    }

    /// Store `value` with the given successor, reusing a reclaimed slot when
    /// one is available.
    ///
    /// Nothing is modified when an error is returned.
    pub(crate) fn allocate(&mut self, value: V, next: Handle<I>) -> PoolResult<Handle<I>> {
        if let Some(handle) = self.pop_free() {
            let node = self.node_mut(handle);
            // The previous occupant's value is dropped only now.
            node.value = value;
            node.next = next;
            return Ok(handle);
        }

        let handle = Handle::from_position(self.nodes.len() + 1).ok_or(PoolError::IndexOverflow)?;
        if self.nodes.len() == self.nodes.capacity() {
            self.nodes.try_reserve(1)?;
            trace!(
                len = self.nodes.len(),
                capacity = self.nodes.capacity(),
                "grew node storage"
            );
        }
        self.nodes.push(Node { value, next });
        Ok(handle)
    }

    /// Detach the head of the free chain.
    fn pop_free(&mut self) -> Option<Handle<I>> {
        let handle = self.free_head;
        if handle.is_sentinel() {
            return None;
        }
        self.free_head = self.node(handle).next;
        Some(handle)
    }

    /// Prepend a single detached node to the free chain. Its value stays in
    /// place until the slot is reused.
    pub(crate) fn release(&mut self, handle: Handle<I>) {
        let free_head = self.free_head;
        self.node_mut(handle).next = free_head;
        self.free_head = handle;
    }

    /// Prepend the chain `head ..= tail` to the free chain in one splice.
    pub(crate) fn release_chain(&mut self, head: Handle<I>, tail: Handle<I>) {
        let free_head = self.free_head;
        self.node_mut(tail).next = free_head;
        self.free_head = head;
    }
}
