#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Pooled allocator for singly-linked lists.
//!
//! A [`ListPool`] stores the nodes of many independent lists in one growable
//! vector and recycles freed nodes through a free chain threaded through the
//! same storage. Lists are named by [`Handle`]s, integer positions where `0`
//! is the empty list.
//!
//! The pool is a plain mutable value with no internal locking. Sharing one
//! across threads needs a lock around the whole pool, since every list draws
//! from the same free chain.

mod config;
mod error;
mod handle;
mod iter;
mod pool;
mod slab;

pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use handle::{Handle, Index};
pub use iter::{Cursor, CursorMut};
pub use pool::ListPool;
