//! Pool construction settings.

/// Configuration for [`ListPool`](crate::ListPool).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of nodes to reserve up front.
    pub initial_capacity: usize,
}

impl PoolConfig {
    /// Configuration with nothing reserved.
    #[must_use]
    pub const fn new() -> Self {
        Self { initial_capacity: 0 }
    }

    /// Reserve room for `nodes` nodes at construction.
    #[must_use]
    pub const fn with_initial_capacity(mut self, nodes: usize) -> Self {
        self.initial_capacity = nodes;
        self
    }
}
