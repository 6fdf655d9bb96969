// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpointed resource pools.
//!
//! Every in-body allocation (glob results, joined strings, mapped-name
//! arrays) is owned by one of these stacks. The executor snapshots the top
//! index before a target body runs and releases back to that snapshot when
//! it returns, so nothing a body allocates outlives the body.

/// Marker error: the pool is at capacity.
#[derive(Debug)]
pub(crate) struct PoolFull;

/// A bounded stack of owned entries with checkpoint/release semantics.
pub(crate) struct Pool<T> {
    label: &'static str,
    capacity: usize,
    entries: Vec<T>,
}

impl<T> Pool<T> {
    pub(crate) fn new(label: &'static str, capacity: usize) -> Self {
        Self {
            label,
            capacity,
            entries: Vec::new(),
        }
    }

    /// Append an entry. Fails when the pool is at capacity.
    pub(crate) fn push(&mut self, entry: T) -> Result<(), PoolFull> {
        if self.entries.len() >= self.capacity {
            return Err(PoolFull);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Snapshot the current top index.
    pub(crate) fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Pop and drop entries until the top equals `checkpoint`, most recent
    /// first.
    pub(crate) fn release_to(&mut self, checkpoint: usize) {
        let released = self.entries.len().saturating_sub(checkpoint);
        while self.entries.len() > checkpoint {
            self.entries.pop();
        }
        if released > 0 {
            tracing::trace!(pool = self.label, released, "released pool entries");
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
