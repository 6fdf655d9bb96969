// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped environment-variable overrides.
//!
//! `set` captures the variable's previous state before overwriting it, and
//! `release_to` replays those records newest-first, so the process
//! environment after a checkpoint release is byte-identical to what it was
//! when the checkpoint was taken. Restore runs after the other pools release
//! so teardown side effects observe the restored state.

use smelt_core::{limits, BuildError};
use std::ffi::OsString;

/// One captured variable state: the value before the override, or `None` if
/// the variable was unset.
struct EnvRecord {
    name: String,
    previous: Option<OsString>,
}

/// Stack of environment-restore records.
#[derive(Default)]
pub(crate) struct EnvStack {
    records: Vec<EnvRecord>,
}

impl EnvStack {
    /// Override `name` with `value`, recording the prior state.
    pub(crate) fn set(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
        if self.records.len() >= limits::MAX_ENVS {
            return Err(BuildError::EnvPoolFull);
        }
        // std::env::set_var panics on these; reject them up front.
        if name.is_empty() || name.contains('=') || name.contains('\0') || value.contains('\0') {
            return Err(BuildError::InvalidEnv(name.to_string()));
        }

        self.records.push(EnvRecord {
            name: name.to_string(),
            previous: std::env::var_os(name),
        });
        std::env::set_var(name, value);
        Ok(())
    }

    /// Snapshot the current top index.
    pub(crate) fn checkpoint(&self) -> usize {
        self.records.len()
    }

    /// Restore variables newest-first until the top equals `checkpoint`.
    pub(crate) fn release_to(&mut self, checkpoint: usize) {
        while self.records.len() > checkpoint {
            let Some(record) = self.records.pop() else {
                break;
            };
            match record.previous {
                Some(value) => std::env::set_var(&record.name, value),
                None => std::env::remove_var(&record.name),
            }
            tracing::trace!(name = %record.name, "restored environment variable");
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
