// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The engine handle passed to target and config bodies.

use crate::dispatch::CommandPool;
use crate::env::EnvStack;
use crate::join;
use crate::mapper::{self, MapRule};
use crate::pool::Pool;
use smelt_core::{limits, BuildError};
use std::rc::Rc;

/// Snapshot of the glob/join/map pool tops around one target body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScopeCheckpoint {
    globs: usize,
    joins: usize,
    maps: usize,
}

/// Per-run engine handle.
///
/// `Ctx` owns the four scoped pools and the worker pool. Bodies use it for
/// every in-body operation; the executor uses it to checkpoint and release
/// resources around each body. Allocation results are `Rc`-shared: the pool
/// keeps the owning slot, the caller gets a cheap handle.
pub struct Ctx {
    globs: Pool<Rc<[String]>>,
    joins: Pool<Rc<str>>,
    maps: Pool<Rc<[String]>>,
    envs: EnvStack,
    commands: CommandPool,
}

impl Ctx {
    pub(crate) fn new() -> Self {
        Self {
            globs: Pool::new("glob", limits::MAX_GLOBS),
            joins: Pool::new("join", limits::MAX_JOINED_STRINGS),
            maps: Pool::new("map", limits::MAX_MAPS),
            envs: EnvStack::default(),
            commands: CommandPool::default(),
        }
    }

    /// Expand a glob pattern.
    ///
    /// The match list lives on the glob pool until the surrounding scope is
    /// released. A pattern with no matches returns an empty list and takes
    /// no pool slot.
    pub fn glob(&mut self, pattern: &str) -> Result<Rc<[String]>, BuildError> {
        let matches =
            smelt_shell::expand(pattern).map_err(|e| BuildError::Shell(e.to_string()))?;
        if matches.is_empty() {
            return Ok(Rc::from(Vec::new()));
        }
        let shared: Rc<[String]> = matches.into();
        self.globs
            .push(Rc::clone(&shared))
            .map_err(|_| BuildError::GlobPoolFull)?;
        Ok(shared)
    }

    /// Expand a glob pattern, run `f` over each match, and release the glob
    /// pool back to where it stood before the call.
    pub fn glob_scoped<F>(&mut self, pattern: &str, mut f: F) -> Result<(), BuildError>
    where
        F: FnMut(&mut Ctx, &str) -> Result<(), BuildError>,
    {
        let checkpoint = self.globs.checkpoint();
        let matches = self.glob(pattern)?;
        for path in matches.iter() {
            f(self, path)?;
        }
        self.globs.release_to(checkpoint);
        Ok(())
    }

    /// Join strings with a separator into one pool-owned buffer.
    ///
    /// Joins longer than the buffer bound are truncated silently. An empty
    /// input yields an empty string and takes no pool slot.
    pub fn join<S: AsRef<str>>(
        &mut self,
        strings: &[S],
        separator: &str,
    ) -> Result<Rc<str>, BuildError> {
        if strings.is_empty() {
            return Ok(Rc::from(""));
        }
        let joined = join::bounded(
            strings.iter().map(AsRef::as_ref),
            separator,
            limits::MAX_JOINED_LEN,
        );
        let shared: Rc<str> = joined.into();
        self.joins
            .push(Rc::clone(&shared))
            .map_err(|_| BuildError::JoinPoolFull)?;
        Ok(shared)
    }

    /// Rewrite each input path with the given rules.
    ///
    /// The whole result array is one map-pool entry; its strings are freed
    /// together when the owning scope is released.
    pub fn map<S: AsRef<str>>(
        &mut self,
        inputs: &[S],
        rules: &[MapRule],
    ) -> Result<Rc<[String]>, BuildError> {
        let mut mapped = Vec::with_capacity(inputs.len());
        for input in inputs {
            mapped.push(mapper::apply(input.as_ref(), rules)?);
        }
        let shared: Rc<[String]> = mapped.into();
        self.maps
            .push(Rc::clone(&shared))
            .map_err(|_| BuildError::MapPoolFull)?;
        Ok(shared)
    }

    /// Override an environment variable for the rest of the current target.
    ///
    /// The previous state is recorded and restored when the target's scope
    /// is released, including full removal for variables that were unset.
    pub fn set_env(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
        self.envs.set(name, value)
    }

    /// Read an environment variable.
    pub fn get_env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    /// Run a shell command and block until it exits. Nonzero is fatal.
    pub fn run(&mut self, command: impl Into<String>) -> Result<(), BuildError> {
        self.commands.dispatch(false, command.into())
    }

    /// Dispatch a shell command onto a worker thread.
    ///
    /// The command runs concurrently with the rest of the target; failures
    /// surface at the join barrier after the current top-level target.
    pub fn run_bg(&mut self, command: impl Into<String>) -> Result<(), BuildError> {
        self.commands.dispatch(true, command.into())
    }

    /// Live entries on the glob pool.
    pub fn live_globs(&self) -> usize {
        self.globs.len()
    }

    /// Live entries on the joined-string pool.
    pub fn live_joins(&self) -> usize {
        self.joins.len()
    }

    /// Live entries on the map pool.
    pub fn live_maps(&self) -> usize {
        self.maps.len()
    }

    /// Live environment-restore records.
    pub fn live_envs(&self) -> usize {
        self.envs.len()
    }

    /// Workers dispatched but not yet joined.
    pub fn outstanding_workers(&self) -> usize {
        self.commands.outstanding()
    }

    pub(crate) fn env_checkpoint(&self) -> usize {
        self.envs.checkpoint()
    }

    pub(crate) fn release_env(&mut self, checkpoint: usize) {
        self.envs.release_to(checkpoint);
    }

    pub(crate) fn scope_checkpoint(&self) -> ScopeCheckpoint {
        ScopeCheckpoint {
            globs: self.globs.checkpoint(),
            joins: self.joins.checkpoint(),
            maps: self.maps.checkpoint(),
        }
    }

    /// Release the body-scoped pools. Maps may reference other strings and
    /// go first; globs last.
    pub(crate) fn release_scope(&mut self, checkpoint: ScopeCheckpoint) {
        self.maps.release_to(checkpoint.maps);
        self.joins.release_to(checkpoint.joins);
        self.globs.release_to(checkpoint.globs);
    }

    pub(crate) fn join_workers(&mut self) -> Result<(), BuildError> {
        self.commands.join_all()
    }
}

#[cfg(test)]
#[path = "ctx_tests.rs"]
mod tests;
